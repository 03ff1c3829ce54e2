use thiserror::Error;
use validator::Validate;

use vital_guard_data::models::{CreatePatientRequest, HealthInfo, PatientInfo};
use vital_guard_data::repository::{PatientInfoRepositoryTrait, RepositoryError};

/// Patient service errors
#[derive(Debug, Error)]
pub enum PatientServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Not found error
    #[error("Patient not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Trait for patient management operations
pub trait PatientServiceTrait {
    /// Validate a patient registration request
    fn validate_create_request(
        &self,
        request: &CreatePatientRequest,
    ) -> Result<(), PatientServiceError>;

    /// Register a new patient
    fn register_patient(
        &self,
        request: CreatePatientRequest,
    ) -> Result<PatientInfo, PatientServiceError>;

    /// Get a patient record by identifier
    fn get_patient(&self, id: &str) -> Result<PatientInfo, PatientServiceError>;

    /// Replace a patient's recorded baseline
    fn update_health_info(
        &self,
        id: &str,
        health_info: HealthInfo,
    ) -> Result<PatientInfo, PatientServiceError>;
}

/// Patient management service
pub struct PatientService<R> {
    repository: R,
}

impl<R: PatientInfoRepositoryTrait> PatientService<R> {
    /// Create a new patient service
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> PatientServiceError {
        match err {
            RepositoryError::NotFound(msg) => PatientServiceError::NotFound(msg),
            RepositoryError::Validation(msg) => PatientServiceError::ValidationError(msg),
            _ => PatientServiceError::RepositoryError(err.to_string()),
        }
    }
}

impl<R: PatientInfoRepositoryTrait> PatientServiceTrait for PatientService<R> {
    /// Validate a patient registration request
    fn validate_create_request(
        &self,
        request: &CreatePatientRequest,
    ) -> Result<(), PatientServiceError> {
        // Use the validator crate's validation
        if let Err(validation_errors) = request.validate() {
            // Convert validation errors to a meaningful error message
            let error_message = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| {
                            if let Some(msg) = &err.message {
                                msg.to_string()
                            } else {
                                format!("Invalid {}", field)
                            }
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect::<Vec<String>>()
                .join("; ");

            return Err(PatientServiceError::ValidationError(error_message));
        }

        Ok(())
    }

    /// Register a new patient
    fn register_patient(
        &self,
        request: CreatePatientRequest,
    ) -> Result<PatientInfo, PatientServiceError> {
        // Validate the request
        self.validate_create_request(&request)?;

        // Call repository method
        self.repository
            .add(request)
            .map_err(|e| self.map_repo_error(e))
    }

    /// Get a patient record by identifier
    fn get_patient(&self, id: &str) -> Result<PatientInfo, PatientServiceError> {
        self.repository
            .get_by_id(id)
            .map_err(|e| self.map_repo_error(e))
    }

    /// Replace a patient's recorded baseline
    fn update_health_info(
        &self,
        id: &str,
        health_info: HealthInfo,
    ) -> Result<PatientInfo, PatientServiceError> {
        let mut patient = self
            .repository
            .get_by_id(id)
            .map_err(|e| self.map_repo_error(e))?;
        patient.health_info = health_info;

        // Call repository method
        self.repository
            .update(patient)
            .map_err(|e| self.map_repo_error(e))
    }
}
