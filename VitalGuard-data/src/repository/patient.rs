use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

use crate::models::patient::{CreatePatientRequest, PatientInfo};
use super::errors::RepositoryError;

/// Repository trait for patient records
pub trait PatientInfoRepositoryTrait {
    /// Get a patient record by its identifier
    fn get_by_id(&self, id: &str) -> Result<PatientInfo, RepositoryError>;

    /// Store a new patient record under a generated identifier
    fn add(&self, request: CreatePatientRequest) -> Result<PatientInfo, RepositoryError>;

    /// Replace an existing patient record
    fn update(&self, patient: PatientInfo) -> Result<PatientInfo, RepositoryError>;

    /// Remove a patient record by its identifier
    fn remove(&self, id: &str) -> Result<(), RepositoryError>;
}

/// In-memory repository for patient records.
/// Interchangeable with any other implementation of the repository trait.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPatientRepository {
    /// Storage for patient records
    patients: Arc<Mutex<HashMap<String, PatientInfo>>>,
}

impl InMemoryPatientRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            patients: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl PatientInfoRepositoryTrait for InMemoryPatientRepository {
    /// Get a patient record by its identifier
    fn get_by_id(&self, id: &str) -> Result<PatientInfo, RepositoryError> {
        let store = self.patients.lock()?;

        store
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Patient with ID {} not found", id)))
    }

    /// Store a new patient record under a generated identifier
    fn add(&self, request: CreatePatientRequest) -> Result<PatientInfo, RepositoryError> {
        // Generate a unique ID
        let id = Uuid::new_v4();

        let patient = PatientInfo {
            id: id.to_string(),
            first_name: request.first_name,
            last_name: request.last_name,
            birth_date: request.birth_date,
            health_info: request.health_info,
        };

        debug!("Storing patient record: {}", patient.id);
        let mut store = self.patients.lock()?;
        store.insert(patient.id.clone(), patient.clone());

        Ok(patient)
    }

    /// Replace an existing patient record
    fn update(&self, patient: PatientInfo) -> Result<PatientInfo, RepositoryError> {
        let mut store = self.patients.lock()?;

        if !store.contains_key(&patient.id) {
            return Err(RepositoryError::NotFound(format!(
                "Patient with ID {} not found",
                patient.id
            )));
        }

        debug!("Updating patient record: {}", patient.id);
        store.insert(patient.id.clone(), patient.clone());

        Ok(patient)
    }

    /// Remove a patient record by its identifier
    fn remove(&self, id: &str) -> Result<(), RepositoryError> {
        let mut store = self.patients.lock()?;

        match store.remove(id) {
            Some(_) => {
                debug!("Removed patient record: {}", id);
                Ok(())
            }
            None => Err(RepositoryError::NotFound(format!(
                "Patient with ID {} not found",
                id
            ))),
        }
    }
}

/// Mock patient repository for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;

    /// Mock implementation of the patient repository for testing
    pub struct MockPatientRepository {
        patients: Vec<PatientInfo>,
    }

    impl Default for MockPatientRepository {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockPatientRepository {
        /// Create a new empty mock repository
        pub fn new() -> Self {
            Self {
                patients: Vec::new(),
            }
        }

        /// Create a mock repository with predefined records
        pub fn with_patients(patients: Vec<PatientInfo>) -> Self {
            Self { patients }
        }
    }

    impl PatientInfoRepositoryTrait for MockPatientRepository {
        fn get_by_id(&self, id: &str) -> Result<PatientInfo, RepositoryError> {
            self.patients
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| {
                    RepositoryError::NotFound(format!("Patient with ID {} not found", id))
                })
        }

        fn add(&self, request: CreatePatientRequest) -> Result<PatientInfo, RepositoryError> {
            Ok(PatientInfo {
                id: Uuid::new_v4().to_string(),
                first_name: request.first_name,
                last_name: request.last_name,
                birth_date: request.birth_date,
                health_info: request.health_info,
            })
        }

        fn update(&self, patient: PatientInfo) -> Result<PatientInfo, RepositoryError> {
            if self.patients.iter().any(|p| p.id == patient.id) {
                Ok(patient)
            } else {
                Err(RepositoryError::NotFound(format!(
                    "Patient with ID {} not found",
                    patient.id
                )))
            }
        }

        fn remove(&self, id: &str) -> Result<(), RepositoryError> {
            if self.patients.iter().any(|p| p.id == id) {
                Ok(())
            } else {
                Err(RepositoryError::NotFound(format!(
                    "Patient with ID {} not found",
                    id
                )))
            }
        }
    }
}

#[cfg(test)]
mod repository_tests {
    use super::*;
    use crate::models::patient::{BloodPressure, HealthInfo};
    use chrono::NaiveDate;

    fn create_request(first_name: &str, last_name: &str) -> CreatePatientRequest {
        CreatePatientRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(1980, 11, 26).unwrap(),
            health_info: HealthInfo {
                normal_temperature: 36.65,
                blood_pressure: BloodPressure {
                    systolic: 120,
                    diastolic: 80,
                },
            },
        }
    }

    #[test]
    fn test_add_then_get_by_id() {
        let repository = InMemoryPatientRepository::new();

        let stored = repository.add(create_request("Ivan", "Petrov")).unwrap();
        let fetched = repository.get_by_id(&stored.id).unwrap();

        assert_eq!(fetched.first_name, "Ivan");
        assert_eq!(fetched.last_name, "Petrov");
        assert_eq!(fetched.health_info, stored.health_info);
    }

    #[test]
    fn test_get_by_id_unknown_returns_not_found() {
        let repository = InMemoryPatientRepository::new();

        let result = repository.get_by_id("missing");
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let repository = InMemoryPatientRepository::new();

        let first = repository.add(create_request("Ivan", "Petrov")).unwrap();
        let second = repository.add(create_request("Semen", "Mikhailov")).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_update_replaces_existing_record() {
        let repository = InMemoryPatientRepository::new();

        let mut stored = repository.add(create_request("Ivan", "Petrov")).unwrap();
        stored.health_info.normal_temperature = 36.8;

        let updated = repository.update(stored.clone()).unwrap();
        assert_eq!(updated.health_info.normal_temperature, 36.8);

        let fetched = repository.get_by_id(&stored.id).unwrap();
        assert_eq!(fetched.health_info.normal_temperature, 36.8);
    }

    #[test]
    fn test_update_unknown_returns_not_found() {
        let repository = InMemoryPatientRepository::new();

        let patient = PatientInfo {
            id: "missing".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1980, 11, 26).unwrap(),
            health_info: HealthInfo {
                normal_temperature: 36.65,
                blood_pressure: BloodPressure {
                    systolic: 120,
                    diastolic: 80,
                },
            },
        };

        let result = repository.update(patient);
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[test]
    fn test_remove_deletes_record() {
        let repository = InMemoryPatientRepository::new();

        let stored = repository.add(create_request("Ivan", "Petrov")).unwrap();
        repository.remove(&stored.id).unwrap();

        let result = repository.get_by_id(&stored.id);
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[test]
    fn test_remove_unknown_returns_not_found() {
        let repository = InMemoryPatientRepository::new();

        let result = repository.remove("missing");
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[test]
    fn test_mock_repository_returns_preloaded_records() {
        let patient = PatientInfo {
            id: "1".to_string(),
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1980, 11, 26).unwrap(),
            health_info: HealthInfo {
                normal_temperature: 36.65,
                blood_pressure: BloodPressure {
                    systolic: 120,
                    diastolic: 80,
                },
            },
        };

        let repository = tests::MockPatientRepository::with_patients(vec![patient]);

        let fetched = repository.get_by_id("1").unwrap();
        assert_eq!(fetched.first_name, "Ivan");

        let result = repository.get_by_id("2");
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }
}
