use tracing::debug;

use vital_guard_data::models::BloodPressure;
use vital_guard_data::repository::{
    InMemoryPatientRepository, PatientInfoRepositoryTrait, RepositoryError,
};

use crate::services::alert::{LoggingAlertService, SendAlertServiceTrait};

/// How far a reading may drop below the recorded normal temperature
/// before an alert is raised, in degrees. The comparison is strict:
/// a drop of exactly this much does not raise an alert.
const TEMPERATURE_DROP_THRESHOLD: f64 = 1.5;

/// Trait for baseline deviation checks
pub trait MedicalServiceTrait {
    /// Compare an observed blood pressure against the patient's baseline
    /// and alert on any mismatch
    fn check_blood_pressure(
        &self,
        patient_id: &str,
        blood_pressure: &BloodPressure,
    ) -> Result<(), RepositoryError>;

    /// Compare an observed temperature against the patient's baseline
    /// and alert when it has dropped too far below it
    fn check_temperature(&self, patient_id: &str, temperature: f64)
        -> Result<(), RepositoryError>;
}

/// Medical check service for baseline deviation decisions.
/// Each check is a stateless evaluation against freshly looked-up
/// baseline data; nothing is retained across calls.
pub struct MedicalService<R, A> {
    patient_repository: R,
    alert_service: A,
}

impl<R, A> MedicalService<R, A> {
    /// Create a new medical check service
    pub fn new(patient_repository: R, alert_service: A) -> Self {
        Self {
            patient_repository,
            alert_service,
        }
    }
}

impl<R: PatientInfoRepositoryTrait, A: SendAlertServiceTrait> MedicalService<R, A> {
    fn alert(&self, patient_id: &str) {
        let message = format!("Warning, patient with id: {}, need help", patient_id);
        self.alert_service.send(&message);
    }
}

impl<R: PatientInfoRepositoryTrait, A: SendAlertServiceTrait> MedicalServiceTrait
    for MedicalService<R, A>
{
    /// Compare an observed blood pressure against the patient's baseline.
    /// Any difference in either field raises an alert; equality in both
    /// fields passes. Lookup failures propagate to the caller unmodified.
    fn check_blood_pressure(
        &self,
        patient_id: &str,
        blood_pressure: &BloodPressure,
    ) -> Result<(), RepositoryError> {
        let patient = self.patient_repository.get_by_id(patient_id)?;

        if patient.health_info.blood_pressure != *blood_pressure {
            self.alert(patient_id);
        } else {
            debug!("Blood pressure for patient {} matches the baseline", patient_id);
        }

        Ok(())
    }

    /// Compare an observed temperature against the patient's baseline.
    /// Alerts only when the reading is more than the threshold below the
    /// recorded normal; readings at or above the baseline always pass.
    fn check_temperature(
        &self,
        patient_id: &str,
        temperature: f64,
    ) -> Result<(), RepositoryError> {
        let patient = self.patient_repository.get_by_id(patient_id)?;

        if patient.health_info.normal_temperature - temperature > TEMPERATURE_DROP_THRESHOLD {
            self.alert(patient_id);
        } else {
            debug!("Temperature for patient {} is within the allowed range", patient_id);
        }

        Ok(())
    }
}

/// Create a default medical service backed by the in-memory repository
/// and the logging alert service
pub fn create_default_medical_service() -> impl MedicalServiceTrait + Send + Sync {
    MedicalService::new(InMemoryPatientRepository::new(), LoggingAlertService::new())
}
