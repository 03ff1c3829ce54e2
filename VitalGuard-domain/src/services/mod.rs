pub mod alert;
pub mod medical;
pub mod patient;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use alert::{LoggingAlertService, SendAlertServiceTrait};
pub use medical::{create_default_medical_service, MedicalService, MedicalServiceTrait};
pub use patient::{PatientService, PatientServiceError, PatientServiceTrait};
