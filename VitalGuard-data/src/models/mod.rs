// Storage models for patient records
pub mod patient;

// Re-export commonly used types
pub use patient::{BloodPressure, CreatePatientRequest, HealthInfo, PatientInfo};
