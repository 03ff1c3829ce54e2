use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use validator::Validate;

/// Storage model for a blood pressure measurement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BloodPressure {
    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,
}

/// A patient's recorded baseline vitals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthInfo {
    /// Body temperature recorded as normal for the patient, in degrees
    pub normal_temperature: f64,

    /// Blood pressure recorded as normal for the patient
    pub blood_pressure: BloodPressure,
}

/// Storage model for a patient record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientInfo {
    /// Unique identifier for the patient
    pub id: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Date of birth
    pub birth_date: NaiveDate,

    /// Baseline vitals used as the comparison reference
    pub health_info: HealthInfo,
}

/// Input data for registering a new patient. The repository assigns
/// the identifier when the record is stored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePatientRequest {
    /// Given name
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: String,

    /// Family name
    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,

    /// Date of birth
    pub birth_date: NaiveDate,

    /// Baseline vitals recorded at registration
    pub health_info: HealthInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_info_json_shape() {
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

        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["birth_date"], "1980-11-26");
        assert_eq!(json["health_info"]["normal_temperature"], 36.65);
        assert_eq!(json["health_info"]["blood_pressure"]["systolic"], 120);
        assert_eq!(json["health_info"]["blood_pressure"]["diastolic"], 80);
    }

    #[test]
    fn test_blood_pressure_equality_is_field_exact() {
        let baseline = BloodPressure {
            systolic: 120,
            diastolic: 80,
        };

        assert_eq!(
            baseline,
            BloodPressure {
                systolic: 120,
                diastolic: 80
            }
        );
        assert_ne!(
            baseline,
            BloodPressure {
                systolic: 120,
                diastolic: 60
            }
        );
        assert_ne!(
            baseline,
            BloodPressure {
                systolic: 125,
                diastolic: 80
            }
        );
    }
}
