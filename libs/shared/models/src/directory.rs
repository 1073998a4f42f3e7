use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty_id: Option<i64>,
    pub specialty: Specialty,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl Doctor {
    /// The specialty this doctor belongs to. Falls back to the embedded
    /// specialty when the API omits the foreign key.
    pub fn specialty_id(&self) -> i64 {
        self.specialty_id.unwrap_or(self.specialty.id)
    }
}

/// Doctor as embedded in a clinic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicDoctor {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clinic {
    pub id: i64,
    pub name: String,
    pub doctor: ClinicDoctor,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub working_hours: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSpecialty {
    pub name: String,
}

// Optional fields serialize as explicit nulls, matching what the API expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialty_id: i64,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClinic {
    pub doctor_id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub working_hours: Option<String>,
}

/// Dashboard counters, in the order the stat cards display them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub doctors: usize,
    pub clinics: usize,
    pub specialties: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doctor_specialty_id_fallback() {
        let doctor: Doctor = serde_json::from_value(json!({
            "id": 1,
            "name": "Dr. Salma",
            "specialty": {"id": 4, "name": "Cardiology"}
        }))
        .unwrap();
        assert_eq!(doctor.specialty_id(), 4);
        assert_eq!(doctor.phone, None);

        let doctor: Doctor = serde_json::from_value(json!({
            "id": 1,
            "name": "Dr. Salma",
            "specialty_id": 9,
            "specialty": {"id": 4, "name": "Cardiology"},
            "phone": "0599000000"
        }))
        .unwrap();
        assert_eq!(doctor.specialty_id(), 9);
    }

    #[test]
    fn test_new_doctor_sends_nulls() {
        let body = serde_json::to_value(NewDoctor {
            name: "Dr. Omar".to_string(),
            specialty_id: 2,
            phone: None,
            email: Some("omar@example.com".to_string()),
            bio: None,
        })
        .unwrap();

        assert_eq!(body["phone"], serde_json::Value::Null);
        assert!(body.as_object().unwrap().contains_key("bio"));
        assert_eq!(body["email"], "omar@example.com");
    }

    #[test]
    fn test_clinic_ignores_extra_doctor_fields() {
        let clinic: Clinic = serde_json::from_value(json!({
            "id": 3,
            "name": "Al-Bireh Clinic",
            "doctor": {"id": 1, "name": "Dr. Salma", "specialty": {"id": 4, "name": "Cardiology"}},
            "address": "Main St",
            "latitude": 31.9,
            "longitude": 35.2,
            "working_hours": "9-5"
        }))
        .unwrap();
        assert_eq!(clinic.doctor.name, "Dr. Salma");
        assert_eq!(clinic.phone, None);
    }
}
