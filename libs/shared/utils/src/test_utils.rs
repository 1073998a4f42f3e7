use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::directory::{Clinic, ClinicDoctor, Doctor, Specialty};

pub struct TestConfig {
    pub api_url: String,
    pub google_maps_api_key: String,
    pub google_maps_base_url: String,
    pub session_file: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000/api".to_string(),
            google_maps_api_key: "test-maps-key".to_string(),
            google_maps_base_url: "http://localhost:8001/maps/api".to_string(),
            session_file: "admin_session.json".to_string(),
        }
    }
}

impl TestConfig {
    /// Points both the directory API and the mapping service at one mock server.
    pub fn with_mock_server(uri: &str) -> Self {
        Self {
            api_url: format!("{}/api", uri),
            google_maps_base_url: format!("{}/maps/api", uri),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            api_url: self.api_url.clone(),
            google_maps_api_key: self.google_maps_api_key.clone(),
            google_maps_base_url: self.google_maps_base_url.clone(),
            session_file: self.session_file.clone(),
            listen_addr: "127.0.0.1:0".to_string(),
        }
    }
}

pub struct MockApiResponses;

impl MockApiResponses {
    pub fn specialty(id: i64, name: &str) -> Value {
        json!({ "id": id, "name": name })
    }

    pub fn doctor(id: i64, name: &str, specialty_id: i64, specialty_name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "specialty_id": specialty_id,
            "specialty": { "id": specialty_id, "name": specialty_name },
            "phone": "0599123456",
            "email": null,
            "bio": null
        })
    }

    pub fn clinic(id: i64, name: &str, doctor_id: i64, doctor_name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "doctor": { "id": doctor_id, "name": doctor_name },
            "address": "Al-Irsal St, Ramallah",
            "latitude": 31.9038,
            "longitude": 35.2034,
            "phone": null,
            "working_hours": "Sun-Thu 9:00-17:00"
        })
    }

    pub fn login_success(token: &str, username: &str) -> Value {
        json!({
            "access_token": token,
            "token_type": "bearer",
            "admin": { "id": 1, "username": username }
        })
    }

    pub fn error_detail(detail: &str) -> Value {
        json!({ "detail": detail })
    }
}

/// Typed fixtures for tests that exercise renderers and stores directly.
pub struct Fixtures;

impl Fixtures {
    pub fn specialty(id: i64, name: &str) -> Specialty {
        Specialty { id, name: name.to_string() }
    }

    pub fn doctor(id: i64, name: &str, specialty: &Specialty) -> Doctor {
        Doctor {
            id,
            name: name.to_string(),
            specialty_id: Some(specialty.id),
            specialty: specialty.clone(),
            phone: None,
            email: None,
            bio: None,
        }
    }

    pub fn clinic(id: i64, name: &str, doctor: &Doctor) -> Clinic {
        Clinic {
            id,
            name: name.to_string(),
            doctor: ClinicDoctor { id: doctor.id, name: doctor.name.clone() },
            address: "Al-Irsal St, Ramallah".to_string(),
            latitude: 31.9038,
            longitude: 35.2034,
            phone: None,
            working_hours: None,
        }
    }
}
