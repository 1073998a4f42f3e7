use std::cell::Cell;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use directory_cell::{
    ClinicForm, DataStore, DeleteOutcome, DirectoryService, DoctorForm, FormOutcome, SpecialtyForm,
};
use shared_api::ClinicApiClient;
use shared_utils::test_utils::{MockApiResponses, TestConfig};

const TOKEN: &str = "admin-token";

fn service_for(mock_server: &MockServer) -> DirectoryService {
    DirectoryService::new(ClinicApiClient::new(
        &TestConfig::with_mock_server(&mock_server.uri()).to_app_config(),
    ))
}

async fn requests_to(mock_server: &MockServer, verb: &str, route: &str) -> usize {
    mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method.as_str() == verb && r.url.path() == route)
        .count()
}

#[tokio::test]
async fn test_add_specialty_refreshes_specialties() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/specialties"))
        .and(header("authorization", format!("Bearer {}", TOKEN)))
        .and(body_json(json!({"name": "Neurology"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3, "name": "Neurology"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/specialties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::specialty(3, "Neurology"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let mut store = DataStore::new();
    let form = SpecialtyForm { name: "Neurology".to_string() };

    let outcome = service.add_specialty(&mut store, TOKEN, &form).await;

    assert_eq!(outcome, FormOutcome::Saved("Specialty added successfully!".to_string()));
    assert_eq!(store.stats().specialties, 1);
}

#[tokio::test]
async fn test_add_doctor_rejection_shows_detail_and_skips_refresh() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/doctors"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(MockApiResponses::error_detail("Specialty not found")),
        )
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let mut store = DataStore::new();
    let form = DoctorForm {
        name: "Dr. Omar".to_string(),
        specialty_id: "99".to_string(),
        ..DoctorForm::default()
    };

    let outcome = service.add_doctor(&mut store, TOKEN, &form).await;

    assert_eq!(outcome, FormOutcome::Failed("Specialty not found".to_string()));
    assert_eq!(requests_to(&mock_server, "GET", "/api/doctors").await, 0);
}

#[tokio::test]
async fn test_add_doctor_rejection_without_detail_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/doctors"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [{"loc": ["body", "name"], "msg": "field required"}]
        })))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let form = DoctorForm {
        specialty_id: "1".to_string(),
        ..DoctorForm::default()
    };

    let outcome = service.add_doctor(&mut DataStore::new(), TOKEN, &form).await;
    assert_eq!(outcome, FormOutcome::Failed("Failed to add doctor".to_string()));
}

#[tokio::test]
async fn test_add_doctor_with_unparsed_specialty_sends_nothing() {
    let mock_server = MockServer::start().await;
    let service = service_for(&mock_server);

    let outcome = service
        .add_doctor(&mut DataStore::new(), TOKEN, &DoctorForm::default())
        .await;

    assert_eq!(outcome, FormOutcome::Failed("Please choose a specialty".to_string()));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_clinic_success_refreshes_clinics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/clinics"))
        .and(body_json(json!({
            "doctor_id": 1,
            "name": "Downtown",
            "address": "Main St",
            "latitude": 31.91,
            "longitude": 35.21,
            "phone": null,
            "working_hours": null
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/clinics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::clinic(1, "Downtown", 1, "Dr. Salma"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let mut store = DataStore::new();
    let form = ClinicForm {
        doctor_id: "1".to_string(),
        name: "Downtown".to_string(),
        address: "Main St".to_string(),
        latitude: "31.91".to_string(),
        longitude: "35.21".to_string(),
        ..ClinicForm::default()
    };

    let outcome = service.add_clinic(&mut store, TOKEN, &form).await;

    assert!(outcome.is_saved());
    assert_eq!(store.clinics().len(), 1);
}

#[tokio::test]
async fn test_add_clinic_network_failure() {
    let config = TestConfig {
        api_url: "http://127.0.0.1:9/api".to_string(),
        ..TestConfig::default()
    };
    let service = DirectoryService::new(ClinicApiClient::new(&config.to_app_config()));
    let form = ClinicForm {
        doctor_id: "1".to_string(),
        latitude: "31.9".to_string(),
        longitude: "35.2".to_string(),
        ..ClinicForm::default()
    };

    let outcome = service.add_clinic(&mut DataStore::new(), TOKEN, &form).await;
    assert_eq!(outcome, FormOutcome::Failed("Could not connect to the server".to_string()));
}

#[tokio::test]
async fn test_declined_doctor_delete_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockApiResponses::doctor(1, "Dr. Salma", 1, "Cardiology"),
        ])))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let mut store = DataStore::new();
    store.refresh_doctors(service.api()).await;

    let asked = Cell::new(0);
    let decline = |prompt: &str| {
        asked.set(asked.get() + 1);
        assert!(prompt.contains("delete this doctor"));
        false
    };

    let outcome = service.delete_doctor(&mut store, TOKEN, 1, &decline).await;

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(asked.get(), 1);
    assert_eq!(store.doctors().len(), 1);
    assert_eq!(requests_to(&mock_server, "DELETE", "/api/doctors/1").await, 0);
}

#[tokio::test]
async fn test_confirmed_doctor_delete_refreshes_doctors_and_clinics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/doctors/1"))
        .and(header("authorization", format!("Bearer {}", TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "deleted"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/doctors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/clinics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let outcome = service
        .delete_doctor(&mut DataStore::new(), TOKEN, 1, &|_: &str| true)
        .await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
}

#[tokio::test]
async fn test_failed_clinic_delete_reports_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/clinics/4"))
        .respond_with(ResponseTemplate::new(403).set_body_json(MockApiResponses::error_detail("Forbidden")))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let outcome = service
        .delete_clinic(&mut DataStore::new(), TOKEN, 4, &|_: &str| true)
        .await;

    assert_matches!(outcome, DeleteOutcome::Failed(ref msg) if msg == "Failed to delete clinic");
    assert_eq!(requests_to(&mock_server, "GET", "/api/clinics").await, 0);
}
