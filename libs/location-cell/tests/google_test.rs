use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use location_cell::{Geocoder, GoogleMapsClient, LocationError, PlacesProvider};
use shared_models::geo::LatLng;
use shared_utils::test_utils::TestConfig;

fn client_for(mock_server: &MockServer) -> GoogleMapsClient {
    GoogleMapsClient::new(&TestConfig::with_mock_server(&mock_server.uri()).to_app_config())
}

#[tokio::test]
async fn test_autocomplete_is_restricted_to_country() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/autocomplete/json"))
        .and(query_param("input", "Irsal, Ramallah"))
        .and(query_param("components", "country:ps"))
        .and(query_param("key", "test-maps-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "predictions": [
                { "description": "Al-Irsal St, Ramallah", "place_id": "abc" },
                { "description": "Irsal Center, Ramallah" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let suggestions = client_for(&mock_server)
        .suggest("Irsal, Ramallah", "ps")
        .await
        .unwrap();

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].description, "Al-Irsal St, Ramallah");
    assert_eq!(suggestions[0].place_id.as_deref(), Some("abc"));
    assert_eq!(suggestions[1].place_id, None);
}

#[tokio::test]
async fn test_autocomplete_zero_results_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/autocomplete/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ZERO_RESULTS",
            "predictions": []
        })))
        .mount(&mock_server)
        .await;

    let suggestions = client_for(&mock_server).suggest("qqqq", "ps").await.unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn test_autocomplete_denied_is_service_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/place/autocomplete/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).suggest("Irsal", "ps").await.unwrap_err();
    assert_matches!(err, LocationError::Service { ref status, .. } if status == "REQUEST_DENIED");
}

#[tokio::test]
async fn test_geocode_takes_first_candidate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("address", "Al-Irsal St, Ramallah"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                {
                    "formatted_address": "Al-Irsal St, Ramallah",
                    "geometry": { "location": { "lat": 31.9105, "lng": 35.2071 } }
                },
                {
                    "geometry": { "location": { "lat": 0.0, "lng": 0.0 } }
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .geocode("Al-Irsal St, Ramallah")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.location, LatLng::new(31.9105, 35.2071));
    assert_eq!(result.formatted_address.as_deref(), Some("Al-Irsal St, Ramallah"));
}

#[tokio::test]
async fn test_geocode_zero_results_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ZERO_RESULTS",
            "results": []
        })))
        .mount(&mock_server)
        .await;

    assert!(client_for(&mock_server).geocode("Nowhere").await.unwrap().is_none());
}

#[tokio::test]
async fn test_http_failure_is_service_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).geocode("Ramallah").await.unwrap_err();
    assert_matches!(err, LocationError::Service { .. });
}

#[tokio::test]
async fn test_missing_key_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = TestConfig {
        google_maps_api_key: String::new(),
        ..TestConfig::with_mock_server(&mock_server.uri())
    };
    let client = GoogleMapsClient::new(&config.to_app_config());

    assert!(!client.is_configured());
    assert_matches!(client.suggest("Irsal", "ps").await, Err(LocationError::NotConfigured));
    assert_matches!(client.geocode("Irsal").await, Err(LocationError::NotConfigured));
}
