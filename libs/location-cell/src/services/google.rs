use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::models::{
    AutocompleteResponse, GeocodeResponse, GeocodeResult, LocationError, Suggestion,
};
use crate::services::providers::{Geocoder, PlacesProvider};

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Google Maps web service client for the Places Autocomplete and Geocoding APIs.
/// Based on: https://developers.google.com/maps/documentation/places/web-service/autocomplete
pub struct GoogleMapsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleMapsClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.google_maps_api_key.clone(),
            base_url: config.google_maps_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<String, LocationError> {
        if !self.is_configured() {
            return Err(LocationError::NotConfigured);
        }

        debug!("Sending mapping request to: {}", url);

        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!("Mapping request failed: {} - {}", status, response_text);
            return Err(LocationError::Service {
                status: status.to_string(),
                message: response_text,
            });
        }

        Ok(response_text)
    }
}

#[async_trait]
impl PlacesProvider for GoogleMapsClient {
    /// GET /place/autocomplete/json
    async fn suggest(&self, input: &str, country: &str) -> Result<Vec<Suggestion>, LocationError> {
        let url = format!("{}/place/autocomplete/json", self.base_url);
        let components = format!("country:{}", country);

        let body = self
            .get_json(&url, &[("input", input), ("components", components.as_str())])
            .await?;
        let response: AutocompleteResponse = serde_json::from_str(&body)?;

        match response.status.as_str() {
            STATUS_OK => Ok(response.predictions),
            STATUS_ZERO_RESULTS => Ok(Vec::new()),
            _ => {
                error!("Autocomplete failed with status {}", response.status);
                Err(LocationError::Service {
                    status: response.status,
                    message: response.error_message.unwrap_or_default(),
                })
            }
        }
    }
}

#[async_trait]
impl Geocoder for GoogleMapsClient {
    /// GET /geocode/json
    async fn geocode(&self, address: &str) -> Result<Option<GeocodeResult>, LocationError> {
        let url = format!("{}/geocode/json", self.base_url);

        let body = self.get_json(&url, &[("address", address)]).await?;
        let response: GeocodeResponse = serde_json::from_str(&body)?;

        match response.status.as_str() {
            STATUS_OK => Ok(response.results.into_iter().next().map(|candidate| GeocodeResult {
                location: candidate.geometry.location,
                formatted_address: candidate.formatted_address,
            })),
            STATUS_ZERO_RESULTS => Ok(None),
            _ => {
                error!("Geocoding failed with status {}", response.status);
                Err(LocationError::Service {
                    status: response.status,
                    message: response.error_message.unwrap_or_default(),
                })
            }
        }
    }
}
