use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::auth::{ErrorBody, LoginRequest, LoginResponse};
use shared_models::directory::{Clinic, Doctor, NewClinic, NewDoctor, NewSpecialty, Specialty};

use crate::error::ApiError;

/// Thin client for the clinic directory REST API.
///
/// Logins and list fetches go out without credentials; every mutation
/// carries the admin's bearer token.
#[derive(Clone)]
pub struct ClinicApiClient {
    client: Client,
    base_url: String,
}

impl ClinicApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client.request(method, &url);

        if let Some(token) = auth_token {
            req = req.bearer_auth(token);
        }

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);

            let detail = serde_json::from_str::<ErrorBody>(&error_text)
                .ok()
                .and_then(ErrorBody::message);

            return Err(ApiError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response)
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, auth_token, body).await?;
        let text = response.text().await?;

        serde_json::from_str::<T>(&text)
            .map_err(|e| ApiError::Decode(format!("{} ({})", e, path)))
    }

    /// Issues a request whose response body the dashboard never reads.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        auth_token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(), ApiError> {
        self.send(method, path, auth_token, body).await?;
        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = encode(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;

        self.request(Method::POST, "/admin/login", None, Some(body)).await
    }

    pub async fn list_specialties(&self) -> Result<Vec<Specialty>, ApiError> {
        self.request(Method::GET, "/specialties", None, None).await
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        self.request(Method::GET, "/doctors", None, None).await
    }

    pub async fn list_clinics(&self) -> Result<Vec<Clinic>, ApiError> {
        self.request(Method::GET, "/clinics", None, None).await
    }

    pub async fn create_specialty(
        &self,
        specialty: &NewSpecialty,
        auth_token: &str,
    ) -> Result<(), ApiError> {
        self.execute(Method::POST, "/specialties", Some(auth_token), Some(encode(specialty)?))
            .await
    }

    pub async fn create_doctor(&self, doctor: &NewDoctor, auth_token: &str) -> Result<(), ApiError> {
        self.execute(Method::POST, "/doctors", Some(auth_token), Some(encode(doctor)?))
            .await
    }

    pub async fn delete_doctor(&self, doctor_id: i64, auth_token: &str) -> Result<(), ApiError> {
        let path = format!("/doctors/{}", doctor_id);
        self.execute(Method::DELETE, &path, Some(auth_token), None).await
    }

    pub async fn create_clinic(&self, clinic: &NewClinic, auth_token: &str) -> Result<(), ApiError> {
        self.execute(Method::POST, "/clinics", Some(auth_token), Some(encode(clinic)?))
            .await
    }

    pub async fn delete_clinic(&self, clinic_id: i64, auth_token: &str) -> Result<(), ApiError> {
        let path = format!("/clinics/{}", clinic_id);
        self.execute(Method::DELETE, &path, Some(auth_token), None).await
    }
}

fn encode<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}
