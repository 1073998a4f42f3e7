use std::env;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "https://my-doctor-api-wf84.onrender.com/api";
pub const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub google_maps_api_key: String,
    pub google_maps_base_url: String,
    pub session_file: String,
    pub listen_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_url: env::var("CLINIC_API_URL")
                .unwrap_or_else(|_| {
                    warn!("CLINIC_API_URL not set, using default");
                    DEFAULT_API_URL.to_string()
                }),
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("GOOGLE_MAPS_API_KEY not set, using empty value");
                    String::new()
                }),
            google_maps_base_url: env::var("GOOGLE_MAPS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MAPS_BASE_URL.to_string()),
            session_file: env::var("ADMIN_SESSION_FILE")
                .unwrap_or_else(|_| "admin_session.json".to_string()),
            listen_addr: env::var("ADMIN_LISTEN_ADDR")
                .unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
        };

        if !config.is_maps_configured() {
            warn!("Mapping service not configured - address search is disabled");
        }

        config
    }

    pub fn is_maps_configured(&self) -> bool {
        !self.google_maps_api_key.is_empty() && !self.google_maps_base_url.is_empty()
    }
}
