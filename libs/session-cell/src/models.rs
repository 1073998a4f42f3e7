use thiserror::Error;

use shared_models::auth::Admin;
use shared_models::messages;

/// Storage key holding the raw bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Storage key holding the admin record serialized as JSON.
pub const CURRENT_ADMIN_KEY: &str = "currentAdmin";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub auth_token: String,
    pub current_admin: Admin,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(Session),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq)]
pub enum LoginError {
    #[error("Login rejected: {0}")]
    Rejected(String),

    #[error("Login server unreachable")]
    Connectivity,
}

impl LoginError {
    pub fn message(&self) -> String {
        match self {
            LoginError::Rejected(message) => message.clone(),
            LoginError::Connectivity => messages::LOGIN_CONNECTIVITY.to_string(),
        }
    }
}
