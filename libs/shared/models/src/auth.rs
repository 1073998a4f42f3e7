use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity of the logged-in administrator as returned by the API.
///
/// Only `username` is read by the dashboard; every other field the API sends
/// is kept so the persisted record matches the login response exactly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub admin: Admin,
}

/// Error body returned by the API on rejected requests.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// The human readable message, if the API sent one as a plain string.
    /// Validation failures arrive as a list of objects and yield `None`.
    pub fn message(self) -> Option<String> {
        match self.detail {
            Some(Value::String(msg)) if !msg.trim().is_empty() => Some(msg),
            _ => None,
        }
    }
}
