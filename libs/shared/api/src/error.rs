use thiserror::Error;

use shared_models::messages;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API rejected request ({status}): {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    #[error("Could not reach API: {0}")]
    Connectivity(#[from] reqwest::Error),

    #[error("Unexpected API response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Connectivity(_))
    }

    /// Message shown to the administrator. Server-provided detail wins,
    /// transport failures get the connectivity text, anything else the
    /// operation's fallback.
    pub fn user_message(&self, fallback: &str, connectivity: &str) -> String {
        match self {
            ApiError::Rejected { detail: Some(detail), .. } => detail.clone(),
            ApiError::Connectivity(_) => connectivity.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn form_message(&self, fallback: &str) -> String {
        self.user_message(fallback, messages::CONNECTIVITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::Rejected { status: 400, detail: Some("Name already exists".to_string()) };
        assert_eq!(err.form_message("Failed"), "Name already exists");

        let err = ApiError::Rejected { status: 500, detail: None };
        assert_eq!(err.form_message("Failed"), "Failed");

        let err = ApiError::Decode("not json".to_string());
        assert_eq!(err.form_message("Failed"), "Failed");
        assert!(!err.is_connectivity());
    }
}
