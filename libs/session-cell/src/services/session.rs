use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use shared_api::{ApiError, ClinicApiClient};
use shared_models::auth::Admin;
use shared_models::messages;

use crate::models::{
    LoginError, Session, SessionState, StorageError, AUTH_TOKEN_KEY, CURRENT_ADMIN_KEY,
};
use crate::services::storage::SessionStorage;

/// Owns the administrator's session and keeps it mirrored in storage.
///
/// A persisted token is trusted as-is on restore; a stale token only shows up
/// as a failed call later on.
pub struct SessionManager {
    storage: Arc<dyn SessionStorage>,
    state: SessionState,
}

impl SessionManager {
    /// Starts from whatever the storage holds: logged in when a token is
    /// present, with an empty identity if the admin record is missing or
    /// unreadable.
    pub fn restore(storage: Arc<dyn SessionStorage>) -> Self {
        let token = storage.get_item(AUTH_TOKEN_KEY).unwrap_or_else(|e| {
            warn!("Could not read persisted session: {}", e);
            None
        });

        let state = match token {
            Some(auth_token) if !auth_token.is_empty() => {
                let current_admin = Self::read_admin(storage.as_ref());
                info!("Resuming persisted admin session");
                SessionState::LoggedIn(Session { auth_token, current_admin })
            }
            _ => SessionState::LoggedOut,
        };

        Self { storage, state }
    }

    fn read_admin(storage: &dyn SessionStorage) -> Admin {
        match storage.get_item(CURRENT_ADMIN_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Persisted admin record is unreadable: {}", e);
                Admin::default()
            }),
            Ok(None) => Admin::default(),
            Err(e) => {
                warn!("Could not read persisted admin record: {}", e);
                Admin::default()
            }
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            SessionState::LoggedIn(session) => Some(session),
            SessionState::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_some()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.session().map(|s| s.auth_token.as_str())
    }

    pub fn current_admin(&self) -> Option<&Admin> {
        self.session().map(|s| &s.current_admin)
    }

    #[instrument(skip(self, api, password))]
    pub async fn login(
        &mut self,
        api: &ClinicApiClient,
        username: &str,
        password: &str,
    ) -> Result<Session, LoginError> {
        let response = api.login(username, password).await.map_err(|e| {
            warn!("Login failed: {}", e);
            match e {
                ApiError::Connectivity(_) => LoginError::Connectivity,
                other => LoginError::Rejected(
                    other.user_message(messages::LOGIN_FAILED, messages::LOGIN_CONNECTIVITY),
                ),
            }
        })?;

        let session = Session {
            auth_token: response.access_token,
            current_admin: response.admin,
        };

        // The session stays usable in memory even if it could not be persisted.
        if let Err(e) = self.persist(&session) {
            warn!("Could not persist admin session: {}", e);
        }

        info!("Admin logged in");
        self.state = SessionState::LoggedIn(session.clone());
        Ok(session)
    }

    fn persist(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set_item(AUTH_TOKEN_KEY, &session.auth_token)?;
        self.storage
            .set_item(CURRENT_ADMIN_KEY, &serde_json::to_string(&session.current_admin)?)?;
        Ok(())
    }

    /// Forgets the session locally. The token is not revoked server-side.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.state = SessionState::LoggedOut;
        self.storage.remove_item(AUTH_TOKEN_KEY)?;
        self.storage.remove_item(CURRENT_ADMIN_KEY)?;
        debug!("Admin session cleared");
        Ok(())
    }
}
