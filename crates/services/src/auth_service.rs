use std::sync::Arc;

use tracing::{debug, warn};
use tracker_core::model::{SessionEvent, User};

use crate::api::AuthApi;
use crate::error::ApiError;

const LOGIN_FAILED: &str = "Login failed";
const REGISTRATION_FAILED: &str = "Registration failed";

/// Result of a login or registration attempt, in the shape forms display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Failure { message: String },
}

impl AuthOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success => None,
            Self::Failure { message } => Some(message),
        }
    }

    fn from_error(err: &ApiError, fallback: &str) -> Self {
        Self::Failure {
            message: err.message().unwrap_or(fallback).to_owned(),
        }
    }
}

/// Wraps `AuthApi` calls and turns their results into session transitions.
///
/// Nothing here returns an `ApiError`: every failure is folded into an event or an
/// `AuthOutcome`.
pub struct AuthService {
    api: Arc<dyn AuthApi>,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self { api }
    }

    pub async fn check_session(&self) -> SessionEvent {
        match self.api.current_user().await {
            Ok(user) => SessionEvent::UserLoaded(Some(user)),
            Err(err) => {
                debug!(error = %err, "no active session");
                SessionEvent::UserLoaded(None)
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> (AuthOutcome, Option<SessionEvent>) {
        Self::settle(self.api.login(email, password).await, LOGIN_FAILED)
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> (AuthOutcome, Option<SessionEvent>) {
        Self::settle(
            self.api.register(name, email, password).await,
            REGISTRATION_FAILED,
        )
    }

    /// Always yields `SignedOut`; a failed server call is only logged.
    pub async fn logout(&self) -> SessionEvent {
        if let Err(err) = self.api.logout().await {
            warn!(error = %err, "server logout failed; clearing local session anyway");
        }
        SessionEvent::SignedOut
    }

    fn settle(
        result: Result<User, ApiError>,
        fallback: &str,
    ) -> (AuthOutcome, Option<SessionEvent>) {
        match result {
            Ok(user) => (
                AuthOutcome::Success,
                Some(SessionEvent::UserLoaded(Some(user))),
            ),
            Err(err) => {
                debug!(error = %err, "auth request rejected");
                (AuthOutcome::from_error(&err, fallback), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;

    #[test]
    fn failure_prefers_server_message() {
        let err = ApiError::from_status(StatusCode::UNAUTHORIZED, Some("Invalid credentials".into()));
        assert_eq!(
            AuthOutcome::from_error(&err, LOGIN_FAILED).message(),
            Some("Invalid credentials")
        );
    }

    #[test]
    fn failure_falls_back_to_generic_message() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, None);
        assert_eq!(
            AuthOutcome::from_error(&err, REGISTRATION_FAILED).message(),
            Some("Registration failed")
        );
    }
}
