//! Backend seams. `ApiClient` talks HTTP; `InMemoryBackend` stands in for it in tests.

mod client;

use async_trait::async_trait;
use tracker_core::model::{ProgressSummary, SubTopicId, Topic, User};

use crate::error::ApiError;

pub use client::ApiClient;

/// Session endpoints under `/auth`.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `GET /auth/me`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Auth` when there is no live session.
    async fn current_user(&self) -> Result<User, ApiError>;

    /// `POST /auth/login`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the credentials are rejected or the call fails.
    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError>;

    /// `POST /auth/register`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when registration is rejected or the call fails.
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError>;

    /// `POST /auth/logout`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the server could not invalidate the session.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// Topic checklist and progress endpoints.
#[async_trait]
pub trait TopicsApi: Send + Sync {
    /// `GET /topics`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport or status failure.
    async fn list_topics(&self) -> Result<Vec<Topic>, ApiError>;

    /// `GET /topics/progress`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport or status failure.
    async fn progress(&self) -> Result<ProgressSummary, ApiError>;

    /// `PATCH /topics/subtopic/{id}/toggle`, returning the new completion flag.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on any transport or status failure.
    async fn toggle_subtopic(&self, id: &SubTopicId) -> Result<bool, ApiError>;
}
