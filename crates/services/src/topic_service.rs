use std::sync::Arc;

use tracker_core::model::{ProgressSummary, SubTopicId, Topic};

use crate::api::TopicsApi;
use crate::error::ApiError;

/// Topic checklist and progress reads for the screens. No caching: every call
/// goes to the backend.
pub struct TopicService {
    api: Arc<dyn TopicsApi>,
}

impl TopicService {
    #[must_use]
    pub fn new(api: Arc<dyn TopicsApi>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the list cannot be fetched.
    pub async fn list_topics(&self) -> Result<Vec<Topic>, ApiError> {
        self.api.list_topics().await
    }

    /// # Errors
    ///
    /// Returns `ApiError` when the summary cannot be fetched.
    pub async fn progress(&self) -> Result<ProgressSummary, ApiError> {
        self.api.progress().await
    }

    /// Flip a subtopic server-side and return its new completion flag.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the toggle is rejected or fails.
    pub async fn toggle_subtopic(&self, id: &SubTopicId) -> Result<bool, ApiError> {
        self.api.toggle_subtopic(id).await
    }
}
