use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use reqwest::StatusCode;
use tracker_core::model::{ProgressSummary, SubTopicId, Topic, TopicStatus, User, UserId};

use crate::api::{AuthApi, TopicsApi};
use crate::error::ApiError;

/// In-memory stand-in for the backend, used by tests and headless demos.
///
/// Mirrors the server's behavior closely enough for the client: a cookie-less
/// "current user", topic status recomputed when a subtopic is toggled, and
/// switchable failures per endpoint group.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    state: Arc<Mutex<BackendState>>,
}

#[derive(Default)]
struct BackendState {
    accounts: Vec<(User, String)>,
    current: Option<User>,
    topics: Vec<Topic>,
    progress: ProgressSummary,
    fail_logout: bool,
    fail_reads: bool,
    fail_toggle: bool,
    toggle_calls: u32,
    list_calls: u32,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account that `login` will accept.
    #[must_use]
    pub fn with_account(self, user: User, password: impl Into<String>) -> Self {
        self.lock().accounts.push((user, password.into()));
        self
    }

    /// Start with a live session for `user`, as if a cookie were already set.
    #[must_use]
    pub fn with_session(self, user: User) -> Self {
        self.lock().current = Some(user);
        self
    }

    #[must_use]
    pub fn with_topics(self, topics: Vec<Topic>) -> Self {
        self.lock().topics = topics;
        self
    }

    #[must_use]
    pub fn with_progress(self, progress: ProgressSummary) -> Self {
        self.lock().progress = progress;
        self
    }

    /// Make `/auth/logout` answer 500.
    #[must_use]
    pub fn failing_logout(self) -> Self {
        self.lock().fail_logout = true;
        self
    }

    /// Make `/topics` and `/topics/progress` answer 500.
    #[must_use]
    pub fn failing_reads(self) -> Self {
        self.lock().fail_reads = true;
        self
    }

    /// Make the toggle endpoint answer 500.
    #[must_use]
    pub fn failing_toggle(self) -> Self {
        self.lock().fail_toggle = true;
        self
    }

    #[must_use]
    pub fn topics(&self) -> Vec<Topic> {
        self.lock().topics.clone()
    }

    #[must_use]
    pub fn toggle_calls(&self) -> u32 {
        self.lock().toggle_calls
    }

    #[must_use]
    pub fn list_calls(&self) -> u32 {
        self.lock().list_calls
    }

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.lock().current.is_some()
    }

    fn lock(&self) -> MutexGuard<'_, BackendState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn server_error() -> ApiError {
    ApiError::from_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        Some("Internal server error".into()),
    )
}

fn derive_status(topic: &Topic) -> TopicStatus {
    let done = topic.sub_topics.iter().filter(|sub| sub.completed).count();
    if done == 0 {
        TopicStatus::NotStarted
    } else if done == topic.sub_topics.len() {
        TopicStatus::Completed
    } else {
        TopicStatus::InProgress
    }
}

#[async_trait]
impl AuthApi for InMemoryBackend {
    async fn current_user(&self) -> Result<User, ApiError> {
        self.lock()
            .current
            .clone()
            .ok_or_else(|| ApiError::from_status(StatusCode::UNAUTHORIZED, None))
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let mut state = self.lock();
        let user = state
            .accounts
            .iter()
            .find(|(user, secret)| user.email == email && secret == password)
            .map(|(user, _)| user.clone())
            .ok_or_else(|| {
                ApiError::from_status(
                    StatusCode::UNAUTHORIZED,
                    Some("Invalid credentials".into()),
                )
            })?;
        state.current = Some(user.clone());
        Ok(user)
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let mut state = self.lock();
        if state.accounts.iter().any(|(user, _)| user.email == email) {
            return Err(ApiError::from_status(
                StatusCode::BAD_REQUEST,
                Some("User already exists".into()),
            ));
        }
        let id = UserId::new(format!("user-{}", state.accounts.len() + 1));
        let user = User::new(id, name, email);
        state.accounts.push((user.clone(), password.to_owned()));
        state.current = Some(user.clone());
        Ok(user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let mut state = self.lock();
        if state.fail_logout {
            return Err(server_error());
        }
        state.current = None;
        Ok(())
    }
}

#[async_trait]
impl TopicsApi for InMemoryBackend {
    async fn list_topics(&self) -> Result<Vec<Topic>, ApiError> {
        let mut state = self.lock();
        state.list_calls += 1;
        if state.fail_reads {
            return Err(server_error());
        }
        Ok(state.topics.clone())
    }

    async fn progress(&self) -> Result<ProgressSummary, ApiError> {
        let state = self.lock();
        if state.fail_reads {
            return Err(server_error());
        }
        Ok(state.progress.clone())
    }

    async fn toggle_subtopic(&self, id: &SubTopicId) -> Result<bool, ApiError> {
        let mut state = self.lock();
        state.toggle_calls += 1;
        if state.fail_toggle {
            return Err(server_error());
        }
        for topic in &mut state.topics {
            if let Some(sub) = topic.sub_topics.iter_mut().find(|sub| &sub.id == id) {
                sub.completed = !sub.completed;
                let completed = sub.completed;
                topic.status = derive_status(topic);
                return Ok(completed);
            }
        }
        Err(ApiError::from_status(
            StatusCode::NOT_FOUND,
            Some("Subtopic not found".into()),
        ))
    }
}
