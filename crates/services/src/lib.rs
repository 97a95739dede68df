#![forbid(unsafe_code)]

pub mod api;
pub mod auth_service;
pub mod config;
pub mod error;
pub mod in_memory;
pub mod session_store;
pub mod topic_service;

pub use api::{ApiClient, AuthApi, TopicsApi};
pub use auth_service::{AuthOutcome, AuthService};
pub use config::{API_URL_ENV, ApiConfig, DEFAULT_API_URL};
pub use error::{ApiError, ConfigError};
pub use in_memory::InMemoryBackend;
pub use session_store::{SessionCell, SessionStore, SharedSession};
pub use topic_service::TopicService;
