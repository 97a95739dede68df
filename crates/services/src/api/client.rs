use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracker_core::model::{ProgressSummary, SubTopicId, Topic, User};

use crate::api::{AuthApi, TopicsApi};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// HTTP client for the tracker backend.
///
/// The session cookie set by `/auth/login` is kept in the client's cookie jar and
/// sent on every later request. Each call is a single attempt.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the TLS/cookie-enabled client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self { client, config })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self
            .config
            .endpoint(path)
            .map_err(|source| ApiError::InvalidPath {
                path: path.to_owned(),
                source,
            })?;
        debug!("api request {method} {url}");
        Ok(self.client.request(method, url))
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are optional; only a JSON `{ "message": ... }` is surfaced.
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .and_then(|body| body.message);
        Err(ApiError::from_status(status, message))
    }

    async fn fetch<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        Self::send(builder)
            .await?
            .json::<T>()
            .await
            .map_err(ApiError::Decode)
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn current_user(&self) -> Result<User, ApiError> {
        let envelope: UserEnvelope = Self::fetch(self.request(Method::GET, "/auth/me")?).await?;
        Ok(envelope.user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = LoginRequest { email, password };
        let builder = self.request(Method::POST, "/auth/login")?.json(&body);
        let envelope: UserEnvelope = Self::fetch(builder).await?;
        Ok(envelope.user)
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
        let body = RegisterRequest {
            name,
            email,
            password,
        };
        let builder = self.request(Method::POST, "/auth/register")?.json(&body);
        let envelope: UserEnvelope = Self::fetch(builder).await?;
        Ok(envelope.user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Self::send(self.request(Method::POST, "/auth/logout")?).await?;
        Ok(())
    }
}

#[async_trait]
impl TopicsApi for ApiClient {
    async fn list_topics(&self) -> Result<Vec<Topic>, ApiError> {
        Self::fetch(self.request(Method::GET, "/topics")?).await
    }

    async fn progress(&self) -> Result<ProgressSummary, ApiError> {
        Self::fetch(self.request(Method::GET, "/topics/progress")?).await
    }

    async fn toggle_subtopic(&self, id: &SubTopicId) -> Result<bool, ApiError> {
        let path = format!("/topics/subtopic/{id}/toggle");
        let toggled: ToggleResponse = Self::fetch(self.request(Method::PATCH, &path)?).await?;
        Ok(toggled.completed)
    }
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Debug, Deserialize)]
struct ToggleResponse {
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}
