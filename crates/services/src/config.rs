use std::env;

use url::Url;

use crate::error::ConfigError;

/// Backend origin used when neither a flag nor the environment overrides it.
pub const DEFAULT_API_URL: &str = "https://apna-college-backend-nrz8.onrender.com";

/// Environment variable consulted by [`ApiConfig::from_env`].
pub const API_URL_ENV: &str = "TRACKER_API_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Parse a base URL. A trailing slash is added so relative paths join under it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the URL does not parse or is not http(s).
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let mut base_url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
            raw: raw.to_owned(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                raw: raw.to_owned(),
            });
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Read `TRACKER_API_URL`, falling back to [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the configured value is not a usable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(API_URL_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a backend path such as `/auth/me` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the joined URL is malformed.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path.trim_start_matches('/'))
    }
}
