//! Per-target client configuration.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

/// Default base URL of the results backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Default base URL of the model inference service.
pub const DEFAULT_MODEL_URL: &str = "http://localhost:8001";

/// Request timeout for the results backend.
pub const BACKEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Request timeout for the model service. Inference can take a while.
pub const MODEL_TIMEOUT: Duration = Duration::from_secs(60);

/// Immutable configuration for one backend target.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub default_headers: HeaderMap,
}

impl ClientConfig {
    /// Creates a configuration with the standard default headers.
    ///
    /// Content type is not part of the defaults; each request sets its own
    /// (JSON body or multipart form).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(USER_AGENT, HeaderValue::from_static(user_agent()));

        Self {
            base_url: base_url.into(),
            timeout,
            default_headers,
        }
    }

    /// Configuration for the results backend, optionally overriding the URL.
    pub fn backend(base_url: Option<String>) -> Self {
        Self::new(
            base_url.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            BACKEND_TIMEOUT,
        )
    }

    /// Configuration for the model service, optionally overriding the URL.
    pub fn model(base_url: Option<String>) -> Self {
        Self::new(
            base_url.unwrap_or_else(|| DEFAULT_MODEL_URL.to_string()),
            MODEL_TIMEOUT,
        )
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn user_agent() -> &'static str {
    concat!("agroeye/", env!("AGROEYE_VERSION"))
}
