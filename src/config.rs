//! Configuration for the HTTP client.
//!
//! Provides the client settings (base URL, identity headers, timeout) with
//! a builder and environment-variable loading.

use std::time::Duration;

use crate::errors::{HttpClientError, HttpClientResult};

/// Default request timeout for plain calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Capacity of the bounded event channel backing each open stream.
pub const STREAM_CHANNEL_CAPACITY: usize = 64;

/// Maximum number of body bytes attached to a trace log record.
pub const MAX_LOGGED_BODY_BYTES: usize = 100;

/// Configuration for [`HttpClient`](crate::client::HttpClient).
///
/// The identity fields (`user_agent`, `platform`, `app_version`,
/// `client_id`, `service_name`) become default request headers when
/// non-empty; see [`crate::headers`] for the header names.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Base URL joined with every request path. Empty means paths are used verbatim.
    pub base_url: String,
    /// Value for the `User-Agent` header.
    pub user_agent: String,
    /// Value for the `X-Client-Platform` header.
    pub platform: String,
    /// Value for the `X-Service-Name` header.
    pub service_name: String,
    /// Value for the `X-Client-Version` header.
    pub app_version: String,
    /// Value for the `X-Client-ID` header.
    pub client_id: String,
    /// Extra default headers sent with every request.
    pub headers: Vec<(String, String)>,
    /// Request timeout for plain calls. `None` uses [`DEFAULT_TIMEOUT`].
    pub timeout: Option<Duration>,
    /// Whether request and response bodies are attached to trace logs.
    pub log_bodies: bool,
}

impl HttpClientConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }

    /// Creates a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HTTP_CLIENT_BASE_URL` (optional): base URL for requests
    /// - `HTTP_CLIENT_USER_AGENT` (optional): `User-Agent` value
    /// - `HTTP_CLIENT_TIMEOUT` (optional): request timeout in seconds
    /// - `HTTP_CLIENT_LOG_BODIES` (optional): `true` to log bodies
    pub fn from_env() -> HttpClientResult<Self> {
        let mut builder = HttpClientConfigBuilder::default();

        if let Ok(base_url) = std::env::var("HTTP_CLIENT_BASE_URL") {
            builder = builder.base_url(base_url);
        }
        if let Ok(user_agent) = std::env::var("HTTP_CLIENT_USER_AGENT") {
            builder = builder.user_agent(user_agent);
        }
        if let Ok(timeout) = std::env::var("HTTP_CLIENT_TIMEOUT") {
            let secs = timeout
                .parse::<u64>()
                .map_err(|_| HttpClientError::Configuration {
                    message: format!("HTTP_CLIENT_TIMEOUT is not a number: {}", timeout),
                })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Ok(log_bodies) = std::env::var("HTTP_CLIENT_LOG_BODIES") {
            builder = builder.log_bodies(log_bodies == "true" || log_bodies == "1");
        }

        Ok(builder.build())
    }

    /// Returns the effective request timeout.
    pub fn effective_timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}

/// Builder for [`HttpClientConfig`].
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Sets the `User-Agent` value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Sets the client platform identifier.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.config.platform = platform.into();
        self
    }

    /// Sets the originating service name.
    pub fn service_name(mut self, service_name: impl Into<String>) -> Self {
        self.config.service_name = service_name.into();
        self
    }

    /// Sets the app version identifier.
    pub fn app_version(mut self, app_version: impl Into<String>) -> Self {
        self.config.app_version = app_version.into();
        self
    }

    /// Sets the persistent client identifier.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.config.client_id = client_id.into();
        self
    }

    /// Adds a default header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request timeout for plain calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Enables or disables body logging.
    pub fn log_bodies(mut self, log_bodies: bool) -> Self {
        self.config.log_bodies = log_bodies;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}
