//! HTTP transport configuration.

use std::time::Duration;

use tabula_core::{ApiUrl, Result};

/// Default API root.
pub const DEFAULT_API_URL: &str = "https://api.airtable.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// API root URL; endpoints live under `<api_url>/v0/<base>/`.
    pub api_url: ApiUrl,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl HttpConfig {
    /// Configuration for a custom API root.
    pub fn new(api_url: ApiUrl) -> Self {
        Self {
            api_url,
            user_agent: concat!("tabula/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Configuration for the API root given as a string.
    pub fn from_url(api_url: &str) -> Result<Self> {
        Ok(Self::new(ApiUrl::new(api_url)?))
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        match ApiUrl::new(DEFAULT_API_URL) {
            Ok(api_url) => Self::new(api_url),
            Err(e) => unreachable!("default API URL is valid: {e}"),
        }
    }
}
