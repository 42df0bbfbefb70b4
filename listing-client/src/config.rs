//! Client configuration

use crate::{ClientError, ClientResult};

/// Endpoint serving listings filtered by make and model
pub const DEFAULT_LISTINGS_PATH: &str = "/listings_by_make_and_model.json";

/// Page region that receives the pagination markup
pub const DEFAULT_CONTAINER: &str = ".row.listings-detail-info";

/// Client configuration for the listings backend
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | LISTINGS_BASE_URL | http://localhost:3000 | Backend base URL |
/// | LISTINGS_PATH | /listings_by_make_and_model.json | Listings endpoint |
/// | LISTINGS_TIMEOUT_SECS | 30 | Request timeout (seconds) |
/// | LISTINGS_CONTAINER | .row.listings-detail-info | Pagination container selector |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Path of the listings endpoint, relative to `base_url`
    pub listings_path: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Selector of the region the pagination markup is injected into
    pub container: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            listings_path: DEFAULT_LISTINGS_PATH.to_string(),
            timeout: 30,
            container: DEFAULT_CONTAINER.to_string(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults; set but unparsable
    /// values are rejected.
    pub fn from_env() -> ClientResult<Self> {
        let mut config = Self::new(
            std::env::var("LISTINGS_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into()),
        );
        if let Ok(path) = std::env::var("LISTINGS_PATH") {
            config = config.with_listings_path(path);
        }
        if let Ok(raw) = std::env::var("LISTINGS_TIMEOUT_SECS") {
            let seconds: u64 = raw.parse().map_err(|_| {
                ClientError::Config(format!("LISTINGS_TIMEOUT_SECS is not a number: {raw:?}"))
            })?;
            config = config.with_timeout(seconds);
        }
        if let Ok(container) = std::env::var("LISTINGS_CONTAINER") {
            config = config.with_container(container);
        }
        config.validate()?;
        Ok(config)
    }

    /// Set the listings endpoint path
    pub fn with_listings_path(mut self, path: impl Into<String>) -> Self {
        self.listings_path = path.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the pagination container selector
    pub fn with_container(mut self, selector: impl Into<String>) -> Self {
        self.container = selector.into();
        self
    }

    pub fn validate(&self) -> ClientResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must be http(s): {:?}",
                self.base_url
            )));
        }
        if self.timeout == 0 {
            return Err(ClientError::Config("timeout must be positive".into()));
        }
        Ok(())
    }

    /// Full URL of the listings endpoint
    pub fn listings_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.listings_path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
