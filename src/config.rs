//! Configuration for bulletin retrieval and batch runs.
//!
//! The parser itself takes no configuration; these settings only govern how
//! bulletins are fetched and how many zones are processed at once.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MAX_CONCURRENT_FETCHES,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Global configuration for fetching zone bulletins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Directory URL holding `<zone>.txt` bulletins
    pub base_url: String,

    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,

    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Maximum zones fetched concurrently in a batch
    pub max_concurrent_fetches: usize,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Show a progress bar during batch runs
    pub show_progress: bool,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            show_progress: false,
        }
    }
}

impl ForecastConfig {
    /// Use a different bulletin directory
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the whole-request timeout
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Set maximum concurrent fetches
    pub fn with_max_concurrent_fetches(mut self, max_fetches: usize) -> Self {
        self.max_concurrent_fetches = max_fetches;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Enable the batch progress bar
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Bulletin URL for a zone; codes are lowercased on the server
    pub fn zone_url(&self, zone: &str) -> String {
        format!(
            "{}/{}.txt",
            self.base_url.trim_end_matches('/'),
            zone.to_ascii_lowercase()
        )
    }

    /// Check settings before any request is made
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ForecastError::Configuration {
                message: format!("base URL must be http(s): {}", self.base_url),
            });
        }
        if self.max_concurrent_fetches == 0 {
            return Err(ForecastError::Configuration {
                message: "max concurrent fetches must be at least 1".to_string(),
            });
        }
        if self.request_timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(ForecastError::Configuration {
                message: "timeouts must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }
}
