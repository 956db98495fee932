//! Error handling for bulletin retrieval and batch operations.
//!
//! The parser itself never fails; every error here originates from the
//! layers around it (network fetch, zone lookup, configuration, file input).

use std::path::PathBuf;
use thiserror::Error;

/// Classified failure while retrieving a bulletin for one zone.
///
/// Callers use the variant to decide whether a zone is transiently
/// unavailable or hard-failed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Timeout fetching bulletin for zone {zone}")]
    Timeout { zone: String },

    #[error("HTTP error {status} fetching bulletin for zone {zone}")]
    HttpStatus { zone: String, status: u16 },

    #[error("Transport error fetching bulletin for zone {zone}: {source}")]
    Transport {
        zone: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Zone code the failed request was for
    pub fn zone(&self) -> &str {
        match self {
            FetchError::Timeout { zone }
            | FetchError::HttpStatus { zone, .. }
            | FetchError::Transport { zone, .. } => zone,
        }
    }

    /// Whether a later retry has a reasonable chance of succeeding
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Timeout { .. } | FetchError::Transport { .. } => true,
            FetchError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
        }
    }
}

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Unknown forecast zone: {zone}")]
    UnknownZone { zone: String },

    #[error("Could not read bulletin file: {path}")]
    BulletinFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("HTTP client setup failed: {0}")]
    ClientSetup(#[source] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
