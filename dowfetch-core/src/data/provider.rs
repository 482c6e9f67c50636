//! Quote provider trait and structured error types.
//!
//! The QuoteProvider trait abstracts over the remote quote service so the
//! download loop can be driven by a scripted provider in tests.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for download operations.
///
/// Messages are written to be shown verbatim in a per-symbol log line.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

impl DataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Trait for quote sources.
///
/// Implementations return the raw response body for one symbol. Classifying
/// and persisting the body is the caller's job.
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch the daily history for `symbol` between `start` and `end`.
    fn fetch(&self, symbol: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<u8>, DataError>;
}
