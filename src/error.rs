//! Error types shared by the library.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a report run.
///
/// Annotation parse failures are not represented here: a title without a
/// usable number simply contributes zero hours.
#[derive(Debug, Error)]
pub enum BurndownError {
    /// Credentials or settings could not be read or understood.
    #[error("configuration error in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    /// A board API request failed in transport, status, or payload decoding.
    #[error("remote fetch failed for {endpoint}: {reason}")]
    Fetch { endpoint: String, reason: String },

    /// No board visible to the credentials carries the requested name.
    #[error("board not found: {0:?}")]
    BoardNotFound(String),
}

impl BurndownError {
    pub(crate) fn config(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn fetch(endpoint: &str, reason: impl ToString) -> Self {
        Self::Fetch {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = BurndownError> = std::result::Result<T, E>;
