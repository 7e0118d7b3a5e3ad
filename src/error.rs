//! Error types for the analysis and storage core.

use thiserror::Error;

/// Failures surfaced by the document store and its callers.
///
/// Every analysis computation (sentiment, keywords, readability,
/// statistics, search) is total over its input and never produces an
/// error; only store lookups and argument validation can fail.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("document not found: {id}")]
    NotFound { id: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
