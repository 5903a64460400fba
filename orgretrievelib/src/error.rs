//! Error types for orgretrievelib

use thiserror::Error;

/// Errors that can occur while handling retrieve responses.
///
/// Note that an unrecognized response *shape* is not an error: it is the
/// `Unrecognized` variant of [`crate::ParsedRetrieve`], and the report
/// formatter turns it into a localized message. These errors cover the
/// fallible edges around that path.
#[derive(Error, Debug)]
pub enum RetrieveError {
    /// Input text is not valid JSON
    #[error("invalid JSON in retrieve response: {0}")]
    Json(#[from] serde_json::Error),

    /// Metadata type key has no registry entry
    #[error("unknown metadata type key '{0}'")]
    UnknownType(String),

    /// Failure entry carries no message
    #[error("failure entry for '{0}' is missing a message")]
    EmptyMessage(String),
}
