//! REST client errors.

use crate::clients::HttpError;
use thiserror::Error;

/// Error returned by [`RestClient`](crate::clients::RestClient) methods.
///
/// ```rust
/// use shopify_draft_orders::clients::RestError;
///
/// let error = RestError::InvalidPath { path: String::new() };
/// assert_eq!(error.to_string(), "Invalid REST API path: ");
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The path was empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The path as given.
        path: String,
    },

    /// The request failed at the HTTP layer.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns the HTTP status code, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidPath { .. } => None,
            Self::Http(e) => e.status(),
        }
    }
}
