//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx response
//! - [`MaxHttpRetriesExceededError`]: retries on 429/500 ran out
//! - [`InvalidHttpRequestError`]: the request failed validation before sending
//! - [`HttpError`]: the union of the above plus network failures

use thiserror::Error;

/// A non-2xx response.
///
/// `message` is a JSON object holding whichever of `errors`, `error`,
/// `error_description` the response body carried, plus an `error_reference`
/// built from `X-Request-Id`.
///
/// ```rust
/// use shopify_draft_orders::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"errors":"Not Found"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
/// assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error payload.
    pub message: String,
    /// Value of the `X-Request-Id` header, if any.
    pub error_reference: Option<String>,
}

/// Every allowed attempt ended in a 429 or 500.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// Status code of the last response.
    pub code: u16,
    /// Attempts made.
    pub tries: u32,
    /// Serialized error payload of the last response.
    pub message: String,
    /// Value of the `X-Request-Id` header, if any.
    pub error_reference: Option<String>,
}

/// A request rejected before it was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A request must be attempted at least once.
    #[error("A request must be attempted at least once.")]
    ZeroTries,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx status code.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Connection, TLS or client construction failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }

    /// Returns the `X-Request-Id` reference, when a response carried one.
    #[must_use]
    pub fn error_reference(&self) -> Option<&str> {
        match self {
            Self::Response(e) => e.error_reference.as_deref(),
            Self::MaxRetries(e) => e.error_reference.as_deref(),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: r#"{"errors":"Exceeded 2 calls per second"}"#.to_string(),
            error_reference: None,
        };
        let message = error.to_string();
        assert!(message.contains("Exceeded maximum retry count of 3"));
        assert!(message.contains("Exceeded 2 calls per second"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
    }

    #[test]
    fn test_status_and_reference_accessors() {
        let error = HttpError::Response(HttpResponseError {
            code: 422,
            message: "{}".to_string(),
            error_reference: Some("req-1".to_string()),
        });
        assert_eq!(error.status(), Some(422));
        assert_eq!(error.error_reference(), Some("req-1"));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::ZeroTries);
        assert_eq!(error.status(), None);
        assert_eq!(error.error_reference(), None);
    }
}
