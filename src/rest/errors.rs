//! Errors raised by resource bindings.
//!
//! Transport failures are passed through untouched: a 404 from the shop is a
//! [`ResourceError::Rest`] carrying the [`HttpError::Response`] the client
//! produced, whether it came from [`RestClient`](crate::clients::RestClient)
//! or from a transport that returned the non-2xx response as a value.

use std::collections::HashMap;

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for draft order, metafield and fulfillment operations.
///
/// ```rust
/// use shopify_draft_orders::rest::ResourceError;
///
/// let error = ResourceError::MissingId {
///     resource: "DraftOrder",
///     operation: "update",
/// };
/// assert_eq!(error.to_string(), "DraftOrder::update requires a non-zero id");
/// assert_eq!(error.status(), None);
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The operation needs an id that was unset or zero. Raised before any I/O.
    #[error("{resource}::{operation} requires a non-zero id")]
    MissingId {
        /// The resource type (e.g. "DraftOrder").
        resource: &'static str,
        /// The operation attempted (e.g. "update").
        operation: &'static str,
    },

    /// A 2xx response did not carry the expected envelope key.
    #[error("Missing key '{key}' in response body (status {code})")]
    MissingEnvelope {
        /// The envelope key that was expected (e.g. "draft_order").
        key: &'static str,
        /// Status code of the response.
        code: u16,
        /// Value of the `X-Request-Id` header, if any.
        request_id: Option<String>,
    },

    /// A payload could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The transport failed or the shop answered with a non-2xx status.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Returns the HTTP status of a failed response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rest(e) => e.status(),
            Self::MissingId { .. } | Self::MissingEnvelope { .. } | Self::Json(_) => None,
        }
    }

    /// Returns the `X-Request-Id` of the response, if one was received.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::MissingEnvelope { request_id, .. } => request_id.as_deref(),
            Self::Rest(RestError::Http(e)) => e.error_reference(),
            _ => None,
        }
    }

    /// Returns the per-field messages of a 422 response.
    ///
    /// Shopify sends `{"errors": {"field": ["message", ...]}}`; a bare array
    /// or string is filed under `"base"`.
    #[must_use]
    pub fn validation_errors(&self) -> Option<HashMap<String, Vec<String>>> {
        let Self::Rest(RestError::Http(HttpError::Response(response))) = self else {
            return None;
        };
        if response.code != 422 {
            return None;
        }
        let body: serde_json::Value = serde_json::from_str(&response.message).ok()?;
        Some(parse_validation_errors(&body))
    }
}

fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    match body.get("errors") {
        Some(serde_json::Value::Object(map)) => {
            for (field, messages) in map {
                let msgs = match messages {
                    serde_json::Value::Array(arr) => arr
                        .iter()
                        .filter_map(|v| v.as_str().map(ToString::to_string))
                        .collect(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    other => vec![other.to_string()],
                };
                result.insert(field.clone(), msgs);
            }
        }
        Some(serde_json::Value::Array(arr)) => {
            let msgs: Vec<String> = arr
                .iter()
                .filter_map(|v| v.as_str().map(ToString::to_string))
                .collect();
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        Some(serde_json::Value::String(s)) => {
            result.insert("base".to_string(), vec![s.clone()]);
        }
        _ => {}
    }

    result
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    fn response_error(code: u16, message: &str) -> ResourceError {
        ResourceError::Rest(RestError::Http(HttpError::Response(HttpResponseError {
            code,
            message: message.to_string(),
            error_reference: Some("req-9".to_string()),
        })))
    }

    #[test]
    fn test_status_and_request_id_come_from_the_response() {
        let error = response_error(404, r#"{"errors":"Not Found"}"#);
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.request_id(), Some("req-9"));
        assert!(error.validation_errors().is_none());
    }

    #[test]
    fn test_validation_errors_object_format() {
        let error = response_error(
            422,
            r#"{"errors":{"line_items":["must have at least one line item"],"email":"is invalid"}}"#,
        );
        let errors = error.validation_errors().unwrap();

        assert_eq!(
            errors.get("line_items"),
            Some(&vec!["must have at least one line item".to_string()])
        );
        assert_eq!(errors.get("email"), Some(&vec!["is invalid".to_string()]));
    }

    #[test]
    fn test_validation_errors_array_and_string_go_to_base() {
        let errors = response_error(422, r#"{"errors":["Title can't be blank"]}"#)
            .validation_errors()
            .unwrap();
        assert_eq!(
            errors.get("base"),
            Some(&vec!["Title can't be blank".to_string()])
        );

        let errors = response_error(422, r#"{"errors":"Draft order is completed"}"#)
            .validation_errors()
            .unwrap();
        assert_eq!(
            errors.get("base"),
            Some(&vec!["Draft order is completed".to_string()])
        );
    }

    #[test]
    fn test_missing_id_and_envelope_messages() {
        let error = ResourceError::MissingEnvelope {
            key: "draft_order",
            code: 200,
            request_id: None,
        };
        assert_eq!(
            error.to_string(),
            "Missing key 'draft_order' in response body (status 200)"
        );
        assert_eq!(error.status(), None);
    }
}
