//! [`ResourceResponse`]: decoded data plus response metadata.
//!
//! `ResourceResponse<T>` derefs to `T`, so a page of draft orders can be
//! iterated directly:
//!
//! ```rust,ignore
//! let page = DraftOrders::new(&client).list_page(None).await?;
//! for order in page.iter() {
//!     println!("{:?}", order.name);
//! }
//! if let Some(cursor) = page.next_page_info() {
//!     // pass `cursor` as `page_info` to fetch the next page
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse, PaginationInfo};
use crate::rest::ResourceError;

/// Decoded payload with the pagination, rate limit and request id of the
/// response it came from.
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: Option<PaginationInfo>,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Wraps `data` with response metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: Option<PaginationInfo>,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Consumes the wrapper, returning the data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns `true` if the `Link` header pointed at a next page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page_info().is_some()
    }

    /// Returns `true` if the `Link` header pointed at a previous page.
    #[must_use]
    pub fn has_prev_page(&self) -> bool {
        self.prev_page_info().is_some()
    }

    /// Cursor for the next page.
    #[must_use]
    pub fn next_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.next_page_info.as_deref())
    }

    /// Cursor for the previous page.
    #[must_use]
    pub fn prev_page_info(&self) -> Option<&str> {
        self.pagination
            .as_ref()
            .and_then(|p| p.prev_page_info.as_deref())
    }

    /// Cursors parsed from the `Link` header, if any.
    #[must_use]
    pub const fn pagination(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    /// Call limit state at the time of the response.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// Value of the `X-Request-Id` header.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Transforms the data, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes the value under envelope `key` of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingEnvelope`] if `key` is absent and
    /// [`ResourceError::Json`] if its value does not decode into `T`.
    pub fn from_http_response(
        mut response: HttpResponse,
        key: &'static str,
    ) -> Result<Self, ResourceError> {
        let request_id = response.request_id().map(ToString::to_string);

        let value = response
            .body
            .as_object_mut()
            .and_then(|body| body.remove(key))
            .ok_or_else(|| ResourceError::MissingEnvelope {
                key,
                code: response.code,
                request_id: request_id.clone(),
            })?;

        let data: T = serde_json::from_value(value)?;
        let pagination = Some(response.pagination).filter(|p| !p.is_empty());

        Ok(Self {
            data,
            pagination,
            rate_limit: response.api_call_limit,
            request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_from_http_response_reads_envelope_and_metadata() {
        let mut headers = HashMap::new();
        headers.insert(
            "link".to_string(),
            vec![r#"<https://s.myshopify.com/admin/api/2025-10/draft_orders.json?page_info=next1>; rel="next""#.to_string()],
        );
        headers.insert(
            "x-shopify-shop-api-call-limit".to_string(),
            vec!["3/40".to_string()],
        );
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);

        let response = HttpResponse::new(200, headers, json!({"counts": [1, 2, 3]}));
        let result: ResourceResponse<Vec<u32>> =
            ResourceResponse::from_http_response(response, "counts").unwrap();

        assert_eq!(result.len(), 3);
        assert!(result.has_next_page());
        assert!(!result.has_prev_page());
        assert_eq!(result.next_page_info(), Some("next1"));
        assert_eq!(result.rate_limit().unwrap().request_count, 3);
        assert_eq!(result.request_id(), Some("req-1"));
    }

    #[test]
    fn test_missing_envelope_is_an_error() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"other": []}));
        let result = ResourceResponse::<Vec<u32>>::from_http_response(response, "counts");

        assert!(matches!(
            result,
            Err(ResourceError::MissingEnvelope { key: "counts", code: 200, .. })
        ));
    }

    #[test]
    fn test_empty_collection_is_not_an_error() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"counts": []}));
        let result = ResourceResponse::<Vec<u32>>::from_http_response(response, "counts").unwrap();

        assert!(result.is_empty());
        assert!(result.pagination().is_none());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let response = ResourceResponse::new(vec![1, 2], None, None, Some("req".to_string()));
        let mapped = response.map(|v| v.len());

        assert_eq!(*mapped, 2);
        assert_eq!(mapped.request_id(), Some("req"));
    }
}
