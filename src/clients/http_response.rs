//! Response type and Shopify header parsing.

use std::collections::HashMap;

use crate::clients::errors::HttpResponseError;

/// Rate limit state from the `X-Shopify-Shop-Api-Call-Limit` header ("40/80").
///
/// ```rust
/// use shopify_draft_orders::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.bucket_size, 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Requests currently in the bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses an "X/Y" header value.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.split_once('/')?;
        Some(Self {
            request_count: count.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }

    /// Requests left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// Cursor pagination parsed from the `Link` header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// `page_info` of the previous page.
    pub prev_page_info: Option<String>,
    /// `page_info` of the next page.
    pub next_page_info: Option<String>,
}

impl PaginationInfo {
    /// Parses `<url>; rel="next", <url>; rel="previous"`.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in header_value.split(',') {
            let mut parts = link.split(';').map(str::trim);
            let Some(url) = parts
                .next()
                .map(|s| s.trim_start_matches('<').trim_end_matches('>'))
            else {
                continue;
            };
            let rel = parts.find_map(|part| part.strip_prefix("rel=").map(|r| r.trim_matches('"')));

            if let (Some(rel), Some(page_info)) = (rel, Self::extract_page_info(url)) {
                match rel {
                    "previous" => result.prev_page_info = Some(page_info),
                    "next" => result.next_page_info = Some(page_info),
                    _ => {}
                }
            }
        }

        result
    }

    fn extract_page_info(url: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;
        query.split('&').find_map(|param| {
            param
                .split_once('=')
                .filter(|(key, _)| *key == "page_info")
                .map(|(_, value)| value.to_string())
        })
    }

    /// Returns `true` if neither cursor is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.prev_page_info.is_none() && self.next_page_info.is_none()
    }
}

/// A response from the Admin API.
///
/// Header names are stored lowercased.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers; a header may repeat.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body (`{}` when the body was empty).
    pub body: serde_json::Value,
    /// Cursors from the `Link` header.
    pub pagination: PaginationInfo,
    /// Rate limit from `X-Shopify-Shop-Api-Call-Limit`.
    pub api_call_limit: Option<ApiCallLimit>,
    /// Seconds to wait before retrying, from `Retry-After`.
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a response, parsing the Shopify headers it carries.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let first = |name: &str| headers.get(name).and_then(|values| values.first());

        let pagination = first("link")
            .map(|link| PaginationInfo::parse_link_header(link))
            .unwrap_or_default();
        let api_call_limit = first("x-shopify-shop-api-call-limit").and_then(|v| ApiCallLimit::parse(v));
        let retry_request_after = first("retry-after").and_then(|v| v.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            pagination,
            api_call_limit,
            retry_request_after,
        }
    }

    /// Returns `true` for a 2xx status code.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Serializes the error keys of the body (`errors`, `error`,
    /// `error_description`) plus an `error_reference` built from the
    /// request id into a JSON string.
    #[must_use]
    pub fn error_message(&self) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = self.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = self.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
            if let Some(desc) = self.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }

        if let Some(request_id) = self.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }

    /// Converts a non-2xx response into the error the HTTP client would raise.
    #[must_use]
    pub fn into_error(self) -> HttpResponseError {
        HttpResponseError {
            code: self.code,
            message: self.error_message(),
            error_reference: self.request_id().map(String::from),
        }
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
