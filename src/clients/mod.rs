//! HTTP transport for the Admin REST API.
//!
//! - [`HttpClient`]: authenticated requests with retry handling
//! - [`HttpRequest`] / [`HttpResponse`]: what goes over the wire
//! - [`RestClient`]: path normalization and versioned base path on top of [`HttpClient`]
//!
//! # Retry Behavior
//!
//! - **429**: waits for `Retry-After`, or 1 second when absent
//! - **500**: waits 1 second
//! - **anything else non-2xx**: fails immediately
//!
//! Requests are attempted once unless [`ShopifyConfig::tries`](crate::ShopifyConfig::tries)
//! or [`HttpRequestBuilder::tries`] says otherwise.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse, PaginationInfo};

pub use rest::{RestClient, RestError};
