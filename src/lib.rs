//! # Shopify Draft Orders
//!
//! A typed Rust binding for the Shopify Admin REST API's draft orders
//! resource, with the metafields and fulfillments nested under a draft order.
//!
//! ## Overview
//!
//! - Configuration via [`ShopifyConfig`] and [`ShopifyConfigBuilder`], with
//!   validated newtypes ([`ShopDomain`], [`HostUrl`], [`ApiVersion`])
//! - A [`Session`] carrying the shop and its access token
//! - An async HTTP client with retry on 429/500 and `Retry-After` handling
//! - [`RestClient`], which implements the [`RestTransport`](rest::RestTransport)
//!   seam every resource binding is written against
//! - [`DraftOrders`](rest::resources::DraftOrders): list, count, get, create,
//!   update, complete, `send_invoice`, delete, plus nested metafield and
//!   fulfillment operations
//!
//! Every operation is a single round trip. Obtaining the access token
//! (OAuth, token exchange) is out of scope: bring a token and a shop.
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_draft_orders::{ApiVersion, RestClient, Session, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .api_version(ApiVersion::latest())
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! let session = Session::new(ShopDomain::new("my-store").unwrap(), "shpat_access_token");
//! let client = RestClient::new(&session, Some(&config)).unwrap();
//! assert_eq!(client.api_version(), &ApiVersion::V2025_10);
//! ```
//!
//! ## Working with draft orders
//!
//! ```rust,ignore
//! use shopify_draft_orders::rest::resources::{
//!     DraftOrder, DraftOrderLineItem, DraftOrderListOptions, DraftOrderStatus, DraftOrders,
//! };
//!
//! let draft_orders = DraftOrders::new(&client);
//!
//! let open = draft_orders
//!     .list(Some(&DraftOrderListOptions {
//!         status: Some(DraftOrderStatus::Open),
//!         limit: Some(50),
//!         ..Default::default()
//!     }))
//!     .await?;
//!
//! let mut draft = draft_orders.get(994118539, None).await?;
//! draft.note = Some("Deliver after 5pm".to_string());
//! let draft = draft_orders.update(&draft).await?;
//!
//! let metafields = draft_orders.list_metafields(994118539, None).await?;
//! ```
//!
//! ## Error Handling
//!
//! Binding calls return [`rest::ResourceError`]. HTTP failures keep their
//! shape all the way up, so the status and request id are one call away:
//!
//! ```rust,ignore
//! match draft_orders.get(1, None).await {
//!     Ok(draft) => println!("{:?}", draft.name),
//!     Err(e) if e.status() == Some(404) => println!("no such draft order"),
//!     Err(e) => eprintln!("request {:?} failed: {e}", e.request_id()),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (request attempts, retries, deprecation
//! notices) and installs no subscriber.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use auth::Session;
pub use config::{ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpResponseError,
    InvalidHttpRequestError, MaxHttpRetriesExceededError, PaginationInfo, RestClient, RestError,
};
