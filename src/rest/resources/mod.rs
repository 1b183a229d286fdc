//! Resource bindings, organized by API version.
//!
//! ```text
//! resources/
//!   mod.rs       <- re-exports the latest version
//!   v2025_10/
//! ```
//!
//! The latest version is re-exported here:
//!
//! ```rust,ignore
//! use shopify_draft_orders::rest::resources::DraftOrders;
//! // or pinned:
//! use shopify_draft_orders::rest::resources::v2025_10::DraftOrders;
//! ```
//!
//! The request path carries the client's [`ApiVersion`](crate::ApiVersion),
//! so the same binding can be pointed at another version with
//! [`RestClient::with_version`](crate::RestClient::with_version) while its
//! field set still matches 2025-10.

pub mod v2025_10;

pub use v2025_10::*;
