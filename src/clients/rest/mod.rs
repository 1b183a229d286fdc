//! REST Admin API client.
//!
//! [`RestClient`] prefixes every path with `/admin/api/{version}` and
//! normalizes it to the `.json` form Shopify expects:
//!
//! - leading slashes are stripped: `/draft_orders` -> `draft_orders.json`
//! - an existing `.json` suffix is not doubled
//! - an empty path is rejected with [`RestError::InvalidPath`]
//!
//! Shopify has deprecated the REST Admin API in favour of GraphQL; a warning
//! is logged whenever a client is constructed.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
