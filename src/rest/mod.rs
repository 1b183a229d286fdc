//! Resource bindings over the REST Admin API.
//!
//! - [`RestTransport`]: the request seam; implemented by
//!   [`RestClient`](crate::clients::RestClient)
//! - [`RestResource`] / [`ResourceCollection`]: envelope-aware CRUD for one
//!   collection path
//! - [`ResourceResponse`]: decoded data with pagination and rate limit
//! - [`ResourceError`]: what a binding call can fail with
//! - [`resources`]: draft orders and their metafields and fulfillments
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_draft_orders::{RestClient, Session, ShopDomain};
//! use shopify_draft_orders::rest::resources::{DraftOrder, DraftOrders};
//!
//! let session = Session::new(ShopDomain::new("my-store")?, "shpat_token");
//! let client = RestClient::new(&session, None)?;
//! let draft_orders = DraftOrders::new(&client);
//!
//! let order = draft_orders.get(994118539, None).await?;
//! let open = draft_orders.count(None).await?;
//! ```

mod errors;
mod query;
mod resource;
pub mod resources;
mod response;
mod transport;

pub use errors::ResourceError;
pub use query::to_query;
pub use resource::{ResourceCollection, RestResource};
pub use response::ResourceResponse;
pub use transport::RestTransport;

pub(crate) use resource::{envelope, require_id};

#[cfg(test)]
pub(crate) use transport::mock;
