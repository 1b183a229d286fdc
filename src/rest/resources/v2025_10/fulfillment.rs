//! Fulfillments nested under an owner resource.
//!
//! Besides CRUD, a fulfillment moves through its lifecycle with three
//! body-less POST actions:
//!
//! - `complete`: `{owner}/{id}/fulfillments/{fid}/complete.json`
//! - `open` (transition): `{owner}/{id}/fulfillments/{fid}/open.json`
//! - `cancel`: `{owner}/{id}/fulfillments/{fid}/cancel.json`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Address, LineItem};
use crate::rest::{
    require_id, ResourceCollection, ResourceError, ResourceResponse, RestResource, RestTransport,
};

/// Lifecycle state of a fulfillment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    Pending,
    Open,
    Success,
    Cancelled,
    Error,
    Failure,
    /// A status this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// A shipment of some or all of an order's line items.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Fulfillment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FulfillmentStatus>,

    /// Carrier-reported state, e.g. `in_transit` or `delivered`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_customer: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_urls: Option<Vec<String>>,

    /// Gateway receipt, shape depends on the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Fulfillment {
    const NAME: &'static str = "Fulfillment";
    const KEY: &'static str = "fulfillment";
    const PLURAL: &'static str = "fulfillments";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// Filters for listing and counting fulfillments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FulfillmentListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Options for fetching a single fulfillment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FulfillmentGetOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Fulfillment operations scoped to one owner.
#[derive(Debug)]
pub struct Fulfillments<'c, T> {
    transport: &'c T,
    owner: &'c str,
    owner_id: u64,
}

impl<'c, T: RestTransport> Fulfillments<'c, T> {
    /// Scopes fulfillment operations to `{owner}/{owner_id}/fulfillments`.
    #[must_use]
    pub const fn new(transport: &'c T, owner: &'c str, owner_id: u64) -> Self {
        Self {
            transport,
            owner,
            owner_id,
        }
    }

    fn collection(
        &self,
        operation: &'static str,
    ) -> Result<ResourceCollection<'c, T, Fulfillment>, ResourceError> {
        let owner_id = require_id(Some(self.owner_id), Fulfillment::NAME, operation)?;
        Ok(ResourceCollection::new(
            self.transport,
            format!("{}/{owner_id}/fulfillments", self.owner),
        ))
    }

    /// Lists the owner's fulfillments.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for owner id zero, and any
    /// transport or decoding error.
    pub async fn list(
        &self,
        options: Option<&FulfillmentListOptions>,
    ) -> Result<Vec<Fulfillment>, ResourceError> {
        self.collection("list")?.list(options).await
    }

    /// Lists one page of fulfillments with its cursors.
    ///
    /// # Errors
    ///
    /// See [`Fulfillments::list`].
    pub async fn list_page(
        &self,
        options: Option<&FulfillmentListOptions>,
    ) -> Result<ResourceResponse<Vec<Fulfillment>>, ResourceError> {
        self.collection("list")?.list_page(options).await
    }

    /// Counts the owner's fulfillments.
    ///
    /// # Errors
    ///
    /// See [`Fulfillments::list`].
    pub async fn count(
        &self,
        options: Option<&FulfillmentListOptions>,
    ) -> Result<u64, ResourceError> {
        self.collection("count")?.count(options).await
    }

    /// Fetches one fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if either id is zero.
    pub async fn get(
        &self,
        fulfillment_id: u64,
        options: Option<&FulfillmentGetOptions>,
    ) -> Result<Fulfillment, ResourceError> {
        self.collection("find")?.find(fulfillment_id, options).await
    }

    /// Creates a fulfillment.
    ///
    /// # Errors
    ///
    /// Returns any transport or decoding error.
    pub async fn create(&self, fulfillment: &Fulfillment) -> Result<Fulfillment, ResourceError> {
        self.collection("create")?.create(fulfillment).await
    }

    /// Saves changes to `fulfillment`, addressed by its own id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] before any I/O when the
    /// fulfillment has no id.
    pub async fn update(&self, fulfillment: &Fulfillment) -> Result<Fulfillment, ResourceError> {
        self.collection("update")?.update(fulfillment).await
    }

    /// Marks a fulfillment as complete.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if either id is zero.
    pub async fn complete(&self, fulfillment_id: u64) -> Result<Fulfillment, ResourceError> {
        self.collection("complete")?
            .post_action(fulfillment_id, "complete")
            .await
    }

    /// Transitions a fulfillment to `open`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if either id is zero.
    pub async fn transition(&self, fulfillment_id: u64) -> Result<Fulfillment, ResourceError> {
        self.collection("open")?
            .post_action(fulfillment_id, "open")
            .await
    }

    /// Cancels a fulfillment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] if either id is zero.
    pub async fn cancel(&self, fulfillment_id: u64) -> Result<Fulfillment, ResourceError> {
        self.collection("cancel")?
            .post_action(fulfillment_id, "cancel")
            .await
    }
}
