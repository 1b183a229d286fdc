//! Draft orders and their nested metafields and fulfillments.
//!
//! A draft order is an order a merchant builds on a customer's behalf before
//! payment. [`DraftOrders`] binds the `draft_orders` collection to a
//! transport; besides CRUD it can email an invoice and complete the draft
//! into a real order.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_draft_orders::rest::resources::{
//!     DraftOrder, DraftOrderCompleteOptions, DraftOrderInvoice, DraftOrderLineItem, DraftOrders,
//! };
//!
//! let draft_orders = DraftOrders::new(&client);
//!
//! let draft = draft_orders
//!     .create(&DraftOrder {
//!         line_items: Some(vec![DraftOrderLineItem {
//!             variant_id: Some(39_072_856),
//!             quantity: Some(2),
//!             ..Default::default()
//!         }]),
//!         customer_id: Some(207_119_551),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let id = draft.id.unwrap_or_default();
//! draft_orders
//!     .send_invoice(id, &DraftOrderInvoice {
//!         subject: Some("Your order is ready".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let completed = draft_orders
//!     .complete(id, Some(&DraftOrderCompleteOptions { payment_pending: Some(true) }))
//!     .await?;
//! println!("order {:?}", completed.order_id);
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{Address, NoteAttribute, ShippingLine, TaxLine};
use super::customer::Customer;
use super::fulfillment::{Fulfillment, FulfillmentGetOptions, FulfillmentListOptions, Fulfillments};
use super::metafield::{Metafield, MetafieldGetOptions, MetafieldListOptions, Metafields};
use crate::clients::HttpMethod;
use crate::rest::{
    envelope, require_id, to_query, ResourceCollection, ResourceError, ResourceResponse,
    RestResource, RestTransport,
};

const COLLECTION: &str = "draft_orders";

/// Where a draft order is in its lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DraftOrderStatus {
    #[default]
    Open,
    InvoiceSent,
    Completed,
    /// A status this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// A discount on a whole draft order or on one line item.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppliedDiscount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Discount size: a percentage or an amount depending on `value_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,

    /// `fixed_amount` or `percentage`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    /// The amount actually taken off, computed by Shopify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

/// A line on a draft order.
///
/// Either references a variant (`variant_id` + `quantity`) or is a custom
/// item described by `title` and `price`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DraftOrderLineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_discount: Option<AppliedDiscount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<NoteAttribute>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_card: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillable_quantity: Option<i64>,
    /// `true` for an item not backed by a product variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

/// A draft order.
///
/// Every field is optional. Unset fields are left out of request bodies, so
/// an update only touches what is set. `id` is sent when present.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DraftOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Order created by completing this draft.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// Display name such as `#D2`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<NoteAttribute>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DraftOrderStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_sent_at: Option<DateTime<Utc>>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    /// Attaches an existing customer on create without sending the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_customer_default_address: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<DraftOrderLineItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_line: Option<ShippingLine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_discount: Option<AppliedDiscount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_lines: Option<Vec<TaxLine>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exemptions: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,

    /// Metafields to create along with the draft order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for DraftOrder {
    const NAME: &'static str = "DraftOrder";
    const KEY: &'static str = "draft_order";
    const PLURAL: &'static str = "draft_orders";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

/// The invoice email sent for a draft order.
///
/// Unset fields fall back to the shop's defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DraftOrderInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
}

/// Filters for [`DraftOrders::list`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DraftOrderListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size (max 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DraftOrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,
    /// Comma-separated list of fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Sort order, e.g. `updated_at desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Cursor from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Filters for [`DraftOrders::count`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DraftOrderCountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DraftOrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
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
    pub order: Option<String>,
}

/// Options for [`DraftOrders::get`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DraftOrderGetOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Options for [`DraftOrders::complete`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DraftOrderCompleteOptions {
    /// Create the order with payment still pending instead of marking it paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_pending: Option<bool>,
}

/// Draft order operations over a shared transport.
///
/// Holds only a borrow of the transport, so it is cheap to build per call
/// site and can be shared across tasks whenever the transport can.
#[derive(Debug)]
pub struct DraftOrders<'c, T> {
    transport: &'c T,
}

impl<T> Clone for DraftOrders<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DraftOrders<'_, T> {}

impl<'c, T: RestTransport> DraftOrders<'c, T> {
    /// Binds draft order operations to `transport`.
    #[must_use]
    pub const fn new(transport: &'c T) -> Self {
        Self { transport }
    }

    fn collection(&self) -> ResourceCollection<'c, T, DraftOrder> {
        ResourceCollection::new(self.transport, COLLECTION)
    }

    /// Lists draft orders.
    ///
    /// # Errors
    ///
    /// Returns any transport error, or [`ResourceError::MissingEnvelope`]
    /// when the response lacks `draft_orders`.
    pub async fn list(
        &self,
        options: Option<&DraftOrderListOptions>,
    ) -> Result<Vec<DraftOrder>, ResourceError> {
        self.collection().list(options).await
    }

    /// Lists one page of draft orders along with its pagination cursors and
    /// rate limit.
    ///
    /// # Errors
    ///
    /// See [`DraftOrders::list`].
    pub async fn list_page(
        &self,
        options: Option<&DraftOrderListOptions>,
    ) -> Result<ResourceResponse<Vec<DraftOrder>>, ResourceError> {
        self.collection().list_page(options).await
    }

    /// Counts draft orders.
    ///
    /// # Errors
    ///
    /// Returns any transport error, or [`ResourceError::MissingEnvelope`]
    /// when the response has no numeric `count`.
    pub async fn count(
        &self,
        options: Option<&DraftOrderCountOptions>,
    ) -> Result<u64, ResourceError> {
        self.collection().count(options).await
    }

    /// Fetches a draft order by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for id zero, and any transport
    /// error (a 404 for an unknown id).
    pub async fn get(
        &self,
        id: u64,
        options: Option<&DraftOrderGetOptions>,
    ) -> Result<DraftOrder, ResourceError> {
        self.collection().find(id, options).await
    }

    /// Creates a draft order.
    ///
    /// # Errors
    ///
    /// Returns any transport error; a 422 carries
    /// [`ResourceError::validation_errors`].
    pub async fn create(&self, draft_order: &DraftOrder) -> Result<DraftOrder, ResourceError> {
        self.collection().create(draft_order).await
    }

    /// Saves changes to an existing draft order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] before any I/O when `draft_order`
    /// has no id.
    pub async fn update(&self, draft_order: &DraftOrder) -> Result<DraftOrder, ResourceError> {
        self.collection().update(draft_order).await
    }

    /// Completes a draft order, turning it into an order.
    ///
    /// The returned draft carries the new `order_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for id zero, and any transport
    /// error.
    pub async fn complete(
        &self,
        id: u64,
        options: Option<&DraftOrderCompleteOptions>,
    ) -> Result<DraftOrder, ResourceError> {
        let id = require_id(Some(id), DraftOrder::NAME, "complete")?;
        let query = options.map(to_query).transpose()?;
        let collection = self.collection();
        let response = collection
            .send(
                "complete",
                HttpMethod::Put,
                collection.path(format!("{id}/complete")),
                None,
                query,
            )
            .await?;

        let completed =
            ResourceResponse::<DraftOrder>::from_http_response(response, DraftOrder::KEY)?;
        Ok(completed.into_inner())
    }

    /// Emails an invoice for a draft order and returns the invoice as sent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for id zero, and any transport
    /// error.
    pub async fn send_invoice(
        &self,
        id: u64,
        invoice: &DraftOrderInvoice,
    ) -> Result<DraftOrderInvoice, ResourceError> {
        let id = require_id(Some(id), DraftOrder::NAME, "send_invoice")?;
        let body = envelope("draft_order_invoice", invoice)?;
        let collection = self.collection();
        let response = collection
            .send(
                "send_invoice",
                HttpMethod::Post,
                collection.path(format!("{id}/send_invoice")),
                Some(body),
                None,
            )
            .await?;

        let invoice =
            ResourceResponse::<DraftOrderInvoice>::from_http_response(response, "draft_order_invoice")?;
        Ok(invoice.into_inner())
    }

    /// Deletes a draft order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for id zero, and any transport
    /// error.
    pub async fn delete(&self, id: u64) -> Result<(), ResourceError> {
        self.collection().delete(id).await
    }

    /// Metafield operations on one draft order.
    #[must_use]
    pub const fn metafields(&self, id: u64) -> Metafields<'c, T> {
        Metafields::new(self.transport, COLLECTION, id)
    }

    /// Fulfillment operations on one draft order.
    #[must_use]
    pub const fn fulfillments(&self, id: u64) -> Fulfillments<'c, T> {
        Fulfillments::new(self.transport, COLLECTION, id)
    }

    /// Lists the metafields of draft order `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for id zero, and any transport
    /// error.
    pub async fn list_metafields(
        &self,
        id: u64,
        options: Option<&MetafieldListOptions>,
    ) -> Result<Vec<Metafield>, ResourceError> {
        self.metafields(id).list(options).await
    }

    /// Counts the metafields of draft order `id`.
    ///
    /// # Errors
    ///
    /// See [`DraftOrders::list_metafields`].
    pub async fn count_metafields(
        &self,
        id: u64,
        options: Option<&MetafieldListOptions>,
    ) -> Result<u64, ResourceError> {
        self.metafields(id).count(options).await
    }

    /// Fetches one metafield of draft order `id`.
    ///
    /// # Errors
    ///
    /// See [`DraftOrders::list_metafields`].
    pub async fn get_metafield(
        &self,
        id: u64,
        metafield_id: u64,
        options: Option<&MetafieldGetOptions>,
    ) -> Result<Metafield, ResourceError> {
        self.metafields(id).get(metafield_id, options).await
    }

    /// Creates a metafield on draft order `id`.
    ///
    /// # Errors
    ///
    /// See [`DraftOrders::list_metafields`].
    pub async fn create_metafield(
        &self,
        id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        self.metafields(id).create(metafield).await
    }

    /// Saves changes to a metafield of draft order `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] before any I/O when the metafield
    /// has no id.
    pub async fn update_metafield(
        &self,
        id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        self.metafields(id).update(metafield).await
    }

    /// Deletes a metafield of draft order `id`.
    ///
    /// # Errors
    ///
    /// See [`DraftOrders::list_metafields`].
    pub async fn delete_metafield(&self, id: u64, metafield_id: u64) -> Result<(), ResourceError> {
        self.metafields(id).delete(metafield_id).await
    }

    /// Lists the fulfillments of draft order `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] for id zero, and any transport
    /// error.
    pub async fn list_fulfillments(
        &self,
        id: u64,
        options: Option<&FulfillmentListOptions>,
    ) -> Result<Vec<Fulfillment>, ResourceError> {
        self.fulfillments(id).list(options).await
    }

    /// Counts the fulfillments of draft order `id`.
    ///
    /// # Errors
    ///
    /// See [`DraftOrders::list_fulfillments`].
    pub async fn count_fulfillments(
        &self,
        id: u64,
        options: Option<&FulfillmentListOptions>,
    ) -> Result<u64, ResourceError> {
        self.fulfillments(id).count(options).await
    }

    /// Fetches one fulfillment of draft order `id`.
    ///
    /// # Errors
    ///
    /// See [`DraftOrders::list_fulfillments`].
    pub async fn get_fulfillment(
        &self,
        id: u64,
        fulfillment_id: u64,
        options: Option<&FulfillmentGetOptions>,
    ) -> Result<Fulfillment, ResourceError> {
        self.fulfillments(id).get(fulfillment_id, options).await
    }

    /// Creates a fulfillment on draft order `id`.
    ///
    /// # Errors
    ///
    /// See [`DraftOrders::list_fulfillments`].
    pub async fn create_fulfillment(
        &self,
        id: u64,
        fulfillment: &Fulfillment,
    ) -> Result<Fulfillment, ResourceError> {
        self.fulfillments(id).create(fulfillment).await
    }

    /// Saves changes to a fulfillment of draft order `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingId`] before any I/O when the
    /// fulfillment has no id.
    pub async fn update_fulfillment(
        &self,
        id: u64,
        fulfillment: &Fulfillment,
    ) -> Result<Fulfillment, ResourceError> {
        self.fulfillments(id).update(fulfillment).await
    }

    /// Marks a fulfillment of draft order `id` as complete.
    ///
    /// # Errors
    ///
    /// See [`DraftOrders::list_fulfillments`].
    pub async fn complete_fulfillment(
        &self,
        id: u64,
        fulfillment_id: u64,
    ) -> Result<Fulfillment, ResourceError> {
        self.fulfillments(id).complete(fulfillment_id).await
    }

    /// Transitions a fulfillment of draft order `id` to open.
    ///
    /// # Errors
    ///
    /// See [`DraftOrders::list_fulfillments`].
    pub async fn transition_fulfillment(
        &self,
        id: u64,
        fulfillment_id: u64,
    ) -> Result<Fulfillment, ResourceError> {
        self.fulfillments(id).transition(fulfillment_id).await
    }

    /// Cancels a fulfillment of draft order `id`.
    ///
    /// # Errors
    ///
    /// See [`DraftOrders::list_fulfillments`].
    pub async fn cancel_fulfillment(
        &self,
        id: u64,
        fulfillment_id: u64,
    ) -> Result<Fulfillment, ResourceError> {
        self.fulfillments(id).cancel(fulfillment_id).await
    }
}

// Verify the binding is Send + Sync over the real client.
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DraftOrders<'static, crate::clients::RestClient>>();
    assert_send_sync::<DraftOrder>();
};
