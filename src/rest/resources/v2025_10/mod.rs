//! REST resources for API version 2025-10.
//!
//! ## Draft orders
//!
//! - [`DraftOrders`]: list, count, get, create, update, complete,
//!   `send_invoice` and delete over `draft_orders`
//! - [`DraftOrder`], [`DraftOrderLineItem`], [`AppliedDiscount`],
//!   [`DraftOrderStatus`], [`DraftOrderInvoice`]
//! - [`DraftOrderListOptions`], [`DraftOrderCountOptions`],
//!   [`DraftOrderGetOptions`], [`DraftOrderCompleteOptions`]
//!
//! ## Nested under an owner
//!
//! - [`Metafields`] / [`Metafield`]: `{owner}/{id}/metafields`
//! - [`Fulfillments`] / [`Fulfillment`]: `{owner}/{id}/fulfillments`, with
//!   complete, open and cancel actions
//!
//! ## Embedded value objects
//!
//! [`Customer`], [`Address`], [`LineItem`], [`ShippingLine`], [`TaxLine`],
//! [`NoteAttribute`].

mod common;
mod customer;
mod draft_order;
mod fulfillment;
mod metafield;

pub use common::{Address, LineItem, NoteAttribute, ShippingLine, TaxLine};
pub use customer::{Customer, CustomerState};
pub use draft_order::{
    AppliedDiscount, DraftOrder, DraftOrderCompleteOptions, DraftOrderCountOptions,
    DraftOrderGetOptions, DraftOrderInvoice, DraftOrderLineItem, DraftOrderListOptions,
    DraftOrderStatus, DraftOrders,
};
pub use fulfillment::{
    Fulfillment, FulfillmentGetOptions, FulfillmentListOptions, FulfillmentStatus, Fulfillments,
};
pub use metafield::{Metafield, MetafieldGetOptions, MetafieldListOptions, Metafields};
