//! Value objects shared by draft orders, customers and fulfillments.

mod address;
mod line_item;

pub use address::Address;
pub use line_item::{LineItem, NoteAttribute, ShippingLine, TaxLine};
