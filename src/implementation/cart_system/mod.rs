//! # Cart System
//!
//! Line items, order totals and checkout pricing shared by the cart,
//! checkout review, order summary and acknowledgment documents.

mod item;
mod pricing;
mod totals;

pub use item::LineItem;
pub use pricing::{CheckoutPricing, CheckoutQuote};
pub use totals::{aggregate, OrderTotals};
