//! # Furniture Commerce
//!
//! Shipping fee determination, order total computation and the order
//! lifecycle for a single-region furniture storefront. Storage and email are
//! collaborators behind traits; everything else is computed here so the cart,
//! checkout review, order summary and acknowledgment always agree.

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod implementation;
pub mod telemetry;
pub mod types;

// Re-exports for public API
pub use errors::{CommerceError, CommerceResult};
pub use implementation::{
    cart_system::{aggregate, CheckoutPricing, CheckoutQuote, LineItem, OrderTotals},
    checkout::{CheckoutRequest, CheckoutService},
    order_management::{Order, OrderAcknowledgment, OrderService, OrderStatus, TransitionPolicy},
    shipping::{classify, compute_fee, ShippingFeeCalculator, ShippingSettingsProvider},
};
pub use types::{format_amount, Address, Amount, Municipality, ShippingSettings, ShopConfig};
