//! Order management implementations.
//!
//! Business logic implementations for order management types.

pub mod acknowledgment;
pub mod order_impl;
pub mod service_impl;

pub use acknowledgment::{AcknowledgmentLine, OrderAcknowledgment};
