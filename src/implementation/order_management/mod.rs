//! Order management system.
//!
//! Placed orders, their status lifecycle and the customer emails sent on
//! every status change.
//!
//! The module is organized by concern:
//! - `types/`: All type definitions
//! - `implementations/`: Business logic implementations

pub mod implementations;
pub mod types;


// Re-export main types for convenience
pub use implementations::{AcknowledgmentLine, OrderAcknowledgment};
pub use types::*;
