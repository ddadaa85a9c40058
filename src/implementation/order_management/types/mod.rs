//! Type definitions for order management.
//!
//! This module contains all the type definitions used in order management,
//! organized into separate files for better maintainability.

pub mod basic_types;
pub mod main_order_types;
pub mod order_types;
pub mod service_types;

// Re-export commonly used types
pub use basic_types::*;
pub use main_order_types::*;
pub use order_types::*;
pub use service_types::*;
