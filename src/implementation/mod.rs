//! Implementation details for the furniture store core

pub mod cart_system;
pub mod checkout;
pub mod notifications;
pub mod order_management;
pub mod persistence;
pub mod shipping;
