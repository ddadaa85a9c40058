//! # Shipping
//!
//! Municipality classification, shipping settings and fee calculation.

pub mod classifier;
pub mod fee;
pub mod settings;

#[cfg(test)]
mod tests;

pub use classifier::{classify, classify_text, MunicipalityClassifier, MUNICIPALITY_KEYWORDS};
pub use fee::{compute_fee, ShippingFeeCalculator, ShippingQuote};
pub use settings::{ShippingSettingsProvider, StaticShippingSettings, StoredShippingSettings};
