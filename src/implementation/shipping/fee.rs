//! Shipping fee calculation

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{classifier::MunicipalityClassifier, settings::ShippingSettingsProvider};
use crate::types::{Address, Amount, Municipality, ShippingSettings};

/// Fee for shipping to `municipality` under `settings`.
///
/// Free shipping areas cost nothing; everything else, including the
/// `"other"` sentinel, pays the standard fee.
#[must_use]
pub fn compute_fee(municipality: &Municipality, settings: &ShippingSettings) -> Amount {
    if !municipality.is_other() && settings.contains_area(municipality.as_str()) {
        Decimal::ZERO
    } else {
        settings.standard_shipping_fee
    }
}

/// Resolved destination and its fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    /// Municipality the address resolved to.
    pub municipality:  Municipality,
    /// Shipping fee.
    pub fee:           Amount,
    /// Whether the destination is a free shipping area.
    pub free_shipping: bool,
}

/// Quotes shipping fees using settings from an injected provider.
#[derive(Clone)]
pub struct ShippingFeeCalculator {
    settings:   Arc<dyn ShippingSettingsProvider>,
    classifier: MunicipalityClassifier,
}

impl ShippingFeeCalculator {
    /// Creates a calculator with the built-in municipality table.
    #[must_use]
    pub fn new(settings: Arc<dyn ShippingSettingsProvider>) -> Self {
        Self { settings, classifier: MunicipalityClassifier::new() }
    }

    /// Replaces the municipality classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: MunicipalityClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Resolves a municipality from an address.
    #[must_use]
    pub fn resolve(&self, address: &Address) -> Municipality {
        self.classifier.classify(address)
    }

    /// Quotes the fee for an address with the current settings.
    pub async fn quote(&self, address: &Address) -> ShippingQuote {
        let municipality = self.resolve(address);
        self.quote_municipality(municipality).await
    }

    /// Quotes the fee for an already resolved municipality.
    pub async fn quote_municipality(&self, municipality: Municipality) -> ShippingQuote {
        let settings = self.settings.get().await;
        let fee = compute_fee(&municipality, &settings);
        debug!(municipality = %municipality, fee = %fee, "shipping fee computed");

        ShippingQuote { free_shipping: fee.is_zero(), municipality, fee }
    }
}

impl std::fmt::Debug for ShippingFeeCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShippingFeeCalculator")
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}
