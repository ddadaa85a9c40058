use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use serde_json::Value;

use super::*;
use crate::{
    errors::{StoreError, StoreResult},
    implementation::persistence::{InMemorySettingsStore, SettingsStore},
    types::{Address, LocationRef, Municipality, ShippingSettings, ShopConfig, StructuredAddress},
};

/// Store that is always unreachable.
struct DownStore;

#[async_trait]
impl SettingsStore for DownStore {
    async fn read(&self, _key: &str) -> StoreResult<Option<Value>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn write(&self, _key: &str, _value: Value, _at: DateTime<Utc>) -> StoreResult<()> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

fn structured(city: &str) -> Address {
    Address::Structured(StructuredAddress {
        street: "Purok 3".to_string(),
        barangay: LocationRef::new("San Isidro", "051706010"),
        city: LocationRef::new(city, "051706000"),
        province: LocationRef::new("Camarines Sur", "0517"),
        region: LocationRef::new("Bicol Region", "05"),
        postal_code: "4406".to_string(),
    })
}

// ============================================================================
// CLASSIFIER
// ============================================================================

#[test]
fn test_classify_unknown_text_is_other() {
    assert!(classify_text("").is_other());
    assert!(classify_text("   ").is_other());
    assert!(classify_text("asdkjasd").is_other());
    assert!(MunicipalityClassifier::new().classify_text("").is_other());
}

#[test]
fn test_free_functions_match_default_classifier() {
    let classifier = MunicipalityClassifier::default();
    for text in ["", "  \t ", "Naga City", "SIPOCOT", "purok 1, goa", "Makati City"] {
        assert_eq!(classify_text(text), classifier.classify_text(text));
        let address = Address::free_text(text);
        assert_eq!(classify(&address), classifier.classify(&address));
    }
    assert_eq!(classify(&structured("Lupi")), classifier.classify(&structured("Lupi")));
}

#[test]
fn test_classify_specific_keyword_first() {
    assert_eq!(classify_text("Naga City Branch").as_str(), "Naga City");
    assert_eq!(classify_text("Iriga City proper").as_str(), "Iriga City");
    assert_eq!(classify_text("Near NAGA cathedral").as_str(), "Naga City");
}

#[test]
fn test_classify_is_case_insensitive() {
    assert_eq!(classify_text("blk 4, DEL GALLEGO, camarines sur").as_str(), "Del Gallego");
    assert_eq!(classify_text("Sagnay, CamSur").as_str(), "Sagñay");
}

#[test]
fn test_classify_declared_order_wins() {
    let classifier = MunicipalityClassifier::with_keywords([
        ("ragay", Municipality::new("Ragay")),
        ("lupi", Municipality::new("Lupi")),
    ]);

    // Both keywords occur; the one declared first wins, not the one
    // appearing first in the text.
    assert_eq!(classifier.classify_text("Lupi road to Ragay").as_str(), "Ragay");
}

#[test]
fn test_classify_structured_uses_city_name() {
    assert_eq!(classify(&structured("Sipocot")).as_str(), "Sipocot");
    assert_eq!(classify(&structured("  Lupi ")).as_str(), "Lupi");
    assert!(classify(&structured("")).is_other());
    assert_eq!(MunicipalityClassifier::new().classify(&structured("Pili")).as_str(), "Pili");
}

// ============================================================================
// FEE
// ============================================================================

#[test]
fn test_free_area_in_any_casing() {
    let settings = ShippingSettings::default();

    for area in &settings.free_shipping_areas {
        for variant in [area.clone(), area.to_uppercase(), area.to_lowercase()] {
            assert_eq!(compute_fee(&Municipality::new(variant), &settings), dec!(0));
        }
    }
}

#[test]
fn test_other_areas_pay_standard_fee() {
    let settings = ShippingSettings::new(["Lupi"], dec!(750));

    for name in ["Naga City", "Ragay", "Lupi City", "other"] {
        assert_eq!(compute_fee(&Municipality::new(name), &settings), dec!(750));
    }
    assert_eq!(compute_fee(&Municipality::other(), &settings), dec!(750));
}

#[test]
fn test_fee_is_deterministic() {
    let settings = ShippingSettings::default();
    let municipality = Municipality::new("Ragay");

    let first = compute_fee(&municipality, &settings);
    let second = compute_fee(&municipality, &settings);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_calculator_quote() {
    let calculator = ShippingFeeCalculator::new(Arc::new(StaticShippingSettings::default()));

    let quote = calculator.quote(&structured("Cabusao")).await;
    assert!(quote.free_shipping);
    assert_eq!(quote.fee, dec!(0));

    let quote = calculator.quote(&Address::free_text("Somewhere in Manila")).await;
    assert!(quote.municipality.is_other());
    assert_eq!(quote.fee, dec!(500));
}

// ============================================================================
// SETTINGS PROVIDER
// ============================================================================

#[tokio::test]
async fn test_first_read_seeds_defaults() {
    let store = Arc::new(InMemorySettingsStore::new());
    let provider = StoredShippingSettings::new(store.clone(), &ShopConfig::default());

    let settings = provider.get().await;

    assert_eq!(settings, ShippingSettings::default());
    let record = store.record("shipping_settings").expect("seeded record");
    assert_eq!(record.value["standardShippingFee"], Value::from("500"));
}

#[tokio::test]
async fn test_unreachable_store_falls_back() {
    let provider = StoredShippingSettings::new(Arc::new(DownStore), &ShopConfig::default());

    assert_eq!(provider.get().await, ShippingSettings::default());

    let calculator = ShippingFeeCalculator::new(Arc::new(provider));
    let quote = calculator.quote(&Address::free_text("Ragay, Camarines Sur")).await;
    assert_eq!(quote.fee, dec!(0));
}

#[tokio::test]
async fn test_replace_is_read_back() {
    let store = Arc::new(InMemorySettingsStore::new());
    let provider = StoredShippingSettings::new(store, &ShopConfig::default());

    let saved = provider
        .replace(ShippingSettings::new(["Naga City", "naga city", " Pili "], dec!(250)))
        .await
        .expect("replace");

    assert_eq!(saved.free_shipping_areas, vec!["Naga City", "Pili"]);
    assert_eq!(provider.get().await, saved);
}

#[tokio::test]
async fn test_replace_rejects_invalid_settings() {
    let provider =
        StoredShippingSettings::new(Arc::new(InMemorySettingsStore::new()), &ShopConfig::default());

    let result = provider.replace(ShippingSettings::new(["Lupi"], dec!(-10))).await;
    assert!(result.is_err());
    assert_eq!(provider.get().await, ShippingSettings::default());
}

#[tokio::test]
async fn test_replace_reports_store_failure() {
    let provider = StoredShippingSettings::new(Arc::new(DownStore), &ShopConfig::default());

    let result = provider.replace(ShippingSettings::default()).await;
    assert!(matches!(result, Err(crate::errors::CommerceError::SettingsUpdateFailed(_))));
}

#[tokio::test]
async fn test_unreadable_record_falls_back() {
    let store = Arc::new(InMemorySettingsStore::new());
    store
        .write("shipping_settings", serde_json::json!({ "unexpected": true }), Utc::now())
        .await
        .expect("write");
    let provider = StoredShippingSettings::new(store, &ShopConfig::default());

    assert_eq!(provider.get().await, ShippingSettings::default());
}

#[tokio::test]
async fn test_configured_defaults_used_for_fallback() {
    let mut config = ShopConfig::default();
    config.on_config_changed("free_shipping_areas", "Goa").expect("areas");
    config.on_config_changed("standard_shipping_fee", "300").expect("fee");
    let provider = StoredShippingSettings::new(Arc::new(DownStore), &config);

    let settings = provider.get().await;
    assert_eq!(settings.free_shipping_areas, vec!["Goa"]);
    assert_eq!(settings.standard_shipping_fee, dec!(300));
}
