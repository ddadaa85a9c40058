//! Shipping settings, addresses and municipalities

use std::{borrow::Cow, fmt};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Amount;
use crate::errors::{CommerceError, CommerceResult};

// ============================================================================
// SHIPPING SETTINGS
// ============================================================================

/// Municipalities that ship free when the settings store has nothing better.
pub const DEFAULT_FREE_SHIPPING_AREAS: [&str; 5] =
    ["Cabusao", "Del Gallego", "Lupi", "Ragay", "Sipocot"];

/// Flat fee charged outside the free shipping areas by default.
pub const DEFAULT_STANDARD_SHIPPING_FEE: i64 = 500;

/// Shipping fee policy: a free-shipping area list and one flat fee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingSettings {
    /// Municipality names that ship for free.
    pub free_shipping_areas:   Vec<String>,
    /// Fee for every other destination.
    pub standard_shipping_fee: Amount,
}

impl ShippingSettings {
    /// Creates settings from an area list and fee.
    #[must_use]
    pub fn new<I, S>(free_shipping_areas: I, standard_shipping_fee: Amount) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            free_shipping_areas: free_shipping_areas.into_iter().map(Into::into).collect(),
            standard_shipping_fee,
        }
    }

    /// Whether `name` is a free shipping area (case-insensitive).
    #[must_use]
    pub fn contains_area(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        !wanted.is_empty()
            && self.free_shipping_areas.iter().any(|area| area.trim().to_lowercase() == wanted)
    }

    /// Checks the fee is non-negative and every area has a name.
    pub fn validate(&self) -> CommerceResult<()> {
        if self.standard_shipping_fee < Decimal::ZERO {
            return Err(CommerceError::InvalidAmount {
                field: "standard_shipping_fee",
                value: self.standard_shipping_fee,
            });
        }

        if self.free_shipping_areas.iter().any(|area| area.trim().is_empty()) {
            return Err(CommerceError::InvalidSettings(
                "free shipping area names must not be blank".to_string(),
            ));
        }

        Ok(())
    }

    /// Trims names and drops case-insensitive duplicates, keeping the first spelling.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let mut seen: Vec<String> = Vec::with_capacity(self.free_shipping_areas.len());
        self.free_shipping_areas.retain_mut(|area| {
            let trimmed = area.trim().to_string();
            let key = trimmed.to_lowercase();
            if key.is_empty() || seen.contains(&key) {
                return false;
            }
            seen.push(key);
            *area = trimmed;
            true
        });
        self
    }
}

impl Default for ShippingSettings {
    fn default() -> Self {
        Self::new(
            DEFAULT_FREE_SHIPPING_AREAS,
            Decimal::from(DEFAULT_STANDARD_SHIPPING_FEE),
        )
    }
}

// ============================================================================
// MUNICIPALITY
// ============================================================================

/// Municipality name used as the shipping zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Municipality(pub Cow<'static, str>);

impl Municipality {
    /// Sentinel for addresses that match no known municipality.
    pub const OTHER: &'static str = "other";

    /// Creates a municipality from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Creates a municipality from a static name (zero-copy).
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The `"other"` sentinel.
    #[must_use]
    pub const fn other() -> Self {
        Self::from_static(Self::OTHER)
    }

    /// Whether this is the `"other"` sentinel.
    #[must_use]
    pub fn is_other(&self) -> bool {
        self.0 == Self::OTHER
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Municipality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ADDRESS
// ============================================================================

/// One level of the location hierarchy: display name plus lookup code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    /// Display name.
    pub name: String,
    /// Opaque location-hierarchy code.
    pub code: String,
}

impl LocationRef {
    /// Creates a location reference.
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self { name: name.into(), code: code.into() }
    }
}

/// Address picked through the region/province/city/barangay selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredAddress {
    /// Street, building and house number.
    pub street:      String,
    /// Barangay.
    pub barangay:    LocationRef,
    /// City or municipality.
    pub city:        LocationRef,
    /// Province.
    pub province:    LocationRef,
    /// Region.
    pub region:      LocationRef,
    /// Postal code.
    pub postal_code: String,
}

impl StructuredAddress {
    /// Single-line rendering, most specific part first.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            self.street.as_str(),
            self.barangay.name.as_str(),
            self.city.name.as_str(),
            self.province.name.as_str(),
            self.region.name.as_str(),
            self.postal_code.as_str(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Delivery address in whichever shape the caller has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Address {
    /// Validated structured address.
    Structured(StructuredAddress),
    /// Concatenated free-text address.
    FreeText(String),
}

impl Address {
    /// Creates a free-text address.
    #[must_use]
    pub fn free_text(text: impl Into<String>) -> Self {
        Self::FreeText(text.into())
    }

    /// Single-line rendering.
    #[must_use]
    pub fn one_line(&self) -> String {
        match self {
            Self::Structured(address) => address.one_line(),
            Self::FreeText(text) => text.trim().to_string(),
        }
    }
}

impl From<StructuredAddress> for Address {
    fn from(address: StructuredAddress) -> Self {
        Self::Structured(address)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ShippingSettings::default();
        assert_eq!(settings.free_shipping_areas.len(), 5);
        assert_eq!(settings.standard_shipping_fee, dec!(500));
        assert!(settings.contains_area("lupi"));
        assert!(settings.contains_area("  DEL GALLEGO "));
        assert!(!settings.contains_area("Naga City"));
        assert!(!settings.contains_area(""));
    }

    #[test]
    fn test_settings_wire_names() {
        let json = serde_json::to_value(ShippingSettings::default()).expect("serialize");
        assert!(json.get("freeShippingAreas").is_some());
        assert!(json.get("standardShippingFee").is_some());
    }

    #[test]
    fn test_normalized_drops_duplicates() {
        let settings =
            ShippingSettings::new([" Lupi ", "LUPI", "Ragay", ""], dec!(300)).normalized();
        assert_eq!(settings.free_shipping_areas, vec!["Lupi", "Ragay"]);
    }

    #[test]
    fn test_validate_rejects_negative_fee() {
        let settings = ShippingSettings::new(["Lupi"], dec!(-1));
        assert!(settings.validate().is_err());
        assert!(ShippingSettings::new(["  "], dec!(10)).validate().is_err());
    }

    #[test]
    fn test_structured_one_line() {
        let address = StructuredAddress {
            street: "12 Rizal St".to_string(),
            barangay: LocationRef::new("Poblacion", "051723001"),
            city: LocationRef::new("Lupi", "051723000"),
            province: LocationRef::new("Camarines Sur", "0517"),
            region: LocationRef::new("Bicol Region", "05"),
            postal_code: "4409".to_string(),
        };
        assert_eq!(
            address.one_line(),
            "12 Rizal St, Poblacion, Lupi, Camarines Sur, Bicol Region, 4409"
        );
    }
}
