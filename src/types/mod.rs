//! Type definitions for the commerce core

use std::{env, str::FromStr};

use rust_decimal::Decimal;
use tracing::info;

use crate::{
    errors::{CommerceError, CommerceResult},
    implementation::order_management::TransitionPolicy,
};

pub mod money;
pub mod shipping;

pub use money::{format_amount, Amount, ProductId};
pub use shipping::{
    Address, LocationRef, Municipality, ShippingSettings, StructuredAddress,
    DEFAULT_FREE_SHIPPING_AREAS, DEFAULT_STANDARD_SHIPPING_FEE,
};

/// Environment variable for each configuration key.
const ENV_KEYS: [(&str, &str); 7] = [
    ("SHOP_NAME", "shop_name"),
    ("SHOP_SETTINGS_KEY", "settings_key"),
    ("SHOP_FREE_SHIPPING_AREAS", "free_shipping_areas"),
    ("SHOP_STANDARD_SHIPPING_FEE", "standard_shipping_fee"),
    ("SHOP_TRANSITION_POLICY", "transition_policy"),
    ("SHOP_NOTIFICATIONS_ENABLED", "notifications_enabled"),
    ("SHOP_CURRENCY_SYMBOL", "currency_symbol"),
];

/// Shop configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    /// Name printed on order acknowledgments.
    pub shop_name:             String,
    /// Key of the shipping settings record in the settings store.
    pub settings_key:          String,
    /// Free shipping areas used when the settings store is unavailable.
    pub free_shipping_areas:   Vec<String>,
    /// Standard fee used when the settings store is unavailable.
    pub standard_shipping_fee: Decimal,
    /// How order status changes are checked.
    pub transition_policy:     TransitionPolicy,
    /// Send status emails.
    pub notifications_enabled: bool,
    /// Currency symbol for display.
    pub currency_symbol:       String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        let settings = ShippingSettings::default();
        Self {
            shop_name:             "Furniture Store".to_string(),
            settings_key:          "shipping_settings".to_string(),
            free_shipping_areas:   settings.free_shipping_areas,
            standard_shipping_fee: settings.standard_shipping_fee,
            transition_policy:     TransitionPolicy::default(),
            notifications_enabled: true,
            currency_symbol:       "₱".to_string(),
        }
    }
}

impl ShopConfig {
    /// Loads configuration from `SHOP_*` environment variables.
    pub fn from_env() -> CommerceResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, keeping defaults for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CommerceResult<Self> {
        let mut config = Self::default();
        for (var, key) in ENV_KEYS {
            match lookup(var) {
                Some(value) => config.on_config_changed(key, &value)?,
                None => info!("{var} not set, using default"),
            }
        }
        Ok(config)
    }

    /// Fallback shipping settings built from this configuration.
    #[must_use]
    pub fn default_shipping_settings(&self) -> ShippingSettings {
        ShippingSettings::new(self.free_shipping_areas.clone(), self.standard_shipping_fee)
            .normalized()
    }

    /// Updates one key.
    pub fn on_config_changed(&mut self, key: &str, value: &str) -> CommerceResult<()> {
        let value = value.trim();
        match key {
            "shop_name" => self.shop_name = non_empty(key, value)?,
            "settings_key" => self.settings_key = non_empty(key, value)?,
            "free_shipping_areas" => {
                self.free_shipping_areas = value
                    .split(',')
                    .map(str::trim)
                    .filter(|area| !area.is_empty())
                    .map(str::to_string)
                    .collect();
            },
            "standard_shipping_fee" => {
                let fee = Decimal::from_str(value).map_err(|e| invalid(key, e))?;
                if fee < Decimal::ZERO {
                    return Err(invalid(key, "fee must not be negative"));
                }
                self.standard_shipping_fee = fee;
            },
            "transition_policy" => self.transition_policy = value.parse()?,
            "notifications_enabled" => {
                self.notifications_enabled = value.parse().map_err(|e| invalid(key, e))?;
            },
            "currency_symbol" => self.currency_symbol = non_empty(key, value)?,
            _ => return Err(invalid(key, "unknown key")),
        }
        Ok(())
    }

    /// Applies several key/value pairs in order.
    pub fn apply_config(&mut self, config: &[(String, String)]) -> CommerceResult<()> {
        for (key, value) in config {
            self.on_config_changed(key, value)?;
        }
        Ok(())
    }

    /// Current configuration as key/value pairs.
    #[must_use]
    pub fn get_current_config(&self) -> Vec<(String, String)> {
        vec![
            ("shop_name".to_string(), self.shop_name.clone()),
            ("settings_key".to_string(), self.settings_key.clone()),
            (
                "free_shipping_areas".to_string(),
                self.free_shipping_areas.join(","),
            ),
            (
                "standard_shipping_fee".to_string(),
                self.standard_shipping_fee.to_string(),
            ),
            (
                "transition_policy".to_string(),
                self.transition_policy.as_str().to_string(),
            ),
            (
                "notifications_enabled".to_string(),
                self.notifications_enabled.to_string(),
            ),
            ("currency_symbol".to_string(), self.currency_symbol.clone()),
        ]
    }

    /// Restores every key to its default.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(key: &str, value: &str) -> CommerceResult<String> {
    if value.is_empty() {
        return Err(invalid(key, "value must not be empty"));
    }
    Ok(value.to_string())
}

fn invalid(key: &str, reason: impl ToString) -> CommerceError {
    CommerceError::InvalidConfig { key: key.to_string(), reason: reason.to_string() }
}
