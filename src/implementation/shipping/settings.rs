//! Shipping settings providers

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::{
    errors::{CommerceError, CommerceResult, StoreError},
    implementation::persistence::SettingsStore,
    types::{ShippingSettings, ShopConfig},
};

/// Source of the current shipping settings.
///
/// `get` never fails: implementations fall back to defaults so a settings
/// outage cannot block checkout.
#[async_trait]
pub trait ShippingSettingsProvider: Send + Sync {
    /// Current shipping settings.
    async fn get(&self) -> ShippingSettings;
}

/// Fixed settings, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticShippingSettings(pub ShippingSettings);

#[async_trait]
impl ShippingSettingsProvider for StaticShippingSettings {
    async fn get(&self) -> ShippingSettings {
        self.0.clone()
    }
}

/// Settings kept as one record in a key-value store.
#[derive(Clone)]
pub struct StoredShippingSettings {
    store:    Arc<dyn SettingsStore>,
    key:      String,
    defaults: ShippingSettings,
}

impl StoredShippingSettings {
    /// Creates a provider over `store` using the configured key and defaults.
    #[must_use]
    pub fn new(store: Arc<dyn SettingsStore>, config: &ShopConfig) -> Self {
        Self {
            store,
            key: config.settings_key.clone(),
            defaults: config.default_shipping_settings(),
        }
    }

    /// Settings used whenever the store cannot supply a usable record.
    #[must_use]
    pub fn defaults(&self) -> &ShippingSettings {
        &self.defaults
    }

    /// Replaces the stored settings wholesale. Last writer wins.
    pub async fn replace(&self, settings: ShippingSettings) -> CommerceResult<ShippingSettings> {
        settings.validate()?;
        let settings = settings.normalized();

        let value = serde_json::to_value(&settings)
            .map_err(|e| CommerceError::SettingsUpdateFailed(StoreError::from(e)))?;
        self.store
            .write(&self.key, value, Utc::now())
            .await
            .map_err(CommerceError::SettingsUpdateFailed)?;

        info!(
            key = %self.key,
            areas = settings.free_shipping_areas.len(),
            fee = %settings.standard_shipping_fee,
            "shipping settings replaced"
        );
        Ok(settings)
    }

    async fn seed_defaults(&self) {
        let value = match serde_json::to_value(&self.defaults) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not encode default shipping settings");
                return;
            },
        };

        match self.store.write(&self.key, value, Utc::now()).await {
            Ok(()) => info!(key = %self.key, "seeded default shipping settings"),
            Err(e) => warn!(key = %self.key, error = %e, "could not seed shipping settings"),
        }
    }
}

#[async_trait]
impl ShippingSettingsProvider for StoredShippingSettings {
    async fn get(&self) -> ShippingSettings {
        match self.store.read(&self.key).await {
            Ok(Some(value)) => match serde_json::from_value::<ShippingSettings>(value) {
                Ok(settings) if settings.validate().is_ok() => settings.normalized(),
                Ok(_) => {
                    warn!(key = %self.key, "stored shipping settings invalid, using defaults");
                    self.defaults.clone()
                },
                Err(e) => {
                    warn!(key = %self.key, error = %e, "stored shipping settings unreadable, using defaults");
                    self.defaults.clone()
                },
            },
            Ok(None) => {
                self.seed_defaults().await;
                self.defaults.clone()
            },
            Err(e) => {
                warn!(key = %self.key, error = %e, "shipping settings unavailable, using defaults");
                self.defaults.clone()
            },
        }
    }
}

impl std::fmt::Debug for StoredShippingSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredShippingSettings")
            .field("key", &self.key)
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}
