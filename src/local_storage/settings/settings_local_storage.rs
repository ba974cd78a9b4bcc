use crate::error::StorageError;
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::local_storage::storage_keys::StorageKeys;
use crate::models::{PlatformSettings, SettingKey};

pub struct SettingsLocalStorage {
    core_storage: CoreLocalStorage,
}

impl SettingsLocalStorage {
    pub fn new(core_storage: CoreLocalStorage) -> Self {
        SettingsLocalStorage { core_storage }
    }

    /// Raw stored value; empty strings count as unset.
    pub fn get_setting(&self, key: SettingKey) -> Option<String> {
        self.core_storage
            .get_raw(&StorageKeys::setting(key.name()))
            .filter(|value| !value.is_empty())
    }

    /// Every setting, falling back to the platform defaults per key.
    pub fn load_settings(&self) -> PlatformSettings {
        let defaults = PlatformSettings::default();

        PlatformSettings {
            platform_name: self
                .get_setting(SettingKey::PlatformName)
                .unwrap_or(defaults.platform_name),
            support_email: self
                .get_setting(SettingKey::SupportEmail)
                .unwrap_or(defaults.support_email),
            maintenance_mode: self
                .get_setting(SettingKey::MaintenanceMode)
                .is_some_and(|v| v == "true"),
            premium_price: self
                .get_setting(SettingKey::PremiumPrice)
                .unwrap_or(defaults.premium_price),
            pro_price: self
                .get_setting(SettingKey::ProPrice)
                .unwrap_or(defaults.pro_price),
        }
    }

    /// Stores a setting as given. Values are not validated.
    pub fn save_setting(&self, key: SettingKey, value: &str) -> Result<(), StorageError> {
        tracing::info!(setting = key.name(), "Saving admin setting");
        self.core_storage
            .set_raw(&StorageKeys::setting(key.name()), value)
    }
}
