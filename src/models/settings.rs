/// Values shown on the admin settings page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformSettings {
    pub platform_name: String,
    pub support_email: String,
    pub maintenance_mode: bool,
    pub premium_price: String,
    pub pro_price: String,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        Self {
            platform_name: "Arabic Foundations".to_string(),
            support_email: "coach@arabic.one".to_string(),
            maintenance_mode: false,
            premium_price: "29".to_string(),
            pro_price: "49".to_string(),
        }
    }
}

/// Individually stored setting. The string names double as the
/// `data-setting` attribute values on the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    PlatformName,
    SupportEmail,
    MaintenanceMode,
    PremiumPrice,
    ProPrice,
}

impl SettingKey {
    pub const ALL: [SettingKey; 5] = [
        SettingKey::PlatformName,
        SettingKey::SupportEmail,
        SettingKey::MaintenanceMode,
        SettingKey::PremiumPrice,
        SettingKey::ProPrice,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SettingKey::PlatformName => "platformName",
            SettingKey::SupportEmail => "supportEmail",
            SettingKey::MaintenanceMode => "maintenanceMode",
            SettingKey::PremiumPrice => "premiumPrice",
            SettingKey::ProPrice => "proPrice",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, SettingKey::MaintenanceMode)
    }
}
