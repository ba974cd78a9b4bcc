/// Keys of every value the site keeps in the key-value store.
pub struct StorageKeys;

impl StorageKeys {
    /// The session record written by the auth screens.
    pub const SESSION: &'static str = "auth";

    /// The admin dashboard's mock dataset blob.
    pub const MOCK_DATA: &'static str = "admin_mock_data";

    /// Prefix of the individually stored admin settings.
    pub const SETTING_PREFIX: &'static str = "admin_setting_";

    /// Storage key of a single admin setting.
    pub fn setting(name: &str) -> String {
        format!("{}{}", Self::SETTING_PREFIX, name)
    }
}
