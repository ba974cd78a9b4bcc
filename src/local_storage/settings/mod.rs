pub mod settings_local_storage;

pub use settings_local_storage::SettingsLocalStorage;
