pub mod core_local_storage;
pub mod dataset;
pub mod session;
pub mod settings;
pub mod storage_keys;

pub use core_local_storage::{CoreLocalStorage, FileBackend, KeyValueBackend, MemoryBackend};
pub use dataset::DatasetLocalStorage;
pub use session::SessionLocalStorage;
pub use settings::SettingsLocalStorage;
pub use storage_keys::StorageKeys;
