use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StorageError;

/// Whole-value string storage in the shape of browser `localStorage`.
pub trait KeyValueBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Ephemeral backend; contents live as long as the value.
#[derive(Default)]
pub struct MemoryBackend {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.items
            .lock()
            .map_err(|_| StorageError::Unavailable("memory backend lock poisoned".to_string()))
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items()?.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{file_name}.json"))
    }
}

impl KeyValueBackend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// JSON-aware access to a shared backend. Every higher-level storage type
/// goes through this.
#[derive(Clone)]
pub struct CoreLocalStorage {
    backend: Arc<dyn KeyValueBackend>,
}

impl CoreLocalStorage {
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        CoreLocalStorage { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Raw read that keeps "absent" apart from "could not be read".
    pub fn try_get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend.get_item(key)
    }

    /// Raw read for optional values. Backend failures are logged and read
    /// as absent, so callers that may overwrite the key must use
    /// [`try_get_raw`](Self::try_get_raw) or [`get_json`](Self::get_json).
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match self.try_get_raw(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read from storage");
                None
            }
        }
    }

    pub fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend.set_item(key, value)
    }

    /// An entry that exists but cannot be read still counts as present.
    pub fn contains(&self, key: &str) -> bool {
        !matches!(self.try_get_raw(key), Ok(None))
    }

    /// `Ok(None)` only when absent. Backend read failures and undecodable
    /// values are both errors.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.try_get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_item(key, &raw)
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove_item(key)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    /// Memory backend whose writes can be switched to fail, like a full
    /// browser quota.
    #[derive(Default)]
    pub(crate) struct QuotaBackend {
        inner: MemoryBackend,
        full: AtomicBool,
    }

    impl QuotaBackend {
        pub fn set_full(&self, full: bool) {
            self.full.store(full, Ordering::SeqCst);
        }
    }

    impl KeyValueBackend for QuotaBackend {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.full.load(Ordering::SeqCst) {
                return Err(StorageError::QuotaExceeded(key.to_string()));
            }
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove_item(key)
        }
    }
}
