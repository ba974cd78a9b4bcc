use crate::error::StorageError;
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::local_storage::storage_keys::StorageKeys;
use crate::models::{Role, SessionRecord};

pub struct SessionLocalStorage {
    core_storage: CoreLocalStorage,
}

impl SessionLocalStorage {
    pub fn new(core_storage: CoreLocalStorage) -> Self {
        SessionLocalStorage { core_storage }
    }

    /// The stored session, or `None` when absent or unreadable.
    pub fn get_session(&self) -> Option<SessionRecord> {
        match self.core_storage.get_json(StorageKeys::SESSION) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable session record");
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.get_session().is_some_and(|s| s.logged_in)
    }

    /// `None` means guest.
    pub fn get_role(&self) -> Option<Role> {
        self.get_session().and_then(|s| s.role)
    }

    pub fn save_session(&self, session: &SessionRecord) -> Result<(), StorageError> {
        self.core_storage.set_json(StorageKeys::SESSION, session)
    }

    pub fn clear_session(&self) -> Result<(), StorageError> {
        self.core_storage.remove(StorageKeys::SESSION)
    }
}
