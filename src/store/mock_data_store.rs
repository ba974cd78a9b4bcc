use crate::{
    error::StorageError,
    local_storage::{CoreLocalStorage, DatasetLocalStorage, dataset::DatasetLoad},
    models::{MockDataset, Subscription, User},
    store::defaults::default_dataset,
};

/// What `delete_user` removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserDeletion {
    pub user: Option<User>,
    /// Subscriptions that referenced the user and were removed with it
    pub subscriptions: Vec<Subscription>,
}

impl UserDeletion {
    pub fn removed(&self) -> bool {
        self.user.is_some()
    }
}

/// Mock dataset store for the admin dashboard
pub struct MockDataStore {
    storage: DatasetLocalStorage,
    data: MockDataset,
}

impl MockDataStore {
    /// Open the store, loading the persisted dataset or seeding defaults.
    ///
    /// Defaults are written back only when nothing was stored; a corrupt
    /// blob stays untouched until the next mutation overwrites it.
    pub fn open(core_storage: CoreLocalStorage) -> Self {
        let storage = DatasetLocalStorage::new(core_storage);
        let (data, seed) = Self::read(&storage);

        let store = Self { storage, data };
        if seed {
            // First load. A failed seed write is already logged by save().
            let _ = store.save();
        }
        store
    }

    /// Read the dataset without touching storage. Never fails.
    pub fn load(core_storage: CoreLocalStorage) -> MockDataset {
        Self::read(&DatasetLocalStorage::new(core_storage)).0
    }

    fn read(storage: &DatasetLocalStorage) -> (MockDataset, bool) {
        match storage.load_dataset() {
            DatasetLoad::Stored(data) => (data, false),
            DatasetLoad::Missing => {
                tracing::info!("No stored mock data, using defaults");
                (default_dataset(), true)
            }
            DatasetLoad::Corrupt(e) => {
                tracing::warn!(error = %e, "Failed to load mock data, using defaults");
                (default_dataset(), false)
            }
        }
    }

    /// Re-read the persisted dataset, discarding in-memory state.
    pub fn reload(&mut self) {
        self.data = Self::read(&self.storage).0;
    }

    pub fn data(&self) -> &MockDataset {
        &self.data
    }

    /// Persist the whole dataset
    pub fn save(&self) -> Result<(), StorageError> {
        self.storage.save_dataset(&self.data).map_err(|e| {
            tracing::warn!(error = %e, "Failed to save mock data");
            e
        })
    }

    /// Drop persisted state and start over from the defaults
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.storage.clear_dataset()?;
        self.data = default_dataset();
        tracing::info!("Mock data reset to defaults");
        self.save()
    }

    /// Delete a user by ID, together with its subscriptions.
    ///
    /// An unknown ID removes nothing and is not an error. The dataset is
    /// persisted either way.
    pub fn delete_user(&mut self, id: i64) -> Result<UserDeletion, StorageError> {
        let mut deletion = UserDeletion::default();

        if let Some(index) = self.data.users.iter().position(|u| u.id == id) {
            deletion.user = Some(self.data.users.remove(index));

            let (orphaned, kept): (Vec<Subscription>, Vec<Subscription>) =
                std::mem::take(&mut self.data.subscriptions)
                    .into_iter()
                    .partition(|s| s.user_id == id);
            self.data.subscriptions = kept;
            deletion.subscriptions = orphaned;

            tracing::info!(
                user_id = id,
                subscriptions = deletion.subscriptions.len(),
                "Deleted user from mock data"
            );
        } else {
            tracing::debug!(user_id = id, "Delete requested for unknown user");
        }

        self.save()?;
        Ok(deletion)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::local_storage::{FileBackend, StorageKeys};

    #[test]
    fn first_open_seeds_storage() {
        let core = CoreLocalStorage::in_memory();
        let store = MockDataStore::open(core.clone());

        assert_eq!(store.data().users.len(), 7);
        assert!(core.contains(StorageKeys::MOCK_DATA));
    }

    #[test]
    fn corrupt_blob_falls_back_without_overwriting() {
        let core = CoreLocalStorage::in_memory();
        core.set_raw(StorageKeys::MOCK_DATA, "{\"users\": 5}").unwrap();

        let store = MockDataStore::open(core.clone());
        assert_eq!(store.data(), &default_dataset());
        assert_eq!(
            core.get_raw(StorageKeys::MOCK_DATA).as_deref(),
            Some("{\"users\": 5}")
        );
    }

    #[test]
    fn unreadable_file_is_never_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        let core = CoreLocalStorage::new(Arc::new(FileBackend::new(dir.path()).unwrap()));
        let path = dir.path().join("admin_mock_data.json");
        let bytes = [0xff, 0xfe, b'{'];
        std::fs::write(&path, bytes).unwrap();

        let store = MockDataStore::open(core);
        assert_eq!(store.data(), &default_dataset());
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn fractional_amounts_load_and_persist() {
        let core = CoreLocalStorage::in_memory();
        core.set_raw(StorageKeys::MOCK_DATA, CENTS_DATASET).unwrap();

        let mut store = MockDataStore::open(core.clone());
        assert_eq!(store.data().users.len(), 3);
        assert_eq!(store.data().subscriptions[0].amount, 29.99);

        store.delete_user(99).unwrap();
        let persisted = MockDataStore::load(core);
        assert_eq!(persisted.users.len(), 3);
        assert_eq!(persisted.subscriptions[0].amount, 29.99);
    }

    const CENTS_DATASET: &str = r#"{
        "users": [
            {"id":1,"name":"Ahmed Hassan","email":"ahmed@example.com","role":"premium","subscription_status":"active","created_at":"2024-01-15"},
            {"id":2,"name":"Sarah Johnson","email":"sarah@example.com","role":"pro","subscription_status":"active","created_at":"2024-02-20"},
            {"id":3,"name":"Mohammed Ali","email":"mohammed@example.com","role":"user","subscription_status":null,"created_at":"2024-03-10"}
        ],
        "subscriptions": [
            {"id":1,"user_id":1,"user_name":"Ahmed Hassan","plan":"premium","status":"active","started":"2024-01-15","next_billing":"2024-05-15","amount":29.99}
        ],
        "courses": [],
        "modules": [],
        "recentActivity": []
    }"#;

    #[test]
    fn delete_user_cascades_to_subscriptions() {
        let mut store = MockDataStore::open(CoreLocalStorage::in_memory());

        let deletion = store.delete_user(2).unwrap();
        assert!(deletion.removed());
        assert_eq!(deletion.subscriptions.len(), 1);
        assert!(store.data().user(2).is_none());
        assert_eq!(store.data().subscriptions.len(), 4);
        assert_eq!(store.data().orphaned_subscriptions().count(), 0);
    }

    #[test]
    fn deleting_unknown_user_is_a_no_op() {
        let mut store = MockDataStore::open(CoreLocalStorage::in_memory());

        let deletion = store.delete_user(99).unwrap();
        assert!(!deletion.removed());
        assert_eq!(store.data(), &default_dataset());
    }

    #[test]
    fn deletion_survives_reload_until_reset() {
        let core = CoreLocalStorage::in_memory();
        let mut store = MockDataStore::open(core.clone());
        store.delete_user(3).unwrap();

        let reloaded = MockDataStore::open(core.clone());
        assert!(reloaded.data().user(3).is_none());
        assert_eq!(reloaded.data().users.len(), 6);

        store.reset().unwrap();
        let after_reset = MockDataStore::load(core);
        assert_eq!(after_reset.users, default_dataset().users);
    }

    #[test]
    fn reload_discards_unsaved_changes() {
        let core = CoreLocalStorage::in_memory();
        let mut store = MockDataStore::open(core.clone());
        store.delete_user(1).unwrap();

        let mut other = MockDataStore::open(core);
        other.reset().unwrap();

        store.reload();
        assert!(store.data().user(1).is_some());
    }
}
