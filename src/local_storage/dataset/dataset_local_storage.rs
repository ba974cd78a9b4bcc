use crate::error::StorageError;
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::local_storage::storage_keys::StorageKeys;
use crate::models::MockDataset;

/// Outcome of reading the dataset blob.
#[derive(Debug)]
pub enum DatasetLoad {
    Stored(MockDataset),
    Missing,
    Corrupt(StorageError),
}

pub struct DatasetLocalStorage {
    core_storage: CoreLocalStorage,
}

impl DatasetLocalStorage {
    pub fn new(core_storage: CoreLocalStorage) -> Self {
        DatasetLocalStorage { core_storage }
    }

    pub fn load_dataset(&self) -> DatasetLoad {
        match self.core_storage.get_json::<MockDataset>(StorageKeys::MOCK_DATA) {
            Ok(Some(dataset)) => DatasetLoad::Stored(dataset),
            Ok(None) => DatasetLoad::Missing,
            Err(e) => DatasetLoad::Corrupt(e),
        }
    }

    pub fn save_dataset(&self, dataset: &MockDataset) -> Result<(), StorageError> {
        self.core_storage.set_json(StorageKeys::MOCK_DATA, dataset)
    }

    pub fn clear_dataset(&self) -> Result<(), StorageError> {
        self.core_storage.remove(StorageKeys::MOCK_DATA)
    }
}
