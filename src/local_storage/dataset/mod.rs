pub mod dataset_local_storage;

pub use dataset_local_storage::{DatasetLoad, DatasetLocalStorage};
