pub mod defaults;
pub mod mock_data_store;

pub use defaults::default_dataset;
pub use mock_data_store::{MockDataStore, UserDeletion};
