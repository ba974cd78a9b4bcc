pub mod session_local_storage;

pub use session_local_storage::SessionLocalStorage;
