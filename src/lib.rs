pub mod admin;
pub mod auth;
pub mod config;
pub mod error;
pub mod html;
pub mod local_storage;
pub mod models;
pub mod navigation;
pub mod services;
pub mod store;
pub mod telemetry;
pub mod validation;

#[cfg(test)]
mod test;

pub use config::Config;
pub use error::{AppError, Result, StorageError};
