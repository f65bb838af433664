//! Gantry Storage Layer
//!
//! SQLite-backed persistence for shell state. The shell keeps a handful of
//! well-known keys; values are opaque strings owned by their writers.

mod database;
mod error;
mod kv;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use kv::KeyValueStore;

pub type Result<T> = std::result::Result<T, StorageError>;
