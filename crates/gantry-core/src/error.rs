//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] gantry_storage::StorageError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] gantry_runtime::RuntimeError),

    #[error("Configuration error: {0}")]
    Config(String),
}
