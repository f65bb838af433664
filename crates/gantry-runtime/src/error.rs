//! Runtime boundary error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Mount point not found: {0}")]
    MountPointMissing(String),

    #[error("Runtime failed to start: {0}")]
    InitFailed(String),
}
