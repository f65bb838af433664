//! Gantry Core
//!
//! Shell coordination layer: configuration, the bootstrap sequence, and
//! the session bridge wiring that keeps the UI runtime and durable
//! storage in agreement.

mod config;
mod error;
mod shell;

pub use config::{Config, API_BASE_URL_ENV, DEFAULT_API_BASE_URL};
pub use error::CoreError;
pub use shell::Shell;

// Re-export core components
pub use gantry_runtime::{
    Capabilities, Flags, HeadlessHost, HeadlessRuntime, Host, MountNode, Port, Ports,
    RuntimeError, RuntimeHandle, Token, UiRuntime, ROOT_NODE_ID,
};
pub use gantry_session::{SessionBridge, SessionEvent, SessionState, ACCESS_TOKEN_KEY};
pub use gantry_storage::{Database, KeyValueStore, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
