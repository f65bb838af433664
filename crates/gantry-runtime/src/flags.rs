//! Startup flags handed to the UI runtime

use serde::{Deserialize, Serialize};
use url::Url;

/// Opaque session token. The shell stores and forwards it without
/// interpreting its contents; durable storage is the source of truth.
pub type Token = String;

/// One-shot initialization payload for the UI runtime.
///
/// Constructed by the shell at startup, consumed once by the runtime's
/// initializer, never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flags {
    /// Persisted session token, if any
    pub token: Option<Token>,
    /// API base URL; only present for runtimes that declare the capability
    pub base_url: Option<Url>,
}

/// What a given runtime build actually wires up.
///
/// Some builds never emit `logout`, some take no base URL. One shell
/// serves them all by consulting these flags instead of shipping a
/// bootstrap variant per build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Runtime consumes a base URL flag
    pub base_url: bool,
    /// Runtime emits logout events
    pub logout: bool,
}

impl Capabilities {
    pub fn full() -> Self {
        Self {
            base_url: true,
            logout: true,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}
