//! Gantry Session Bridge
//!
//! Keeps the auth token consistent between durable storage and the running
//! UI: login/logout signals from the UI mutate storage first, then echo a
//! normalized session-changed signal back. The bridge is the only writer
//! of the token key and the only source of that signal, so the two views
//! converge after every event. It stores and forwards an opaque string -
//! no validation, no expiry, no network.

mod bridge;
mod event;

pub use bridge::SessionBridge;
pub use event::{SessionEvent, SessionState};

/// Storage key for the persisted session token.
///
/// The key name predates this shell; existing installs already hold their
/// token under it.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
