//! Storage collaborator interface

use crate::database::Database;
use crate::Result;

/// Key/value storage for shell state such as the persisted session token.
///
/// Absence is `Ok(None)`, never an error, and values are opaque strings.
/// The session bridge is injected with this trait rather than a concrete
/// database so tests can substitute in-memory or failing doubles.
pub trait KeyValueStore: Send + Sync {
    /// Gets the value for the given key, or `None` if not present
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Sets the value for the given key
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the entry for the given key; a missing key is a no-op
    fn remove(&self, key: &str) -> Result<()>;
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_setting(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_setting(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.remove_setting(key)
    }
}
