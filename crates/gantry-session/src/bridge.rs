//! Session bridge
//!
//! Reacts to login/logout signals from the UI runtime. Storage is mutated
//! before the session-changed signal fires, so any observer of the signal
//! sees a storage state consistent with the event it just received.

use parking_lot::RwLock;
use std::sync::Arc;

use gantry_runtime::{Capabilities, Port, Ports, Token};
use gantry_storage::KeyValueStore;

use crate::event::{SessionEvent, SessionState};
use crate::ACCESS_TOKEN_KEY;

pub struct SessionBridge {
    /// Durable storage; single source of truth for the token
    store: Arc<dyn KeyValueStore>,
    /// In-memory state for the current page session
    state: Arc<RwLock<SessionState>>,
    /// Inbound signal to the UI runtime, registered by `attach`
    session_changed: Arc<RwLock<Option<Port<Option<Token>>>>>,
}

impl SessionBridge {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            state: Arc::new(RwLock::new(SessionState::Anonymous)),
            session_changed: Arc::new(RwLock::new(None)),
        }
    }

    /// Seed the state from whatever the bootstrapper read at startup.
    ///
    /// The bridge never re-derives the initial state itself; it only
    /// reacts to events arriving afterwards.
    pub fn restore(&self, token: Option<Token>) {
        *self.state.write() = SessionState::from_token(token);
    }

    /// Wire the bridge to a running UI instance.
    ///
    /// `login` is always subscribed; `logout` only when the runtime build
    /// declares it. A build without logout simply never fires the port,
    /// so the extra subscription would be a harmless no-op either way.
    pub fn attach(&self, ports: &Ports, capabilities: Capabilities) {
        *self.session_changed.write() = Some(ports.session_changed.clone());

        let bridge = self.clone();
        ports.login.subscribe(move |token| {
            bridge.apply(SessionEvent::LoggedIn(token.clone()));
        });

        if capabilities.logout {
            let bridge = self.clone();
            ports.logout.subscribe(move |_| {
                bridge.apply(SessionEvent::LoggedOut);
            });
        }
    }

    /// Process one session event: mutate storage, update state, emit.
    ///
    /// A storage failure does not block the event - the in-memory state
    /// still advances and the signal still fires - but the broken
    /// persistence guarantee is reported.
    pub fn apply(&self, event: SessionEvent) -> SessionState {
        let new_state = match event {
            SessionEvent::LoggedIn(token) => {
                if let Err(e) = self.store.set(ACCESS_TOKEN_KEY, &token) {
                    tracing::error!(error = %e, "Failed to persist session token");
                }
                SessionState::Authenticated(token)
            }
            SessionEvent::LoggedOut => {
                if let Err(e) = self.store.remove(ACCESS_TOKEN_KEY) {
                    tracing::error!(error = %e, "Failed to clear persisted session token");
                }
                SessionState::Anonymous
            }
        };

        *self.state.write() = new_state.clone();

        tracing::info!(
            authenticated = new_state.is_authenticated(),
            "Session event processed"
        );

        if let Some(port) = self.session_changed.read().as_ref() {
            port.send(new_state.token().map(str::to_string));
        }

        new_state
    }

    /// Current state snapshot
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }
}

impl Clone for SessionBridge {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            state: Arc::clone(&self.state),
            session_changed: Arc::clone(&self.session_changed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_storage::{Database, Result as StorageResult, StorageError};
    use parking_lot::Mutex;

    fn wired_bridge() -> (SessionBridge, Ports, Database) {
        let db = Database::open_in_memory().unwrap();
        let bridge = SessionBridge::new(Arc::new(db.clone()));
        let ports = Ports::new();
        bridge.attach(&ports, Capabilities::full());
        (bridge, ports, db)
    }

    fn record_session_changes(ports: &Ports) -> Arc<Mutex<Vec<Option<Token>>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            ports
                .session_changed
                .subscribe(move |token| seen.lock().push(token.clone()));
        }
        seen
    }

    #[test]
    fn test_login_persists_and_emits_token() {
        let (bridge, ports, db) = wired_bridge();
        let seen = record_session_changes(&ports);

        ports.login.send("abc123".to_string());

        assert_eq!(
            db.get_setting(ACCESS_TOKEN_KEY).unwrap().as_deref(),
            Some("abc123")
        );
        assert_eq!(*seen.lock(), vec![Some("abc123".to_string())]);
        assert_eq!(bridge.state().token(), Some("abc123"));
    }

    #[test]
    fn test_logout_clears_and_emits_none() {
        let (bridge, ports, db) = wired_bridge();
        let seen = record_session_changes(&ports);

        ports.login.send("abc123".to_string());
        ports.logout.send(());

        assert_eq!(db.get_setting(ACCESS_TOKEN_KEY).unwrap(), None);
        assert_eq!(
            *seen.lock(),
            vec![Some("abc123".to_string()), None]
        );
        assert_eq!(bridge.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_repeated_login_is_idempotent() {
        let (bridge, ports, db) = wired_bridge();
        let seen = record_session_changes(&ports);

        ports.login.send("abc123".to_string());
        ports.login.send("abc123".to_string());

        assert_eq!(
            db.get_setting(ACCESS_TOKEN_KEY).unwrap().as_deref(),
            Some("abc123")
        );
        assert_eq!(seen.lock().last().unwrap().as_deref(), Some("abc123"));
        assert_eq!(bridge.state().token(), Some("abc123"));
    }

    #[test]
    fn test_storage_mutates_before_emission() {
        let (_bridge, ports, db) = wired_bridge();

        // Observers of the signal must already see the mutated store
        let observed = Arc::new(Mutex::new(Vec::new()));
        {
            let observed = Arc::clone(&observed);
            let db = db.clone();
            ports.session_changed.subscribe(move |token| {
                let stored = db.get_setting(ACCESS_TOKEN_KEY).unwrap();
                observed.lock().push((token.clone(), stored));
            });
        }

        ports.login.send("tok".to_string());
        ports.logout.send(());

        assert_eq!(
            *observed.lock(),
            vec![
                (Some("tok".to_string()), Some("tok".to_string())),
                (None, None),
            ]
        );
    }

    #[test]
    fn test_restore_seeds_state_without_emitting() {
        let (bridge, ports, _db) = wired_bridge();
        let seen = record_session_changes(&ports);

        bridge.restore(Some("persisted".to_string()));

        assert_eq!(bridge.state().token(), Some("persisted"));
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_logout_leg_respects_capabilities() {
        let db = Database::open_in_memory().unwrap();
        let bridge = SessionBridge::new(Arc::new(db));
        let ports = Ports::new();

        bridge.attach(
            &ports,
            Capabilities {
                base_url: true,
                logout: false,
            },
        );

        assert_eq!(ports.login.subscriber_count(), 1);
        assert_eq!(ports.logout.subscriber_count(), 0);

        ports.login.send("abc123".to_string());
        ports.logout.send(());
        assert_eq!(bridge.state().token(), Some("abc123"));
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("storage disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("storage disabled".to_string()))
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("storage disabled".to_string()))
        }
    }

    #[test]
    fn test_storage_failure_is_not_fatal() {
        let bridge = SessionBridge::new(Arc::new(FailingStore));
        let ports = Ports::new();
        bridge.attach(&ports, Capabilities::full());
        let seen = record_session_changes(&ports);

        ports.login.send("abc123".to_string());
        assert_eq!(bridge.state().token(), Some("abc123"));

        ports.logout.send(());
        assert_eq!(bridge.state(), SessionState::Anonymous);

        assert_eq!(
            *seen.lock(),
            vec![Some("abc123".to_string()), None]
        );
    }
}
