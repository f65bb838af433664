//! Shell coordinator
//!
//! Owns storage and the session bridge, and runs the bootstrap sequence:
//! read the persisted token, build the runtime flags, mount and start the
//! UI runtime, then leave the bridge attached for the life of the page.

use std::sync::Arc;
use url::Url;

use gantry_runtime::{
    Capabilities, Flags, Host, RuntimeError, RuntimeHandle, UiRuntime, ROOT_NODE_ID,
};
use gantry_session::{SessionBridge, ACCESS_TOKEN_KEY};
use gantry_storage::Database;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Shell {
    config: Config,
    db: Database,
    session: SessionBridge,
}

impl Shell {
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        let session = SessionBridge::new(Arc::new(db.clone()));

        Ok(Self {
            config,
            db,
            session,
        })
    }

    /// The bootstrap read: persisted token plus, for runtimes that take
    /// one, the API base URL.
    ///
    /// A missing token is the anonymous state, not a failure, and an
    /// unreadable store degrades the same way.
    pub fn initial_flags(&self, capabilities: Capabilities) -> Result<Flags> {
        let token = match self.db.get_setting(ACCESS_TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read persisted token; starting anonymous");
                None
            }
        };

        let base_url = if capabilities.base_url {
            let url = Url::parse(&self.config.api_base_url)
                .map_err(|e| CoreError::Config(format!("Invalid API base URL: {e}")))?;
            Some(url)
        } else {
            None
        };

        Ok(Flags { token, base_url })
    }

    /// Run the startup sequence once.
    ///
    /// Locates the mount node (absence is fatal), starts the runtime with
    /// the flags, seeds the bridge with the same token the flags carried,
    /// and attaches it to the instance's ports.
    pub fn launch(&self, host: &dyn Host, runtime: &dyn UiRuntime) -> Result<RuntimeHandle> {
        let capabilities = runtime.capabilities();
        let flags = self.initial_flags(capabilities)?;

        let node = host
            .find_node(ROOT_NODE_ID)
            .ok_or_else(|| RuntimeError::MountPointMissing(ROOT_NODE_ID.to_string()))?;

        self.session.restore(flags.token.clone());
        let handle = runtime.init(node, flags)?;
        self.session.attach(handle.ports(), capabilities);

        tracing::info!(
            authenticated = self.session.state().is_authenticated(),
            "Shell launched"
        );

        Ok(handle)
    }

    pub fn session(&self) -> &SessionBridge {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for Shell {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            session: self.session.clone(),
        }
    }
}

// Implement std::io::Error conversion for fs operations
impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_BASE_URL;
    use gantry_runtime::{HeadlessHost, HeadlessRuntime};
    use gantry_session::SessionEvent;
    use std::path::PathBuf;

    fn test_config() -> Config {
        Config {
            database_path: PathBuf::from(":memory:"),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    #[test]
    fn test_bootstrap_with_empty_storage() {
        let shell = Shell::new(test_config()).unwrap();

        let flags = shell.initial_flags(Capabilities::full()).unwrap();
        assert_eq!(flags.token, None);
        assert_eq!(
            flags.base_url.unwrap().as_str(),
            "http://localhost:3001/"
        );
    }

    #[test]
    fn test_token_round_trip() {
        let shell = Shell::new(test_config()).unwrap();

        shell
            .session()
            .apply(SessionEvent::LoggedIn("abc123".to_string()));

        let flags = shell.initial_flags(Capabilities::full()).unwrap();
        assert_eq!(flags.token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_base_url_capability_gating() {
        let shell = Shell::new(test_config()).unwrap();

        let flags = shell
            .initial_flags(Capabilities {
                base_url: false,
                logout: true,
            })
            .unwrap();
        assert_eq!(flags.base_url, None);
    }

    #[test]
    fn test_missing_mount_point_is_fatal() {
        let shell = Shell::new(test_config()).unwrap();
        let host = HeadlessHost::new();
        let runtime = HeadlessRuntime::new();

        let result = shell.launch(&host, &runtime);
        assert!(matches!(
            result,
            Err(CoreError::Runtime(RuntimeError::MountPointMissing(_)))
        ));
    }

    #[test]
    fn test_launch_end_to_end() {
        let shell = Shell::new(test_config()).unwrap();
        let host = HeadlessHost::with_root();
        let runtime = HeadlessRuntime::new();

        let handle = shell.launch(&host, &runtime).unwrap();
        assert_eq!(runtime.started_with().unwrap().token, None);
        assert!(!shell.session().state().is_authenticated());

        handle.ports().login.send("abc123".to_string());
        assert_eq!(
            shell.database().get_setting(ACCESS_TOKEN_KEY).unwrap().as_deref(),
            Some("abc123")
        );
        assert_eq!(
            runtime.last_session_change(),
            Some(Some("abc123".to_string()))
        );

        handle.ports().logout.send(());
        assert_eq!(shell.database().get_setting(ACCESS_TOKEN_KEY).unwrap(), None);
        assert_eq!(runtime.last_session_change(), Some(None));
    }

    #[test]
    fn test_launch_restores_persisted_session() {
        let shell = Shell::new(test_config()).unwrap();
        shell
            .session()
            .apply(SessionEvent::LoggedIn("persisted".to_string()));

        let host = HeadlessHost::with_root();
        let runtime = HeadlessRuntime::new();
        let _handle = shell.launch(&host, &runtime).unwrap();

        assert_eq!(
            runtime.started_with().unwrap().token.as_deref(),
            Some("persisted")
        );
        assert_eq!(shell.session().state().token(), Some("persisted"));
    }
}
