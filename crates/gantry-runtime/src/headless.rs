//! Headless host and runtime for development and tests.
//!
//! Stands in for a real UI build without a window system: the host holds a
//! plain set of node ids, the runtime records the flags it was started
//! with and the last session payload it observed.

use parking_lot::{Mutex, RwLock};
use std::collections::HashSet;
use std::sync::Arc;

use crate::flags::{Capabilities, Flags, Token};
use crate::host::{Host, MountNode, ROOT_NODE_ID};
use crate::runtime::{Ports, RuntimeHandle, UiRuntime};
use crate::Result;

/// In-memory host with a configurable set of mount nodes
#[derive(Clone)]
pub struct HeadlessHost {
    nodes: Arc<RwLock<HashSet<String>>>,
}

impl HeadlessHost {
    /// An empty host with no mount nodes
    pub fn new() -> Self {
        Self {
            nodes: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// A host carrying the shell's root node
    pub fn with_root() -> Self {
        let host = Self::new();
        host.add_node(ROOT_NODE_ID);
        host
    }

    pub fn add_node(&self, id: &str) {
        self.nodes.write().insert(id.to_string());
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::with_root()
    }
}

impl Host for HeadlessHost {
    fn find_node(&self, id: &str) -> Option<MountNode> {
        self.nodes.read().contains(id).then(|| MountNode::new(id))
    }
}

/// Headless UI runtime: logs its lifecycle and records what it saw
#[derive(Clone)]
pub struct HeadlessRuntime {
    capabilities: Capabilities,
    started_with: Arc<Mutex<Option<Flags>>>,
    last_session: Arc<Mutex<Option<Option<Token>>>>,
}

impl HeadlessRuntime {
    pub fn new() -> Self {
        Self::with_capabilities(Capabilities::full())
    }

    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            started_with: Arc::new(Mutex::new(None)),
            last_session: Arc::new(Mutex::new(None)),
        }
    }

    /// Flags the runtime was initialized with, if it has started
    pub fn started_with(&self) -> Option<Flags> {
        self.started_with.lock().clone()
    }

    /// Payload of the most recent session-changed signal
    pub fn last_session_change(&self) -> Option<Option<Token>> {
        self.last_session.lock().clone()
    }
}

impl Default for HeadlessRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRuntime for HeadlessRuntime {
    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn init(&self, node: MountNode, flags: Flags) -> Result<RuntimeHandle> {
        tracing::info!(
            node = %node.id(),
            authenticated = flags.token.is_some(),
            base_url = ?flags.base_url,
            "Headless runtime started"
        );

        *self.started_with.lock() = Some(flags);

        let ports = Ports::new();
        let last_session = Arc::clone(&self.last_session);
        ports.session_changed.subscribe(move |token| {
            tracing::info!(authenticated = token.is_some(), "Session changed");
            *last_session.lock() = Some(token.clone());
        });

        Ok(RuntimeHandle::new(ports))
    }
}
