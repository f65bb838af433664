//! The UI runtime contract

use crate::flags::{Capabilities, Flags, Token};
use crate::host::MountNode;
use crate::port::Port;
use crate::Result;

/// The named signals exchanged with a running UI instance.
///
/// `login` and `logout` flow out of the UI toward the shell, zero or more
/// times for the life of the page; `session_changed` flows back in,
/// carrying the new token or `None`.
#[derive(Clone, Default)]
pub struct Ports {
    pub login: Port<Token>,
    pub logout: Port<()>,
    pub session_changed: Port<Option<Token>>,
}

impl Ports {
    pub fn new() -> Self {
        Self {
            login: Port::new(),
            logout: Port::new(),
            session_changed: Port::new(),
        }
    }
}

/// A running UI instance
pub struct RuntimeHandle {
    ports: Ports,
}

impl RuntimeHandle {
    pub fn new(ports: Ports) -> Self {
        Self { ports }
    }

    pub fn ports(&self) -> &Ports {
        &self.ports
    }
}

/// An externally supplied UI runtime.
///
/// The shell treats it as a black box: flags go in exactly once at
/// startup, named signals flow through the handle's ports afterwards.
pub trait UiRuntime {
    /// Which flags and signals this runtime build wires up
    fn capabilities(&self) -> Capabilities;

    /// Start the runtime in the given host node
    fn init(&self, node: MountNode, flags: Flags) -> Result<RuntimeHandle>;
}
