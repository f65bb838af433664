//! Gantry UI Runtime Boundary
//!
//! The UI runtime is an externally supplied black box: it takes a one-shot
//! `Flags` payload at startup and exchanges named signals with the shell
//! through typed ports afterwards. This crate owns that boundary - the
//! port channels, the mount-point lookup, and the `UiRuntime` contract -
//! plus a headless implementation for development and tests.

mod error;
mod flags;
mod headless;
mod host;
mod port;
mod runtime;

pub use error::RuntimeError;
pub use flags::{Capabilities, Flags, Token};
pub use headless::{HeadlessHost, HeadlessRuntime};
pub use host::{Host, MountNode, ROOT_NODE_ID};
pub use port::Port;
pub use runtime::{Ports, RuntimeHandle, UiRuntime};

pub type Result<T> = std::result::Result<T, RuntimeError>;
