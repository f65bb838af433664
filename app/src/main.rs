//! Gantry shell binary
//!
//! Boots the shell against the headless runtime and drives the UI's
//! outbound ports from stdin, exercising the session bridge end to end
//! without a real UI build.

mod repl;

use gantry_core::{Config, HeadlessHost, HeadlessRuntime, Shell};

fn main() -> anyhow::Result<()> {
    gantry_core::init_logging();

    let config = Config::from_env();
    let shell = Shell::new(config)?;

    let host = HeadlessHost::with_root();
    let runtime = HeadlessRuntime::new();
    let handle = shell.launch(&host, &runtime)?;

    tracing::info!("Gantry shell started");

    repl::drive(&shell, &handle)
}
