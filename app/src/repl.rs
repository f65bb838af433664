//! Interactive driver standing in for the UI runtime's user events

use std::io::{self, BufRead, Write};

use gantry_core::{RuntimeHandle, Shell};

pub fn drive(shell: &Shell, handle: &RuntimeHandle) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("gantry shell - commands: login <token>, logout, state, quit");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("login") => match parts.next() {
                Some(token) => handle.ports().login.send(token.to_string()),
                None => println!("usage: login <token>"),
            },
            Some("logout") => handle.ports().logout.send(()),
            Some("state") => println!("{:?}", shell.session().state()),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
    }

    Ok(())
}
