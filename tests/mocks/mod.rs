//! Test doubles shared by the integration tests.

pub mod mock_contact_repository;

#[allow(unused_imports)]
pub use mock_contact_repository::{InjectedFailure, MockContactRepository};

use contacts_manager::TerminalConsole;
use std::io::Cursor;

/// Console fed from a fixed script, capturing everything written.
pub type ScriptedConsole = TerminalConsole<Cursor<Vec<u8>>, Vec<u8>>;

/// Build a console whose input is `lines`, one per line.
#[allow(dead_code)]
pub fn scripted(lines: &[&str]) -> ScriptedConsole {
    let mut input = lines.join("\n");
    input.push('\n');
    TerminalConsole::new(Cursor::new(input.into_bytes()), Vec::new())
}

/// Everything the session printed.
#[allow(dead_code)]
pub fn transcript(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}

/// Build a console whose input is the given raw bytes.
#[allow(dead_code)]
pub fn scripted_bytes(input: &[u8]) -> ScriptedConsole {
    TerminalConsole::new(Cursor::new(input.to_vec()), Vec::new())
}
