//! Line-oriented console I/O.
//!
//! The menu talks to the user only through the [`Console`] trait: read a line,
//! write text. [`TerminalConsole`] binds it to any `BufRead`/`Write` pair, which
//! is stdin/stdout in the binary and in-memory buffers in tests.

mod prompt;
mod terminal;

pub use prompt::{ask_yes_no, prompt_line, prompt_number_in_range};
pub use terminal::TerminalConsole;

use std::io;

/// Minimal console the interactive session needs.
pub trait Console {
    /// Read one line of input without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns `io::ErrorKind::UnexpectedEof` once input is closed.
    fn read_line(&mut self) -> io::Result<String>;

    /// Write `text` as-is and flush, for prompts that keep the cursor on the line.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Write `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }
}
