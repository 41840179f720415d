//! Re-prompting helpers.
//!
//! Each helper loops until the user gives an acceptable answer. Invalid input
//! never escapes as an error; only console failures do.

use super::Console;
use std::io;
use tracing::warn;

/// Print `prompt` and return the next line.
pub fn prompt_line<C: Console + ?Sized>(console: &mut C, prompt: &str) -> io::Result<String> {
    console.write(prompt)?;
    console.read_line()
}

/// Ask a yes/no question until the answer is `y`, `yes`, `n` or `no` (any case).
pub fn ask_yes_no<C: Console + ?Sized>(console: &mut C, question: &str) -> io::Result<bool> {
    loop {
        let answer = prompt_line(console, question)?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            other => {
                warn!(answer = %other, "Rejected yes/no answer");
                console.write_line("Please answer yes or no.")?;
            }
        }
    }
}

/// Ask for an integer until one in `min..=max` is entered.
pub fn prompt_number_in_range<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    min: u32,
    max: u32,
) -> io::Result<u32> {
    loop {
        let answer = prompt_line(console, prompt)?;
        match answer.trim().parse::<u32>() {
            Ok(n) if (min..=max).contains(&n) => return Ok(n),
            _ => {
                warn!(answer = %answer, "Rejected menu selection");
                console.write_line("Sorry, that is not a valid option. Please try again.")?;
            }
        }
    }
}
