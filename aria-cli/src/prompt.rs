//! User prompts
//!
//! Confirmation prompts for destructive actions and the second-factor code
//! prompt. Behind a trait so the action handlers can be tested without a
//! terminal; a declined prompt is a no-op, never an error.

use anyhow::bail;
use std::io::{self, BufRead, Write};

/// Asks the user to confirm a destructive action
pub trait Confirm {
    /// Returns true if the user accepted the prompt
    fn confirm(&self, prompt: &str) -> bool;
}

/// Stdin-backed prompt used by the real CLI
pub struct StdinPrompt {
    /// When set (`--yes`), every prompt is accepted without asking
    pub assume_yes: bool,
}

impl Confirm for StdinPrompt {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{} [y/N]: ", prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }

        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Reads a 6-digit verification code from stdin, re-prompting on bad input
pub fn read_verification_code() -> anyhow::Result<String> {
    read_code_from(&mut io::stdin().lock())
}

fn read_code_from(input: &mut impl BufRead) -> anyhow::Result<String> {
    loop {
        print!("Enter the 6-digit verification code: ");
        io::stdout().flush()?;

        let mut line = String::new();
        // A zero-byte read means the input is closed; re-prompting would
        // loop forever.
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before a verification code was entered");
        }
        let code = line.trim();

        if code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()) {
            return Ok(code.to_string());
        }

        println!("Please enter a valid 6-digit verification code");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_assume_yes_skips_prompt() {
        let prompt = StdinPrompt { assume_yes: true };
        assert!(prompt.confirm("Cancel this job?"));
    }

    #[test]
    fn test_code_accepts_six_digits() {
        let mut input = Cursor::new("123456\n");
        assert_eq!(read_code_from(&mut input).unwrap(), "123456");
    }

    #[test]
    fn test_code_reprompts_until_valid() {
        let mut input = Cursor::new("12ab\n1234567\n654321\n");
        assert_eq!(read_code_from(&mut input).unwrap(), "654321");
    }

    #[test]
    fn test_code_errors_on_closed_input() {
        let mut input = Cursor::new("");
        assert!(read_code_from(&mut input).is_err());
    }

    #[test]
    fn test_code_errors_when_input_ends_after_bad_line() {
        let mut input = Cursor::new("not-a-code\n");
        assert!(read_code_from(&mut input).is_err());
    }
}
