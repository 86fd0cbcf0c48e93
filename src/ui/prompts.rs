//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message. The reader and writer are injected so the
//! confirmation logic is testable without a terminal.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Whether an answer confirms: exactly `y`, any case, surrounding whitespace
/// ignored.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Ask a yes/no question on `output` and read one line from `input`.
///
/// Only `y` confirms; anything else, including end of input, declines.
pub fn confirm_with<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool, PromptError> {
    write!(output, "{message} [y/N]: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

/// Prompt for confirmation on the terminal.
///
/// Returns `Err(PromptError::NotInteractive)` if not in interactive mode.
pub fn confirm(message: &str, interactive: bool) -> Result<bool, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();
    confirm_with(message, &mut input, &mut io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(text: &str) -> (bool, String) {
        let mut input = text.as_bytes();
        let mut output = Vec::new();
        let confirmed = confirm_with("Delete?", &mut input, &mut output).unwrap();
        (confirmed, String::from_utf8(output).unwrap())
    }

    #[test]
    fn only_y_confirms() {
        assert!(answer("y\n").0);
        assert!(answer("  Y  \n").0);
        assert!(!answer("yes\n").0);
        assert!(!answer("n\n").0);
        assert!(!answer("\n").0);
        assert!(!answer("").0);
    }

    #[test]
    fn writes_prompt() {
        assert_eq!(answer("n\n").1, "Delete? [y/N]: ");
    }

    #[test]
    fn non_interactive_refuses() {
        assert!(matches!(
            confirm("Delete?", false),
            Err(PromptError::NotInteractive)
        ));
    }
}
