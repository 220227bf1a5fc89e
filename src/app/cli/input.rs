//! Interactive fallback for required fields left off the command line.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;

/// Use `value` if given, otherwise ask on a terminal.
///
/// Returns `Ok(None)` when the prompt is interrupted. Without a terminal the
/// field stays empty and validation rejects it downstream.
pub fn require(value: Option<String>, label: &str) -> Result<Option<String>, AppError> {
    if let Some(value) = value {
        return Ok(Some(value));
    }
    if !std::io::stdin().is_terminal() {
        return Ok(Some(String::new()));
    }

    match Input::<String>::new().with_prompt(label).allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::PromptError(format!("Failed to read {}: {}", label, err))),
    }
}
