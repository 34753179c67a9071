//! Output formatting utilities

use crate::domain::{NoteResult, ResultKind};
use colored::Colorize;

/// Format a result for the terminal. Returns `None` when there is nothing
/// to print.
pub fn format_result(result: &NoteResult) -> Option<String> {
    let message = result.message().filter(|m| !m.trim().is_empty())?;

    let line = match result.kind() {
        ResultKind::Ok => message.green().to_string(),
        ResultKind::InvalidInput => format!("[Invalid] {}", message).yellow().to_string(),
        ResultKind::NotFound => format!("[Not found] {}", message).yellow().to_string(),
        ResultKind::Error => format!("[Error] {}", message).red().to_string(),
    };
    Some(line)
}
