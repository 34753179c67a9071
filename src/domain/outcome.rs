//! Uniform outcome of every note operation

use std::fmt;

/// Discriminant of a [`NoteResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// Operation succeeded
    Ok,
    /// The requested note does not exist
    NotFound,
    /// Malformed arguments, usage violations or conflicting titles
    InvalidInput,
    /// Unexpected internal failure
    Error,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultKind::Ok => "ok",
            ResultKind::NotFound => "not found",
            ResultKind::InvalidInput => "invalid input",
            ResultKind::Error => "error",
        };
        f.write_str(name)
    }
}

/// Kind plus an optional human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteResult {
    kind: ResultKind,
    message: Option<String>,
}

impl NoteResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self::with_message(ResultKind::Ok, message)
    }

    /// Success with nothing to show
    pub fn ok_empty() -> Self {
        NoteResult {
            kind: ResultKind::Ok,
            message: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(ResultKind::NotFound, message)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::with_message(ResultKind::InvalidInput, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_message(ResultKind::Error, message)
    }

    fn with_message(kind: ResultKind, message: impl Into<String>) -> Self {
        NoteResult {
            kind,
            message: Some(message.into()),
        }
    }

    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_ok(&self) -> bool {
        self.kind == ResultKind::Ok
    }
}
