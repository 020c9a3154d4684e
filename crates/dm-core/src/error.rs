use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct DialogueError {
    pub code: String,
    pub message: String,
    /// Zero-based script row the error points at, when there is one.
    pub row: Option<usize>,
}

impl DialogueError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            row: None,
        }
    }

    pub fn with_row(code: impl Into<String>, message: impl Into<String>, row: usize) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            row: Some(row),
        }
    }
}
