use std::fmt;

use thiserror::Error;

/// Errors produced when parsing path or operation-key text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error: {message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// An error for `input`, with the parser's report on the following lines.
    pub(crate) fn at(input: &str, detail: impl fmt::Display) -> Self {
        Self::new(format!("invalid input '{input}'\n{detail}"))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
