//! Parse error types.

use nagare_ast::Span;
use thiserror::Error;

/// Errors produced while parsing Nagare source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error the parser recovered from by embedding a failure node
    /// in the tree.
    #[error("syntax error: {message} ({span})")]
    Syntax {
        /// Description of the failure.
        message: String,
        /// Source range the failure covers.
        span: Span,
    },

    /// A parser implementation failed outright and produced no tree.
    #[error("internal parser error: {0}")]
    Internal(String),
}

impl ParseError {
    /// Creates a new syntax error covering `span`.
    pub fn syntax_at(message: impl Into<String>, span: Span) -> Self {
        Self::Syntax {
            message: message.into(),
            span,
        }
    }

    /// Creates a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the human-readable message of this error.
    pub fn message(&self) -> &str {
        match self {
            ParseError::Syntax { message, .. } => message,
            ParseError::Internal(message) => message,
        }
    }
}
