//! Unified error handling for runlet.
//!
//! Every phase of the pipeline reports its own typed error; this module
//! folds them into one type carrying the source span (where one exists)
//! and the message, and renders the boundary format
//! `line:col-line:col > Kind: detail`.

#[cfg(test)]
mod tests;

use crate::lexer::token::Span;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RunletError {
    /// Scanner error (tokenization failed)
    ScanError { message: String, span: Span },

    /// Parser error (syntax error)
    SyntaxError { message: String, span: Span },

    /// Interpreter error (execution failed); carries no position
    RuntimeError { message: String },
}

impl RunletError {
    pub fn scan(message: impl Into<String>, span: Span) -> Self {
        RunletError::ScanError {
            message: message.into(),
            span,
        }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        RunletError::SyntaxError {
            message: message.into(),
            span,
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        RunletError::RuntimeError {
            message: message.into(),
        }
    }

    /// The error-kind label used in the rendered form.
    pub fn kind(&self) -> &'static str {
        match self {
            RunletError::ScanError { .. } => "Illegal Character(s)",
            RunletError::SyntaxError { .. } => "Invalid Syntax",
            RunletError::RuntimeError { .. } => "Runtime Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            RunletError::ScanError { message, .. } => message,
            RunletError::SyntaxError { message, .. } => message,
            RunletError::RuntimeError { message } => message,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            RunletError::ScanError { span, .. } => Some(*span),
            RunletError::SyntaxError { span, .. } => Some(*span),
            RunletError::RuntimeError { .. } => None,
        }
    }
}

impl fmt::Display for RunletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span() {
            Some(span) => write!(
                f,
                "{}:{}-{}:{} > {}: {}",
                span.start.line,
                span.start.column,
                span.end.line,
                span.end.column,
                self.kind(),
                self.message()
            ),
            None => write!(f, "{}: {}", self.kind(), self.message()),
        }
    }
}

impl std::error::Error for RunletError {}

impl From<crate::lexer::LexError> for RunletError {
    fn from(err: crate::lexer::LexError) -> Self {
        use crate::lexer::LexError;
        match err {
            LexError::UnexpectedCharacter { ch, span } => {
                RunletError::scan(format!("Unexpected character '{}'", ch), span)
            }
            LexError::UnterminatedString { span } => {
                RunletError::scan("Unterminated string literal", span)
            }
            LexError::InvalidNumber { message, span } => RunletError::scan(message, span),
        }
    }
}

impl From<crate::parser::ParseError> for RunletError {
    fn from(err: crate::parser::ParseError) -> Self {
        RunletError::syntax(err.message, err.span)
    }
}

impl From<crate::interpreter::RuntimeError> for RunletError {
    fn from(err: crate::interpreter::RuntimeError) -> Self {
        RunletError::runtime(err.to_string())
    }
}
