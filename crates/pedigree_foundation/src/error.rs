//! Error types for the Pedigree system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only reading the input can fail. Malformed lines, context violations and
//! dangling references are ordinary parse outcomes, not errors.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for Pedigree operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .context.as_ref().map(|c| format!(" ({c})")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(source))
    }

    /// Creates an invalid UTF-8 error for the given (1-indexed) line.
    #[must_use]
    pub fn invalid_utf8(line: usize) -> Self {
        Self::new(ErrorKind::InvalidUtf8 { line })
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Returns true if this error originated from the underlying reader.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_) | ErrorKind::InvalidUtf8 { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The source could not be read.
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// The source is not valid UTF-8.
    #[error("invalid UTF-8 on line {line}")]
    InvalidUtf8 {
        /// Line number (1-indexed, 0 when unknown).
        line: usize,
    },

    /// A record snapshot could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file being read.
    pub source: Option<PathBuf>,
    /// Line number in source.
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source path.
    #[must_use]
    pub fn with_source(mut self, source: impl AsRef<Path>) -> Self {
        self.source = Some(source.as_ref().to_path_buf());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "at {}:{line}", source.display()),
            (Some(source), None) => write!(f, "at {}", source.display()),
            (None, Some(line)) => write!(f, "at line {line}"),
            (None, None) => Ok(()),
        }
    }
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, Error>;
