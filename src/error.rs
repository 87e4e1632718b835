//! Global error handling for lsindex
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

use crate::parser::ParseError;

/// Global error type for lsindex operations
#[derive(Error, Debug)]
pub enum LsIndexError {
    /// A listing line could not be parsed
    #[error("Line {line}: {source}")]
    Parse {
        /// 1-based line number in the listing
        line: usize,
        source: ParseError,
    },

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON processing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for lsindex operations
pub type Result<T> = std::result::Result<T, LsIndexError>;

/// Creates an LsIndexError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::LsIndexError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for attaching a line number to parser results
pub trait ParseResultExt<T> {
    /// Turn a parse failure into an [`LsIndexError::Parse`] for `line`
    fn at_line(self, line: usize) -> Result<T>;
}

impl<T> ParseResultExt<T> for std::result::Result<T, ParseError> {
    fn at_line(self, line: usize) -> Result<T> {
        self.map_err(|source| LsIndexError::Parse { line, source })
    }
}

// Lets the binary keep an io::Result main
impl From<LsIndexError> for io::Error {
    fn from(err: LsIndexError) -> Self {
        match err {
            LsIndexError::Io(err) => err,
            LsIndexError::Parse { .. } => io::Error::new(io::ErrorKind::InvalidData, err.to_string()),
            LsIndexError::Config(_) | LsIndexError::InvalidArgument(_) => {
                io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
            }
            LsIndexError::Json(_) => io::Error::new(io::ErrorKind::Other, err.to_string()),
        }
    }
}
