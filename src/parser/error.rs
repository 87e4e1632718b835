//! Error types for the listing line parser

use strum::{Display, EnumDiscriminants, EnumIter};
use thiserror::Error;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while parsing a listing line.
///
/// Every variant is a per-line failure: no partial record is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(
    name(ParseErrorKind),
    derive(Display, EnumIter, Hash, PartialOrd, Ord)
)]
pub enum ParseError {
    /// Not enough whitespace-delimited fields
    #[error("Malformed line: expected at least {expected} fields, found {found}")]
    MalformedLine { expected: usize, found: usize },

    /// Permission token is not exactly 10 characters
    #[error("Malformed permission field '{token}': expected 10 characters, found {length}")]
    MalformedPermissionField { token: String, length: usize },

    /// Month token is not a recognized English abbreviation
    #[error("Unknown month '{token}'")]
    UnknownMonth { token: String },

    /// Day, time or year token could not be read
    #[error("Unparseable {field} '{token}'")]
    UnparseableDate { field: &'static str, token: String },

    /// Date components do not form a real calendar date
    #[error("Invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },

    /// Size token is not a non-negative integer
    #[error("Invalid size '{token}'")]
    InvalidSize { token: String },
}

impl ParseError {
    /// Kind of this error, without its payload
    pub fn kind(&self) -> ParseErrorKind {
        ParseErrorKind::from(self)
    }
}
