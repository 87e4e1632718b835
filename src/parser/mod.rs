//! Listing line parser
//!
//! Turns one line of `ls -l` output into a [`FileRecord`]. Fields are found
//! by position after splitting on whitespace:
//!
//! ```text
//! -r-xr-xr-x  2 root  wheel  1 Jun  2 22:52 /home/example
//! 0           1 2     3      4 5   6 7     8...
//! ```
//!
//! The listing format has no quoting, so every token from the path column
//! onward is joined back with single spaces to rebuild paths containing
//! whitespace.

mod category;
mod date;
mod error;
mod permissions;

pub use category::{category_for_extension, classify, extension};
pub use date::{parse_month, resolve_timestamp};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use permissions::{decode_permissions, Permissions, PERMISSION_FIELD_LEN};

use chrono::NaiveDateTime;
use num_bigint::BigUint;

use crate::types::FileRecord;

const PERMISSIONS_COLUMN: usize = 0;
const OWNER_COLUMN: usize = 2;
const GROUP_COLUMN: usize = 3;
const SIZE_COLUMN: usize = 4;
const MONTH_COLUMN: usize = 5;
const DAY_COLUMN: usize = 6;
const TIME_OR_YEAR_COLUMN: usize = 7;
const PATH_COLUMN: usize = 8;

/// Minimum number of fields a listing line must carry
pub const MIN_FIELDS: usize = PATH_COLUMN;

/// Split a line on runs of whitespace, rejecting lines that are too short
pub fn tokenize(line: &str) -> ParseResult<Vec<&str>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_FIELDS {
        return Err(ParseError::MalformedLine {
            expected: MIN_FIELDS,
            found: tokens.len(),
        });
    }
    Ok(tokens)
}

/// Join the path tokens back together with single spaces
pub fn join_path(tokens: &[&str]) -> String {
    tokens.join(" ")
}

/// Filename of a path: everything after the last `/`, or the whole path
pub fn filename(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

/// Parse a size column into an unbounded byte count
pub fn parse_size(token: &str) -> ParseResult<BigUint> {
    let invalid = || ParseError::InvalidSize {
        token: token.to_string(),
    };

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    BigUint::parse_bytes(token.as_bytes(), 10).ok_or_else(invalid)
}

/// Parse one long-format listing line.
///
/// `reference` stands in for "now": its year is used for entries whose
/// date column shows a time of day instead of a year.
pub fn parse_line(line: &str, reference: NaiveDateTime) -> ParseResult<FileRecord> {
    let tokens = tokenize(line)?;

    let permissions = decode_permissions(tokens[PERMISSIONS_COLUMN])?;
    let size = parse_size(tokens[SIZE_COLUMN])?;
    let last_modified = resolve_timestamp(
        tokens[MONTH_COLUMN],
        tokens[DAY_COLUMN],
        tokens[TIME_OR_YEAR_COLUMN],
        reference,
    )?;

    let path = join_path(&tokens[PATH_COLUMN..]);
    let filename = filename(&path).to_string();
    let file_type = classify(&filename, permissions.kind);

    Ok(FileRecord {
        owner: tokens[OWNER_COLUMN].to_string(),
        group: tokens[GROUP_COLUMN].to_string(),
        size,
        last_modified,
        path,
        filename,
        file_type,
        kind: permissions.kind,
        user_permission: permissions.user,
        group_permission: permissions.group,
        others_permission: permissions.others,
    })
}
