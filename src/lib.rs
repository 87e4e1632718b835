/*!
 * lsindex - Turn UNIX long directory listings into indexable documents
 *
 * This library parses lines of `ls -l` output into structured file-metadata
 * records and serializes them as JSON documents for a search index.
 */

pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;

#[cfg(test)]
mod tests;

// Re-export main components for easier access
pub use config::Config;
pub use error::{LsIndexError, Result};
pub use parser::{parse_line, ParseError, ParseErrorKind};
pub use report::{ReportFormat, Reporter, ScanReport};
pub use scanner::{ParsedLine, Scanner, ScannerStatistics};
pub use types::{EntryKind, FileCategory, FileRecord, PermissionTriple};
pub use utils::format_file_size;
pub use writer::{IndexDocument, JsonWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
