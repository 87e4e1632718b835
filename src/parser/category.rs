//! Extension-based content classification

use std::collections::HashMap;

use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use crate::types::{EntryKind, FileCategory};

/// Lower-case extension to category, built once from the category table
static EXTENSION_TABLE: Lazy<HashMap<&'static str, FileCategory>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for category in FileCategory::iter() {
        for extension in category.extensions() {
            table.entry(extension).or_insert(category);
        }
    }
    table
});

/// Extension of a filename: everything after the last `.`, or empty
pub fn extension(filename: &str) -> &str {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or_default()
}

/// Category for a regular file's extension, case-insensitively
pub fn category_for_extension(extension: &str) -> FileCategory {
    EXTENSION_TABLE
        .get(extension.to_lowercase().as_str())
        .copied()
        .unwrap_or(FileCategory::Unknown)
}

/// Classify an entry. Directories are never classified by extension.
pub fn classify(filename: &str, kind: EntryKind) -> Option<FileCategory> {
    match kind {
        EntryKind::Directory => None,
        EntryKind::RegularFile => Some(category_for_extension(extension(filename))),
    }
}
