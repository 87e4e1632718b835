/*!
 * Core types and data structures for lsindex
 */

use std::fmt;

use chrono::{Datelike, NaiveDateTime};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumProperty};

/// Read/write/execute flags for one permission class (user, group or others)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionTriple {
    /// Read permission
    pub read: bool,
    /// Write permission
    pub write: bool,
    /// Execute permission
    pub execute: bool,
}

impl PermissionTriple {
    /// Create a permission triple from its three flags
    pub const fn new(read: bool, write: bool, execute: bool) -> Self {
        Self {
            read,
            write,
            execute,
        }
    }
}

impl fmt::Display for PermissionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            flag(self.read, 'r'),
            flag(self.write, 'w'),
            flag(self.execute, 'x')
        )
    }
}

/// Kind of entry described by a listing line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    /// Directory (`d` marker)
    Directory,
    /// Anything else
    RegularFile,
}

impl EntryKind {
    /// Marker character used in the first column of the permission field
    pub fn marker(&self) -> char {
        match self {
            EntryKind::Directory => 'd',
            EntryKind::RegularFile => '-',
        }
    }
}

/// Content class of a regular file, derived from its extension
///
/// Variants are listed in lookup order: when an extension appears under
/// more than one category, the first one wins.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    Display,
    EnumProperty,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum FileCategory {
    #[strum(props(extensions = "jpg,png,bmp"))]
    Pictures,

    #[strum(props(extensions = "mov,m4v,mkv,avi"))]
    Movies,

    #[strum(props(extensions = "txt,log,xml,json,html"))]
    Text,

    #[strum(props(extensions = "c,java,py"))]
    Code,

    #[strum(props(extensions = "mp3,m4a"))]
    Music,

    #[strum(props(extensions = "doc,docx,pdf,xls,xlsx,ppt,pptx,pages,numbers"))]
    Documents,

    #[strum(props(extensions = "zip,tar,gz,7z"))]
    Archives,

    Unknown,
}

impl FileCategory {
    /// Lower-case extensions belonging to this category
    pub fn extensions(&self) -> impl Iterator<Item = &'static str> {
        self.get_str("extensions")
            .unwrap_or_default()
            .split(',')
            .filter(|ext| !ext.is_empty())
    }
}

/// Metadata recovered from one line of a long-format listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Owner name, as listed
    pub owner: String,
    /// Group name, as listed
    pub group: String,
    /// Size in bytes
    pub size: BigUint,
    /// Last modification time (seconds are always zero)
    pub last_modified: NaiveDateTime,
    /// Full path, including any embedded spaces
    pub path: String,
    /// Final component of the path
    pub filename: String,
    /// Content category; `None` for directories
    pub file_type: Option<FileCategory>,
    /// Directory or regular file
    pub kind: EntryKind,
    /// Owner permissions
    pub user_permission: PermissionTriple,
    /// Group permissions
    pub group_permission: PermissionTriple,
    /// Permissions for everyone else
    pub others_permission: PermissionTriple,
}

impl FileRecord {
    /// Whether this record describes a directory
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Format the record back into a long-format listing line.
    ///
    /// Like `ls -l`, the time of day is shown when the modification year
    /// matches `reference`, the year otherwise. The link count is always 1.
    /// Owner and group must not contain whitespace, and runs of spaces in the
    /// path collapse when the line is parsed again.
    pub fn to_listing_line(&self, reference: NaiveDateTime) -> String {
        let stamp = if self.last_modified.year() == reference.year() {
            self.last_modified.format("%b %e %H:%M")
        } else {
            self.last_modified.format("%b %e  %Y")
        };

        format!(
            "{}{}{}{} 1 {} {} {} {} {}",
            self.kind.marker(),
            self.user_permission,
            self.group_permission,
            self.others_permission,
            self.owner,
            self.group,
            self.size,
            stamp,
            self.path
        )
    }
}
