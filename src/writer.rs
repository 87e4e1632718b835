/*!
 * JSON document writer for lsindex
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};

use chrono::NaiveDateTime;
use log::info;
use serde::{Serialize, Serializer};
use serde_json::{json, Number, Value};

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::scanner::ParsedLine;
use crate::types::{EntryKind, FileCategory, FileRecord, PermissionTriple};

/// `fileType` value written for directories
pub const DIRECTORY_FILE_TYPE: &str = "DIRECTORY";

/// Indexable document for one listing entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDocument<'a> {
    pub owner: &'a str,
    pub group: &'a str,
    /// Exact byte count, written as a JSON number of any length
    pub size: Number,
    pub last_update: NaiveDateTime,
    pub path: &'a str,
    pub filename: &'a str,
    #[serde(serialize_with = "file_type_or_directory")]
    pub file_type: Option<FileCategory>,
    pub kind: EntryKind,
    pub user_permission: PermissionTriple,
    pub group_permission: PermissionTriple,
    pub others_permission: PermissionTriple,
}

impl<'a> IndexDocument<'a> {
    /// Build the document for a record
    pub fn from_record(record: &'a FileRecord) -> Result<Self> {
        Ok(Self {
            owner: &record.owner,
            group: &record.group,
            size: serde_json::from_str(&record.size.to_string())?,
            last_update: record.last_modified,
            path: &record.path,
            filename: &record.filename,
            file_type: record.file_type,
            kind: record.kind,
            user_permission: record.user_permission,
            group_permission: record.group_permission,
            others_permission: record.others_permission,
        })
    }
}

fn file_type_or_directory<S: Serializer>(
    file_type: &Option<FileCategory>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match file_type {
        Some(category) => category.serialize(serializer),
        None => serializer.serialize_str(DIRECTORY_FILE_TYPE),
    }
}

/// Writer for record documents
pub struct JsonWriter {
    /// Writer configuration
    config: Config,
}

impl JsonWriter {
    /// Create a new JSON writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write documents to the configured output (file or stdout)
    pub fn write(&self, records: &[ParsedLine]) -> Result<usize> {
        info!(
            "Writing {} documents to {}",
            records.len(),
            self.config.output_name()
        );

        match &self.config.output_file {
            Some(path) => self.write_to(BufWriter::new(File::create(path)?), records),
            None => self.write_to(io::stdout().lock(), records),
        }
    }

    /// Write documents to any sink, returning how many were written
    pub fn write_to<W: Write>(&self, mut out: W, records: &[ParsedLine]) -> Result<usize> {
        let action = self.bulk_action();

        for parsed in records {
            if let Some(action) = &action {
                serde_json::to_writer(&mut out, action)?;
                out.write_all(b"\n")?;
            }

            let document = IndexDocument::from_record(&parsed.record)?;
            serde_json::to_writer(&mut out, &document)?;
            out.write_all(b"\n")?;
        }

        out.flush()?;
        Ok(records.len())
    }

    /// Action line preceding each document in bulk output
    fn bulk_action(&self) -> Option<Value> {
        match self.config.format {
            OutputFormat::JsonLines => None,
            OutputFormat::Bulk => Some(json!({ "index": { "_index": self.config.index } })),
        }
    }
}
