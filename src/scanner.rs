/*!
 * Listing scanning: reads listing lines and turns them into records
 */

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::{Arc, Mutex, PoisonError};

use indicatif::ProgressBar;
use log::{debug, info, warn};
use num_bigint::BigUint;
use rayon::prelude::*;

use crate::config::Config;
use crate::error::{ParseResultExt, Result};
use crate::parser::{parse_line, ParseErrorKind, ParseResult};
use crate::types::{FileCategory, FileRecord};

/// Scanner statistics
#[derive(Debug, Clone, Default)]
pub struct ScannerStatistics {
    /// Number of lines read, blank ones included
    pub lines_read: usize,
    /// Number of whitespace-only lines
    pub blank_lines: usize,
    /// Number of records produced
    pub records: usize,
    /// Number of directory records
    pub directories: usize,
    /// Regular-file records per category
    pub categories: BTreeMap<FileCategory, usize>,
    /// Skipped lines per error kind
    pub errors: BTreeMap<ParseErrorKind, usize>,
    /// Sum of all record sizes
    pub total_size: BigUint,
}

impl ScannerStatistics {
    /// Number of lines that failed to parse
    pub fn lines_skipped(&self) -> usize {
        self.errors.values().sum()
    }

    fn record(&mut self, record: &FileRecord) {
        self.records += 1;
        self.total_size += &record.size;
        if record.is_directory() {
            self.directories += 1;
        } else {
            let category = record.file_type.unwrap_or(FileCategory::Unknown);
            *self.categories.entry(category).or_default() += 1;
        }
    }
}

/// A record together with the listing line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based line number
    pub line: usize,
    /// Parsed record
    pub record: FileRecord,
}

/// Scanner for listing contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Scanner statistics
    statistics: Arc<Mutex<ScannerStatistics>>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            statistics: Arc::new(Mutex::new(ScannerStatistics::default())),
        }
    }

    /// Get scanner statistics
    pub fn get_statistics(&self) -> ScannerStatistics {
        self.statistics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Read the configured listing (file or stdin) and parse it
    pub fn scan(&self) -> Result<Vec<ParsedLine>> {
        info!("Scanning listing {}", self.config.listing_name());

        match &self.config.listing_path {
            Some(path) => self.scan_reader(BufReader::new(File::open(path)?)),
            None => self.scan_reader(io::stdin().lock()),
        }
    }

    /// Parse every line from a reader.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a single
    /// badly encoded filename does not cost the rest of the listing.
    pub fn scan_reader<R: BufRead>(&self, mut reader: R) -> Result<Vec<ParsedLine>> {
        let mut lines = Vec::new();
        let mut buffer = Vec::new();

        while reader.read_until(b'\n', &mut buffer)? > 0 {
            let line = buffer.strip_suffix(b"\n").unwrap_or(&buffer[..]);
            let line = line.strip_suffix(b"\r").unwrap_or(line);

            let decoded = String::from_utf8_lossy(line);
            if let Cow::Owned(_) = decoded {
                warn!("Line {}: replaced invalid UTF-8", lines.len() + 1);
            }
            lines.push(decoded.into_owned());
            buffer.clear();
        }

        self.scan_lines(&lines)
    }

    /// Parse listing lines in parallel, keeping their order.
    ///
    /// Blank lines are skipped. Lines that fail to parse are logged and
    /// skipped, unless the configuration is strict, in which case the first
    /// failing line is returned as an error.
    pub fn scan_lines(&self, lines: &[String]) -> Result<Vec<ParsedLine>> {
        self.progress.set_length(lines.len() as u64);

        let reference = self.config.reference;
        let outcomes: Vec<(usize, Option<ParseResult<FileRecord>>)> = lines
            .par_iter()
            .enumerate()
            .map(|(index, line)| {
                self.progress.inc(1);
                let outcome = (!line.trim().is_empty()).then(|| parse_line(line, reference));
                (index + 1, outcome)
            })
            .collect();

        let mut statistics = self
            .statistics
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        statistics.lines_read += lines.len();

        let mut parsed = Vec::with_capacity(outcomes.len());
        for (line, outcome) in outcomes {
            match outcome {
                None => statistics.blank_lines += 1,
                Some(Ok(record)) => {
                    debug!("Line {}: {} ({})", line, record.path, record.kind);
                    statistics.record(&record);
                    parsed.push(ParsedLine { line, record });
                }
                Some(Err(err)) => {
                    *statistics.errors.entry(err.kind()).or_default() += 1;
                    if self.config.strict {
                        return Err(err).at_line(line);
                    }
                    warn!("Skipping line {}: {}", line, err);
                }
            }
        }

        info!(
            "Parsed {} records, skipped {} lines",
            statistics.records,
            statistics.lines_skipped()
        );

        Ok(parsed)
    }
}
