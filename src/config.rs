/*!
 * Configuration handling for lsindex
 */

use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;

/// Path value meaning stdin (for the listing) or stdout (for the output)
pub const STDIO_PATH: &str = "-";

/// Framing of the emitted documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per line
    #[default]
    JsonLines,
    /// Elasticsearch `_bulk` body: an index action line before each document
    Bulk,
}

/// Command-line arguments for lsindex
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "lsindex",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn UNIX long directory listings into file-metadata documents",
    long_about = "Parses the output of `ls -l` (one entry per line) into structured file-metadata records and writes them as JSON documents ready for indexing."
)]
pub struct Args {
    /// Listing file to read (`-` for stdin)
    #[clap(default_value = "listing.txt")]
    pub listing_path: String,

    /// Output file name (`-` for stdout)
    #[clap(default_value = "listing.ndjson")]
    pub output_file: String,

    /// Document framing
    #[clap(long, value_enum, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    /// Index name used in bulk action lines
    #[clap(long, default_value = "filesystem")]
    pub index: String,

    /// Date standing in for "today" when a listing shows a time instead of a year (YYYY-MM-DD)
    #[clap(long, value_parser = parse_reference_date)]
    pub reference_date: Option<NaiveDateTime>,

    /// Number of threads to use for parsing
    #[clap(long, default_value = "4")]
    pub threads: usize,

    /// Abort on the first line that cannot be parsed
    #[clap(long)]
    pub strict: bool,

    /// Hide the progress bar and the final report
    #[clap(long, short)]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Parse a `YYYY-MM-DD` reference date into midnight of that day
pub fn parse_reference_date(value: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Listing to read; `None` reads stdin
    pub listing_path: Option<PathBuf>,

    /// Output file; `None` writes stdout
    pub output_file: Option<PathBuf>,

    /// Document framing
    pub format: OutputFormat,

    /// Index name for bulk output
    pub index: String,

    /// Reference "now" for year resolution
    pub reference: NaiveDateTime,

    /// Number of threads to use for parsing
    pub num_threads: usize,

    /// Abort on the first malformed line
    pub strict: bool,

    /// Suppress progress and report
    pub quiet: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let stdio = |value: String| (value != STDIO_PATH).then(|| PathBuf::from(value));

        Self {
            listing_path: stdio(args.listing_path),
            output_file: stdio(args.output_file),
            format: args.format,
            index: args.index,
            reference: args
                .reference_date
                .unwrap_or_else(|| Local::now().naive_local()),
            num_threads: args.threads,
            strict: args.strict,
            quiet: args.quiet,
        }
    }

    /// Human-readable name of the listing source
    pub fn listing_name(&self) -> String {
        self.listing_path
            .as_ref()
            .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string())
    }

    /// Human-readable name of the output sink
    pub fn output_name(&self) -> String {
        self.output_file
            .as_ref()
            .map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.listing_path {
            ensure!(
                path.is_file(),
                Config,
                "Listing file not found: {}",
                path.display()
            );
        }

        // Check if output file directory exists
        if let Some(parent) = self.output_file.as_ref().and_then(|p| p.parent()) {
            ensure!(
                parent.as_os_str().is_empty() || parent.is_dir(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        ensure!(
            self.num_threads > 0,
            InvalidArgument,
            "thread count must be at least 1"
        );
        ensure!(
            !self.index.trim().is_empty(),
            InvalidArgument,
            "index name must not be empty"
        );

        Ok(())
    }
}
