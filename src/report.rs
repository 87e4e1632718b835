/*!
 * Reporting functionality for lsindex
 *
 * Provides functionality for generating formatted reports of scan results
 * using the tabled library for clean, consistent table rendering.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::scanner::ScannerStatistics;
use crate::utils::format_big_size;
use crate::writer::DIRECTORY_FILE_TYPE;

/// Summary of one listing run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Listing source
    pub listing: String,
    /// Output destination
    pub output_file: String,
    /// Time taken to parse and write
    pub duration: Duration,
    /// Number of documents written
    pub documents_written: usize,
    /// Scanner statistics
    pub statistics: ScannerStatistics,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for scan results
pub struct Reporter {
    format: ReportFormat,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Metric")]
    key: String,

    #[tabled(rename = "Value")]
    value: String,
}

impl Row {
    fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string based on scan statistics
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stderr, keeping stdout free for documents
    pub fn print_report(&self, report: &ScanReport) {
        eprintln!("\n{}", self.generate_report(report));
    }

    fn table(rows: Vec<Row>) -> String {
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        let stats = &report.statistics;

        Self::table(vec![
            Row::new("📄 Listing", &report.listing),
            Row::new("📂 Output File", &report.output_file),
            Row::new("⏱️ Process Time", format!("{:.4?}", report.duration)),
            Row::new("📝 Lines Read", stats.lines_read),
            Row::new("📦 Documents Written", report.documents_written),
            Row::new("⚠️ Lines Skipped", stats.lines_skipped()),
            Row::new("💾 Total Size", format_big_size(&stats.total_size)),
        ])
    }

    fn create_categories_table(&self, stats: &ScannerStatistics) -> String {
        let mut rows: Vec<Row> = stats
            .categories
            .iter()
            .map(|(category, count)| Row::new(category.to_string(), count))
            .collect();
        rows.push(Row::new(DIRECTORY_FILE_TYPE, stats.directories));

        Self::table(rows)
    }

    fn create_errors_table(&self, stats: &ScannerStatistics) -> String {
        let rows = stats
            .errors
            .iter()
            .map(|(kind, count)| Row::new(kind.to_string(), count))
            .collect();

        Self::table(rows)
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ScanReport) -> String {
        let mut sections = vec![
            format!(
                "📋  ENTRIES BY TYPE\n{}",
                self.create_categories_table(&report.statistics)
            ),
        ];

        if !report.statistics.errors.is_empty() {
            sections.push(format!(
                "🚫  SKIPPED LINES\n{}",
                self.create_errors_table(&report.statistics)
            ));
        }

        sections.push(format!(
            "✅  INDEXING COMPLETE\n{}",
            self.create_summary_table(report)
        ));

        sections.join("\n\n")
    }
}
