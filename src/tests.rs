/*!
 * Tests for lsindex scanning and writing
 */

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use indicatif::ProgressBar;
use num_bigint::BigUint;
use serde_json::Value;
use tempfile::tempdir;

use crate::config::{Config, OutputFormat};
use crate::error::LsIndexError;
use crate::parser::{ParseError, ParseErrorKind};
use crate::scanner::Scanner;
use crate::types::FileCategory;
use crate::writer::JsonWriter;

const LISTING: &str = "\
total 48
drwxr-xr-x   5 alice  staff    160 Mar  1 10:00 /Users/alice/Music
-rw-r--r--   1 alice  staff  51200 Feb 14  2021 /Users/alice/Music/Love Song.mp3
-rw-r--r--   1 alice  staff    812 Mar  1 10:02 /Users/alice/notes.TXT

-rwxr-x---   1 root   wheel  20480 Jan  9 08:30 /usr/local/bin/tool
-rw-r--r--   1 alice  staff   1024 Apr 31  2020 /Users/alice/broken.pdf
";

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap()
}

// Helper function to write a listing into a temporary directory
fn setup_listing(dir: &Path, contents: &str) -> io::Result<PathBuf> {
    let path = dir.join("listing.txt");
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

fn config(listing: PathBuf, output: PathBuf) -> Config {
    Config {
        listing_path: Some(listing),
        output_file: Some(output),
        format: OutputFormat::JsonLines,
        index: "filesystem".to_string(),
        reference: reference(),
        num_threads: 1,
        strict: false,
        quiet: true,
    }
}

fn read_documents(path: &Path) -> io::Result<Vec<Value>> {
    fs::read_to_string(path)?
        .lines()
        .map(|line| serde_json::from_str(line).map_err(io::Error::from))
        .collect()
}

// Test a typical listing end to end
#[test]
fn test_basic_listing() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let listing = setup_listing(temp_dir.path(), LISTING)?;
    let output_file = temp_dir.path().join("out.ndjson");

    let config = config(listing, output_file.clone());
    let scanner = Scanner::new(config.clone(), Arc::new(ProgressBar::hidden()));
    let writer = JsonWriter::new(config);

    let records = scanner.scan()?;
    let written = writer.write(&records)?;
    assert_eq!(written, 4);

    // Line numbers refer to the original listing
    let lines: Vec<usize> = records.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 3, 4, 6]);

    let stats = scanner.get_statistics();
    assert_eq!(stats.lines_read, 7);
    assert_eq!(stats.blank_lines, 1);
    assert_eq!(stats.records, 4);
    assert_eq!(stats.directories, 1);
    assert_eq!(stats.categories.get(&FileCategory::Music), Some(&1));
    assert_eq!(stats.categories.get(&FileCategory::Text), Some(&1));
    assert_eq!(stats.categories.get(&FileCategory::Unknown), Some(&1));
    assert_eq!(stats.errors.get(&ParseErrorKind::MalformedLine), Some(&1));
    assert_eq!(
        stats.errors.get(&ParseErrorKind::InvalidCalendarDate),
        Some(&1)
    );
    assert_eq!(stats.lines_skipped(), 2);
    assert_eq!(stats.total_size, BigUint::from(160u32 + 51200 + 812 + 20480));

    let documents = read_documents(&output_file)?;
    assert_eq!(documents.len(), 4);
    assert_eq!(documents[0]["fileType"], "DIRECTORY");
    assert_eq!(documents[0]["lastUpdate"], "2024-03-01T10:00:00");
    assert_eq!(documents[1]["path"], "/Users/alice/Music/Love Song.mp3");
    assert_eq!(documents[1]["filename"], "Love Song.mp3");
    assert_eq!(documents[1]["lastUpdate"], "2021-02-14T00:00:00");
    assert_eq!(documents[2]["fileType"], "TEXT");
    assert_eq!(documents[3]["userPermission"]["execute"], true);
    assert_eq!(documents[3]["othersPermission"]["read"], false);

    Ok(())
}

// Test that strict mode stops at the first bad line
#[test]
fn test_strict_mode() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let listing = setup_listing(temp_dir.path(), LISTING)?;

    let mut config = config(listing, temp_dir.path().join("out.ndjson"));
    config.strict = true;

    let scanner = Scanner::new(config, Arc::new(ProgressBar::hidden()));
    match scanner.scan() {
        Err(LsIndexError::Parse { line, source }) => {
            assert_eq!(line, 1);
            assert_eq!(
                source,
                ParseError::MalformedLine {
                    expected: 8,
                    found: 2
                }
            );
        }
        other => panic!("expected a parse error, got {:?}", other),
    }

    Ok(())
}

// Test that parallel parsing keeps listing order
#[test]
fn test_order_is_preserved() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let contents: String = (0..2000)
        .map(|i| format!("-rw-r--r-- 1 u g {} Jan  1  2000 /data/file {}.log\n", i, i))
        .collect();
    let listing = setup_listing(temp_dir.path(), &contents)?;

    let config = config(listing, temp_dir.path().join("out.ndjson"));
    let scanner = Scanner::new(config, Arc::new(ProgressBar::hidden()));
    let records = scanner.scan()?;

    assert_eq!(records.len(), 2000);
    for (i, parsed) in records.iter().enumerate() {
        assert_eq!(parsed.line, i + 1);
        assert_eq!(parsed.record.size, BigUint::from(i));
        assert_eq!(parsed.record.filename, format!("file {}.log", i));
    }

    Ok(())
}

// Test that a badly encoded line is decoded lossily without losing its neighbours
#[test]
fn test_invalid_utf8_line_is_kept() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let path = temp_dir.path().join("listing.txt");
    fs::write(
        &path,
        b"-rw-r--r-- 1 u g 1 Jan  1  2000 /ok1.txt\n\
          -rw-r--r-- 1 u g 2 Jan  1  2000 /caf\xe9.txt\r\n\
          -rw-r--r-- 1 u g 3 Jan  1  2000 /ok2.txt\n",
    )?;

    let config = config(path, temp_dir.path().join("out.ndjson"));
    let scanner = Scanner::new(config, Arc::new(ProgressBar::hidden()));
    let records = scanner.scan()?;

    let paths: Vec<&str> = records.iter().map(|r| r.record.path.as_str()).collect();
    assert_eq!(paths, vec!["/ok1.txt", "/caf\u{FFFD}.txt", "/ok2.txt"]);
    assert_eq!(records[1].record.file_type, Some(FileCategory::Text));
    assert_eq!(scanner.get_statistics().lines_skipped(), 0);

    Ok(())
}

// Test bulk output written to a file
#[test]
fn test_bulk_output_file() -> io::Result<()> {
    let temp_dir = tempdir()?;
    let listing = setup_listing(temp_dir.path(), LISTING)?;
    let output_file = temp_dir.path().join("bulk.ndjson");

    let mut config = config(listing, output_file.clone());
    config.format = OutputFormat::Bulk;
    config.index = "metadata".to_string();

    let scanner = Scanner::new(config.clone(), Arc::new(ProgressBar::hidden()));
    let records = scanner.scan()?;
    JsonWriter::new(config).write(&records)?;

    let documents = read_documents(&output_file)?;
    assert_eq!(documents.len(), 8);
    for pair in documents.chunks(2) {
        assert_eq!(pair[0]["index"]["_index"], "metadata");
        assert!(pair[1]["owner"].is_string());
    }

    Ok(())
}
