/*!
 * Integration tests for the lsindex binary
 */

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;
use tempfile::tempdir;

const BIN: &str = env!("CARGO_BIN_EXE_lsindex");

#[test]
fn test_listing_file_to_output_file() {
    let temp_dir = tempdir().unwrap();
    let listing = temp_dir.path().join("listing.txt");
    let output = temp_dir.path().join("out.ndjson");
    fs::write(
        &listing,
        "-r-xr-xr-x  2 root  wheel  1 Jun  2 22:52 /home/example\n\
         drwxr-x---  3 root  wheel 96 Dec 24  2007 /home/My Documents\n",
    )
    .unwrap();

    let status = Command::new(BIN)
        .args(["--quiet", "--reference-date", "2024-10-01"])
        .arg(&listing)
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let documents: Vec<Value> = fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["lastUpdate"], "2024-06-02T22:52:00");
    assert_eq!(documents[0]["fileType"], "UNKNOWN");
    assert_eq!(documents[1]["path"], "/home/My Documents");
    assert_eq!(documents[1]["filename"], "My Documents");
    assert_eq!(documents[1]["fileType"], "DIRECTORY");
    assert_eq!(documents[1]["lastUpdate"], "2007-12-24T00:00:00");
}

#[test]
fn test_stdin_to_stdout_bulk() {
    let mut child = Command::new(BIN)
        .args([
            "--quiet",
            "--format",
            "bulk",
            "--reference-date",
            "2024-10-01",
            "-",
            "-",
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"-rw-r--r-- 1 bob users 4096 Jan  5 07:00 /tmp/song.MP3\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["index"]["_index"], "filesystem");
    assert_eq!(lines[1]["fileType"], "MUSIC");
    assert_eq!(lines[1]["size"], 4096);
}

#[test]
fn test_strict_failure_exit_code() {
    let temp_dir = tempdir().unwrap();
    let listing = temp_dir.path().join("listing.txt");
    fs::write(&listing, "-r-xr-xr-x 2 root wheel 1 Jum 2 22:52 /x\n").unwrap();

    let output = Command::new(BIN)
        .args(["--quiet", "--strict"])
        .arg(&listing)
        .arg(temp_dir.path().join("out.ndjson"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Line 1: Unknown month 'Jum'"), "{}", stderr);
}

#[test]
fn test_missing_listing() {
    let temp_dir = tempdir().unwrap();
    let output = Command::new(BIN)
        .arg(temp_dir.path().join("nope.txt"))
        .arg("-")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Listing file not found"));
}
