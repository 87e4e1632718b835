/*!
 * Utility functions for lsindex
 */

use num_bigint::BigUint;

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if size >= TB {
        format!("{:.2} TB", size as f64 / TB as f64)
    } else if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Format a byte count that may not fit in 64 bits
pub fn format_big_size(size: &BigUint) -> String {
    match u64::try_from(size) {
        Ok(size) => format_file_size(size),
        Err(_) => format!("{} bytes", size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 bytes");
        assert_eq!(format_file_size(1023), "1023 bytes");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_format_big_size() {
        assert_eq!(format_big_size(&BigUint::from(2048u32)), "2.00 KB");
        let huge = BigUint::parse_bytes(b"340282366920938463463374607431768211456", 10).unwrap();
        assert_eq!(
            format_big_size(&huge),
            "340282366920938463463374607431768211456 bytes"
        );
    }
}
