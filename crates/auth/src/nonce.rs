//! Per-request nonce tokens.
//!
//! A nonce is the current time in seconds with millisecond resolution,
//! written without the decimal point. The fraction keeps only its
//! significant digits, so `1700000000.120` becomes `170000000012` and a
//! whole second has no fractional part at all.
//!
//! Two calls within the same millisecond return the same nonce.

use std::time::{SystemTime, UNIX_EPOCH};

/// Generate a nonce from the system clock.
pub fn nonce() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;

    format_nonce(millis)
}

/// Format a Unix timestamp in milliseconds as a nonce.
pub fn format_nonce(millis: u64) -> String {
    let secs = millis / 1000;
    let frac = millis % 1000;

    if frac == 0 {
        return secs.to_string();
    }

    let digits = format!("{:03}", frac);
    format!("{}{}", secs, digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_millis() {
        assert_eq!(format_nonce(1_700_000_000_123), "1700000000123");
    }

    #[test]
    fn test_trailing_zero_dropped() {
        assert_eq!(format_nonce(1_700_000_000_120), "170000000012");
        assert_eq!(format_nonce(1_700_000_000_100), "17000000001");
    }

    #[test]
    fn test_leading_zero_kept() {
        assert_eq!(format_nonce(1_700_000_000_005), "1700000000005");
        assert_eq!(format_nonce(1_700_000_000_050), "170000000005");
    }

    #[test]
    fn test_whole_second() {
        assert_eq!(format_nonce(1_700_000_000_000), "1700000000");
    }

    #[test]
    fn test_nonce_is_digits() {
        let n = nonce();
        assert!(!n.is_empty());
        assert!(n.chars().all(|c| c.is_ascii_digit()));
        // Seconds alone are 10 digits until 2286.
        assert!(n.len() >= 10 && n.len() <= 13);
    }
}
