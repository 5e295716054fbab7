//! Derived statistics shown on the scoreboard and the summary.
//!
//! These are pure functions of session state and are never stored.

use std::fmt::Write;

use crate::types::POINTS_PER_MATCH;

/// Matched pairs per move, as a whole percentage.
///
/// `move_count` is the raw fractional counter, not the floored display value.
/// Returns 0 before the first activation.
///
/// ```
/// use fruit_match_core::accuracy;
///
/// assert_eq!(accuracy(0, 0.0), 0);
/// assert_eq!(accuracy(10, 1.0), 100);
/// assert_eq!(accuracy(10, 2.0), 50);
/// ```
pub fn accuracy(score: u32, move_count: f64) -> u32 {
    if move_count <= 0.0 {
        return 0;
    }
    let matched_pairs = f64::from(score / POINTS_PER_MATCH);
    (matched_pairs / move_count * 100.0).round() as u32
}

/// Format elapsed seconds as zero-padded `MM:SS`.
///
/// ```
/// use fruit_match_core::format_time;
///
/// assert_eq!(format_time(65), "01:05");
/// assert_eq!(format_time(5), "00:05");
/// ```
pub fn format_time(seconds: u32) -> String {
    let mut out = String::with_capacity(5);
    write_time(&mut out, seconds);
    out
}

/// Append `MM:SS` to an existing buffer.
pub fn write_time(out: &mut String, seconds: u32) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{:02}:{:02}", seconds / 60, seconds % 60);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_zero_moves() {
        assert_eq!(accuracy(0, 0.0), 0);
        assert_eq!(accuracy(30, 0.0), 0);
    }

    #[test]
    fn test_accuracy_examples() {
        assert_eq!(accuracy(10, 1.0), 100);
        assert_eq!(accuracy(10, 2.0), 50);
        assert_eq!(accuracy(0, 3.5), 0);
        assert_eq!(accuracy(80, 8.0), 100);
    }

    #[test]
    fn test_accuracy_uses_fractional_moves() {
        // 1 pair over 1.5 moves = 66.67%
        assert_eq!(accuracy(10, 1.5), 67);
        // 2 pairs over 3 moves = 66.67%
        assert_eq!(accuracy(20, 3.0), 67);
        // halves round up: 1 / 8 = 12.5%
        assert_eq!(accuracy(10, 8.0), 13);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(5), "00:05");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(599), "09:59");
        assert_eq!(format_time(6000), "100:00");
    }

    #[test]
    fn test_write_time_appends() {
        let mut s = String::from("TIME ");
        write_time(&mut s, 61);
        assert_eq!(s, "TIME 01:01");
    }
}
