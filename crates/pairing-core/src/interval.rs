//! Overlap between two closed date intervals.

use chrono::NaiveDateTime;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Closed interval `[start, end]`.
///
/// Reversed intervals (`end < start`) are allowed and simply never overlap
/// anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Days shared with `other`; see [`overlap_days`].
    pub fn overlap_days(&self, other: &DateInterval) -> u64 {
        overlap_days(self, other)
    }
}

/// Counts the days two intervals share.
///
/// The overlap runs from the later start to the earlier end. An empty overlap
/// counts as 0; otherwise the length is rounded up to whole days. Two
/// intervals touching on a single midnight therefore share 0 days, not 1.
pub fn overlap_days(a: &DateInterval, b: &DateInterval) -> u64 {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    if end < start {
        return 0;
    }
    let millis = (end - start).num_milliseconds();
    // `millis` is non-negative here, so this is a ceiling division.
    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;
    u64::try_from(days).unwrap_or(0)
}
