//! Pairwise project matching.
//!
//! Dates are parsed once per record before the scan; the scan itself only
//! compares cached intervals.

use pairing_model::{AssignmentRecord, OverlapEntry};
use tracing::trace;

use crate::datetime::DateNormalizer;
use crate::interval::DateInterval;

/// An assignment record with its interval parsed for the batch layout.
///
/// `interval` is `None` when either endpoint is malformed; such a record
/// stays in the sequence but never overlaps anything.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedAssignment<'a> {
    pub record: &'a AssignmentRecord,
    pub interval: Option<DateInterval>,
}

impl NormalizedAssignment<'_> {
    /// Days shared with `other`, or 0 if either interval is unusable.
    pub fn overlap_days(&self, other: &NormalizedAssignment<'_>) -> u64 {
        match (&self.interval, &other.interval) {
            (Some(a), Some(b)) => a.overlap_days(b),
            _ => 0,
        }
    }
}

/// Parses both endpoints of every record, preserving input order.
pub fn normalize_assignments<'a>(
    records: &'a [AssignmentRecord],
    normalizer: &DateNormalizer,
) -> Vec<NormalizedAssignment<'a>> {
    records
        .iter()
        .map(|record| {
            let start = normalizer.normalize_field(record, "date_from", &record.date_from);
            let end = normalizer.normalize_field(record, "date_to", &record.date_to);
            let interval = match (start, end) {
                (Some(start), Some(end)) => Some(DateInterval::new(start, end)),
                _ => None,
            };
            NormalizedAssignment { record, interval }
        })
        .collect()
}

/// Emits one entry per record pair sharing a project with positive overlap.
///
/// For each pair `(i, j)` with `i < j`, the entry names `records[i]`'s
/// employee first. Entries follow the nested scan order. The scan is
/// quadratic in the number of records.
pub fn match_pairs(assignments: &[NormalizedAssignment<'_>]) -> Vec<OverlapEntry> {
    let mut entries = Vec::new();
    for (i, first) in assignments.iter().enumerate() {
        for second in &assignments[i + 1..] {
            if !first.record.same_project(second.record) {
                continue;
            }
            let days_worked = first.overlap_days(second);
            if days_worked == 0 {
                continue;
            }
            trace!(
                employee_one_id = %first.record.employee_id,
                employee_two_id = %second.record.employee_id,
                project_id = %first.record.project_id,
                days_worked,
                "overlap found"
            );
            entries.push(OverlapEntry::new(
                &first.record.employee_id,
                &second.record.employee_id,
                &first.record.project_id,
                days_worked,
            ));
        }
    }
    entries
}
