//! Winning pair selection and final row filtering.

use pairing_model::{OverlapEntry, PairAggregate, PairKey};

/// Returns the aggregate with the greatest total.
///
/// A later aggregate only replaces the current best when strictly greater,
/// so the earliest maximal aggregate wins ties. Empty input has no winner.
pub fn select_winner(aggregates: &[PairAggregate]) -> Option<&PairAggregate> {
    aggregates.iter().fold(None, |best, candidate| match best {
        Some(current) if current.sum_days_worked >= candidate.sum_days_worked => Some(current),
        _ => Some(candidate),
    })
}

/// Entries whose ordered pair equals `key`, in their original order.
pub fn winning_rows(entries: &[OverlapEntry], key: &PairKey) -> Vec<OverlapEntry> {
    entries
        .iter()
        .filter(|entry| entry.belongs_to(key))
        .cloned()
        .collect()
}
