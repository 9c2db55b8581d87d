//! Per-pair aggregation of overlap entries.

use std::collections::HashMap;

use pairing_model::{OverlapEntry, PairAggregate};

/// Sums `days_worked` per ordered employee pair.
///
/// One aggregate is produced per distinct `(employee_one_id, employee_two_id)`
/// key, in the order keys first appear. `(A, B)` and `(B, A)` are summed
/// separately.
pub fn aggregate_pairs(entries: &[OverlapEntry]) -> Vec<PairAggregate> {
    let mut aggregates: Vec<PairAggregate> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    for entry in entries {
        let key = (entry.employee_one_id.as_str(), entry.employee_two_id.as_str());
        match index.get(&key) {
            Some(&position) => aggregates[position].sum_days_worked += entry.days_worked,
            None => {
                index.insert(key, aggregates.len());
                aggregates.push(PairAggregate::new(
                    &entry.employee_one_id,
                    &entry.employee_two_id,
                    entry.days_worked,
                ));
            }
        }
    }
    aggregates
}
