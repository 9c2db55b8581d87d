//! Overlap entries and per-pair aggregates.
//!
//! Pair identity is ordered: `(A, B)` and `(B, A)` are different keys. The
//! matcher always puts the earlier record first, so in practice a pair only
//! ever appears in one orientation.

use serde::{Deserialize, Serialize};

/// Ordered identity of an employee pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    pub employee_one_id: String,
    pub employee_two_id: String,
}

impl PairKey {
    pub fn new(employee_one_id: impl Into<String>, employee_two_id: impl Into<String>) -> Self {
        Self {
            employee_one_id: employee_one_id.into(),
            employee_two_id: employee_two_id.into(),
        }
    }

    /// Strict ordered comparison against a borrowed pair.
    pub fn matches(&self, employee_one_id: &str, employee_two_id: &str) -> bool {
        self.employee_one_id == employee_one_id && self.employee_two_id == employee_two_id
    }
}

/// Two employees sharing a project during an overlapping period.
///
/// `days_worked` is always positive; zero-overlap pairs are never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapEntry {
    pub employee_one_id: String,
    pub employee_two_id: String,
    pub project_id: String,
    pub days_worked: u64,
}

impl OverlapEntry {
    pub fn new(
        employee_one_id: impl Into<String>,
        employee_two_id: impl Into<String>,
        project_id: impl Into<String>,
        days_worked: u64,
    ) -> Self {
        Self {
            employee_one_id: employee_one_id.into(),
            employee_two_id: employee_two_id.into(),
            project_id: project_id.into(),
            days_worked,
        }
    }

    pub fn pair_key(&self) -> PairKey {
        PairKey::new(&self.employee_one_id, &self.employee_two_id)
    }

    /// Returns true when this entry belongs to `key` (ordered match).
    pub fn belongs_to(&self, key: &PairKey) -> bool {
        key.matches(&self.employee_one_id, &self.employee_two_id)
    }
}

/// Total overlap across all shared projects for one ordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairAggregate {
    pub employee_one_id: String,
    pub employee_two_id: String,
    pub sum_days_worked: u64,
}

impl PairAggregate {
    pub fn new(
        employee_one_id: impl Into<String>,
        employee_two_id: impl Into<String>,
        sum_days_worked: u64,
    ) -> Self {
        Self {
            employee_one_id: employee_one_id.into(),
            employee_two_id: employee_two_id.into(),
            sum_days_worked,
        }
    }

    pub fn pair_key(&self) -> PairKey {
        PairKey::new(&self.employee_one_id, &self.employee_two_id)
    }
}
