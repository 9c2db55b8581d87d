//! Assignment records as delivered by ingestion.

use serde::{Deserialize, Serialize};

/// Date value that stands for "still assigned".
///
/// The core resolves it to the run's reference instant.
pub const NULL_DATE_SENTINEL: &str = "NULL";

/// One employee's work on one project over one interval.
///
/// All fields are kept as text. `employee_id` is ordered numerically by the
/// ingestion layer but otherwise treated as an opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub employee_id: String,
    pub project_id: String,
    pub date_from: String,
    pub date_to: String,
}

impl AssignmentRecord {
    pub fn new(
        employee_id: impl Into<String>,
        project_id: impl Into<String>,
        date_from: impl Into<String>,
        date_to: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            project_id: project_id.into(),
            date_from: date_from.into(),
            date_to: date_to.into(),
        }
    }

    /// Returns true when the record shares a project with `other`.
    pub fn same_project(&self, other: &AssignmentRecord) -> bool {
        self.project_id == other.project_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_compare_exactly() {
        let a = AssignmentRecord::new("1", "P1", "2023-01-01", "2023-01-10");
        let b = AssignmentRecord::new("2", "P1", "2023-01-05", "NULL");
        let c = AssignmentRecord::new("3", "p1", "2023-01-05", "NULL");
        assert!(a.same_project(&b));
        assert!(!a.same_project(&c));
    }
}
