//! Employee ordering applied before matching.

use pairing_model::AssignmentRecord;

use crate::error::{IngestError, Result};

/// Stable ascending sort by the numeric value of `employee_id`.
///
/// Records with the same employee keep their file order. The identifier
/// itself is left as written; only the sort key is numeric.
///
/// # Errors
///
/// Returns [`IngestError::NonNumericEmployeeId`] for the first identifier
/// that is not an integer. `row` is the 1-based data row.
pub fn sort_by_employee_id(records: Vec<AssignmentRecord>) -> Result<Vec<AssignmentRecord>> {
    let mut keyed = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let key = record.employee_id.trim().parse::<i64>().map_err(|_| {
                IngestError::NonNumericEmployeeId {
                    row: index + 1,
                    value: record.employee_id.clone(),
                }
            })?;
            Ok((key, record))
        })
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by_key(|(key, _)| *key);
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}
