//! CSV loading for assignment files.
//!
//! Expected header: `EmpID, ProjectID, DateFrom, DateTo`. Extra columns are
//! ignored, missing cells become empty strings, and blank lines are skipped.
//! Date cells are passed through untouched; reading them is the core's job.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use pairing_model::AssignmentRecord;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::ordering::sort_by_employee_id;

/// Options controlling how assignment files are tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Whether the first row names the columns. Headerless files are read
    /// positionally in `EmpID, ProjectID, DateFrom, DateTo` order.
    pub has_headers: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }
}

/// CSV row structure for assignment files.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AssignmentRow {
    #[serde(rename = "EmpID")]
    emp_id: String,
    #[serde(rename = "ProjectID")]
    project_id: String,
    #[serde(rename = "DateFrom")]
    date_from: String,
    #[serde(rename = "DateTo")]
    date_to: String,
}

impl From<AssignmentRow> for AssignmentRecord {
    fn from(row: AssignmentRow) -> Self {
        AssignmentRecord::new(row.emp_id, row.project_id, row.date_from, row.date_to)
    }
}

/// Number of columns a headerless file is read with.
const ASSIGNMENT_COLUMNS: usize = 4;

/// Reads assignment records from any reader, preserving row order.
///
/// Rows shorter than the header are padded with empty cells, so a missing
/// field reaches the core as an empty string instead of failing the file.
pub fn read_assignments_from_reader<R: Read>(
    reader: R,
    options: &IngestOptions,
) -> Result<Vec<AssignmentRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(options.has_headers)
        .delimiter(options.delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = if options.has_headers {
        Some(reader.headers()?.clone())
    } else {
        None
    };
    let width = headers.as_ref().map_or(ASSIGNMENT_COLUMNS, StringRecord::len);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = pad_record(record?, width);
        let row: AssignmentRow = record.deserialize(headers.as_ref())?;
        records.push(AssignmentRecord::from(row));
    }
    Ok(records)
}

fn pad_record(mut record: StringRecord, width: usize) -> StringRecord {
    while record.len() < width {
        record.push_field("");
    }
    record
}

/// Reads assignment records from a CSV file, preserving row order.
///
/// # Errors
///
/// Returns an error if the file is missing or is not valid CSV.
pub fn read_assignments(path: &Path, options: &IngestOptions) -> Result<Vec<AssignmentRecord>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|error| IngestError::CsvRead {
        path: path.to_path_buf(),
        source: csv::Error::from(error),
    })?;
    let records = read_assignments_from_reader(file, options).map_err(|error| match error {
        IngestError::Csv(source) => IngestError::CsvRead {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    info!(path = %path.display(), records = records.len(), "read assignment file");
    Ok(records)
}

/// Reads a CSV file and orders it by numeric employee identifier.
///
/// This is the full input contract of the pairing pipeline.
pub fn load_assignments(path: &Path, options: &IngestOptions) -> Result<Vec<AssignmentRecord>> {
    let records = read_assignments(path, options)?;
    let sorted = sort_by_employee_id(records)?;
    debug!(records = sorted.len(), "sorted assignments by EmpID");
    Ok(sorted)
}
