//! Assignment ingestion.
//!
//! Turns assignment files into the ordered record sequence the pairing
//! pipeline expects: tokenized rows, sorted by numeric `EmpID`.

pub mod csv_table;
pub mod error;
pub mod ordering;

pub use csv_table::{
    IngestOptions, load_assignments, read_assignments, read_assignments_from_reader,
};
pub use error::{IngestError, Result};
pub use ordering::sort_by_employee_id;
