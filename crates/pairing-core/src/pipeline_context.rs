//! Run-level settings for the pairing pipeline.
//!
//! The [`PairingContext`] holds the two inputs that are not part of the
//! records themselves:
//!
//! - **Date layout**: declared for the batch, or detected from the first
//!   usable start date when left unset
//! - **Reference instant**: the single "now" that every `NULL` date resolves
//!   to during one run
//!
//! Treating `NULL` as "now" is almost certainly not what the data means, but
//! it is how assignment files have been read so far. Pinning the reference
//! instant keeps such runs reproducible.

use chrono::{Local, NaiveDateTime};
use pairing_model::{AssignmentRecord, DateLayout};

use crate::datetime::{DateNormalizer, detect_batch_layout};

/// Settings shared by every stage of one pipeline run.
#[derive(Debug, Clone)]
pub struct PairingContext {
    /// Declared batch layout; `None` means detect from the records.
    pub layout: Option<DateLayout>,
    /// Instant substituted for `NULL` dates.
    pub reference_instant: NaiveDateTime,
}

impl PairingContext {
    /// Creates a context whose `NULL` dates resolve to `reference_instant`.
    pub fn new(reference_instant: NaiveDateTime) -> Self {
        Self {
            layout: None,
            reference_instant,
        }
    }

    /// Creates a context anchored at the local wall clock.
    pub fn now() -> Self {
        Self::new(Local::now().naive_local())
    }

    /// Declares the date layout for the whole batch.
    pub fn with_layout(mut self, layout: DateLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Replaces the instant used for `NULL` dates.
    pub fn with_reference_instant(mut self, reference_instant: NaiveDateTime) -> Self {
        self.reference_instant = reference_instant;
        self
    }

    /// The declared layout, or the one detected from `records`.
    pub fn resolve_layout(&self, records: &[AssignmentRecord]) -> DateLayout {
        self.layout.unwrap_or_else(|| detect_batch_layout(records))
    }

    /// Builds the normalizer for `records`.
    pub fn normalizer_for(&self, records: &[AssignmentRecord]) -> DateNormalizer {
        DateNormalizer::new(self.resolve_layout(records), self.reference_instant)
    }
}

impl Default for PairingContext {
    fn default() -> Self {
        Self::now()
    }
}
