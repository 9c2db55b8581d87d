//! Date normalization for assignment intervals.
//!
//! Two textual layouts are supported:
//!
//! - `D/M/Y` (day, month, year separated by `/`), e.g. `05/01/2023`
//! - `Y-M-D`, plus the date-time shapes a general parser accepts
//!   (`2023-01-05T08:30:00`, RFC 3339, `2023/01/05`)
//!
//! Parsed dates always land on midnight. The `NULL` sentinel is the one value
//! that resolves to an arbitrary instant: the run's reference instant, which
//! may carry a time-of-day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use pairing_model::{AssignmentRecord, DateLayout, NULL_DATE_SENTINEL};
use tracing::debug;

const GENERAL_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const GENERAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Returns true when `value` is the "still assigned" sentinel.
pub fn is_null_sentinel(value: &str) -> bool {
    value.trim() == NULL_DATE_SENTINEL
}

/// Picks the layout a single start date is written in.
///
/// Any `/` selects day/month/year; everything else is read as year-first.
pub fn detect_layout(sample: &str) -> DateLayout {
    if sample.contains('/') {
        DateLayout::DayMonthYear
    } else {
        DateLayout::YearMonthDay
    }
}

/// Detects the layout for a whole batch from its first usable start date.
///
/// A start date is usable when it parses under the layout its own shape
/// implies. Empty values, the `NULL` sentinel and malformed values carry no
/// layout information and are skipped. A batch without any usable start
/// date falls back to the default.
pub fn detect_batch_layout(records: &[AssignmentRecord]) -> DateLayout {
    records
        .iter()
        .map(|record| record.date_from.trim())
        .filter(|value| !value.is_empty() && !is_null_sentinel(value))
        .find_map(|value| {
            let layout = detect_layout(value);
            parse_with_layout(layout, value).map(|_| layout)
        })
        .unwrap_or_default()
}

/// Parses a date under an explicit layout.
pub fn parse_with_layout(layout: DateLayout, value: &str) -> Option<NaiveDate> {
    match layout {
        DateLayout::DayMonthYear => parse_day_month_year(value),
        DateLayout::YearMonthDay => parse_general_date(value),
    }
}

/// Parses `D/M/Y` with exactly three numeric parts.
///
/// Out-of-range components (month 13, 31 February) are rejected rather than
/// rolled over into the following month.
pub fn parse_day_month_year(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().split('/');
    let day = parse_component::<u32>(parts.next()?)?;
    let month = parse_component::<u32>(parts.next()?)?;
    let year = parse_component::<i32>(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parses a year-first date, discarding any time-of-day component.
pub fn parse_general_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in GENERAL_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in GENERAL_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.date_naive())
}

fn parse_component<T: std::str::FromStr>(part: &str) -> Option<T> {
    let part = part.trim();
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Converts textual dates into comparable instants for one batch.
#[derive(Debug, Clone, Copy)]
pub struct DateNormalizer {
    layout: DateLayout,
    reference_instant: NaiveDateTime,
}

impl DateNormalizer {
    pub fn new(layout: DateLayout, reference_instant: NaiveDateTime) -> Self {
        Self {
            layout,
            reference_instant,
        }
    }

    pub fn layout(&self) -> DateLayout {
        self.layout
    }

    /// Normalizes one date field.
    ///
    /// Returns `None` for a malformed value. `NULL` resolves to the reference
    /// instant; this makes results depend on when the run happens.
    pub fn normalize(&self, value: &str) -> Option<NaiveDateTime> {
        if is_null_sentinel(value) {
            return Some(self.reference_instant);
        }
        parse_with_layout(self.layout, value).map(|date| date.and_time(NaiveTime::MIN))
    }

    /// Normalizes a field and logs when it cannot be read.
    pub(crate) fn normalize_field(
        &self,
        record: &AssignmentRecord,
        field: &'static str,
        value: &str,
    ) -> Option<NaiveDateTime> {
        let normalized = self.normalize(value);
        if normalized.is_none() {
            debug!(
                employee_id = %record.employee_id,
                project_id = %record.project_id,
                field,
                value,
                layout = self.layout.pattern(),
                "unparseable date; record cannot overlap"
            );
        }
        normalized
    }
}
