//! Tests for date normalization.

use chrono::{NaiveDate, NaiveDateTime};
use pairing_core::{DateNormalizer, PairingContext, parse_day_month_year, parse_general_date};
use pairing_model::{AssignmentRecord, DateLayout};

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn parse_day_month_year_complete() {
    assert_eq!(
        parse_day_month_year("15/01/2023"),
        Some(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap())
    );
}

#[test]
fn parse_general_date_invalid_returns_none() {
    assert!(parse_general_date("").is_none());
    assert!(parse_general_date("invalid").is_none());
    assert!(parse_general_date("2023-13-01").is_none());
    assert!(parse_general_date("NULL").is_none());
}

#[test]
fn normalizer_places_dates_at_midnight() {
    let normalizer = DateNormalizer::new(DateLayout::YearMonthDay, midnight(2030, 1, 1));
    assert_eq!(
        normalizer.normalize("2023-06-15T23:59:59"),
        Some(midnight(2023, 6, 15))
    );
}

#[test]
fn normalizer_uses_one_layout_for_every_field() {
    let normalizer = DateNormalizer::new(DateLayout::DayMonthYear, midnight(2030, 1, 1));
    assert_eq!(normalizer.normalize("02/03/2023"), Some(midnight(2023, 3, 2)));
    assert_eq!(normalizer.normalize("2023-03-02"), None);
}

#[test]
fn context_detects_layout_when_undeclared() {
    let records = vec![AssignmentRecord::new("1", "P1", "2023-01-01", "NULL")];
    let context = PairingContext::new(midnight(2030, 1, 1));
    assert_eq!(context.resolve_layout(&records), DateLayout::YearMonthDay);

    let uk = vec![AssignmentRecord::new("1", "P1", "01/01/2023", "NULL")];
    assert_eq!(context.resolve_layout(&uk), DateLayout::DayMonthYear);

    let declared = context.with_layout(DateLayout::YearMonthDay);
    assert_eq!(declared.resolve_layout(&uk), DateLayout::YearMonthDay);
}
