//! End-to-end tests for the pairing pipeline.

use chrono::{NaiveDate, NaiveDateTime};

use pairing_core::{PairingContext, run_pairing};
use pairing_model::{AssignmentRecord, DateLayout, OverlapEntry, PairAggregate};

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 20)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn context() -> PairingContext {
    PairingContext::new(reference())
}

fn record(employee: &str, project: &str, from: &str, to: &str) -> AssignmentRecord {
    AssignmentRecord::new(employee, project, from, to)
}

#[test]
fn uk_layout_single_shared_project() {
    let records = vec![
        record("1", "P1", "01/01/2023", "10/01/2023"),
        record("2", "P1", "05/01/2023", "15/01/2023"),
        record("3", "P2", "01/01/2023", "02/01/2023"),
    ];

    let outcome = run_pairing(&records, &context());

    assert_eq!(outcome.entries, vec![OverlapEntry::new("1", "2", "P1", 5)]);
    assert_eq!(outcome.aggregates, vec![PairAggregate::new("1", "2", 5)]);
    assert_eq!(outcome.winner, Some(PairAggregate::new("1", "2", 5)));
    assert_eq!(outcome.rows, vec![OverlapEntry::new("1", "2", "P1", 5)]);
}

#[test]
fn no_shared_projects_is_empty() {
    let records = vec![
        record("1", "P1", "2023-01-01", "2023-01-10"),
        record("2", "P2", "2023-01-01", "2023-01-10"),
        record("3", "P3", "2023-01-01", "2023-01-10"),
    ];

    let outcome = run_pairing(&records, &context());

    assert!(outcome.entries.is_empty());
    assert!(outcome.aggregates.is_empty());
    assert!(outcome.winner.is_none());
    assert!(outcome.rows.is_empty());
}

#[test]
fn pair_sharing_two_projects_sums_days() {
    let records = vec![
        record("1", "P1", "2023-01-01", "2023-01-04"),
        record("1", "P2", "2023-02-01", "2023-02-10"),
        record("2", "P1", "2023-01-01", "2023-01-31"),
        record("2", "P2", "2023-02-06", "2023-02-28"),
        record("3", "P1", "2023-03-01", "2023-03-31"),
    ];

    let outcome = run_pairing(&records, &context());

    assert_eq!(
        outcome.entries,
        vec![
            OverlapEntry::new("1", "2", "P1", 3),
            OverlapEntry::new("1", "2", "P2", 4),
        ]
    );
    assert_eq!(outcome.aggregates, vec![PairAggregate::new("1", "2", 7)]);
    assert_eq!(outcome.rows.len(), 2);
    assert!(
        outcome
            .rows
            .iter()
            .all(|row| row.employee_one_id == "1" && row.employee_two_id == "2")
    );
}

#[test]
fn winner_rows_exclude_other_pairs() {
    let records = vec![
        record("1", "P1", "2023-01-01", "2023-01-11"),
        record("2", "P1", "2023-01-01", "2023-01-03"),
        record("3", "P1", "2023-01-01", "2023-01-21"),
    ];

    let outcome = run_pairing(&records, &context());

    assert_eq!(
        outcome.aggregates,
        vec![
            PairAggregate::new("1", "2", 2),
            PairAggregate::new("1", "3", 10),
            PairAggregate::new("2", "3", 2),
        ]
    );
    assert_eq!(outcome.winner, Some(PairAggregate::new("1", "3", 10)));
    assert_eq!(outcome.rows, vec![OverlapEntry::new("1", "3", "P1", 10)]);
}

#[test]
fn null_end_date_uses_reference_instant() {
    let records = vec![
        record("1", "P1", "2023-01-10", "NULL"),
        record("2", "P1", "2023-01-15", "NULL"),
    ];

    let outcome = run_pairing(&records, &context());

    // 2023-01-15 .. 2023-01-20
    assert_eq!(outcome.rows, vec![OverlapEntry::new("1", "2", "P1", 5)]);

    let later = context().with_reference_instant(
        NaiveDate::from_ymd_opt(2023, 1, 25)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    );
    let outcome = run_pairing(&records, &later);
    assert_eq!(outcome.rows, vec![OverlapEntry::new("1", "2", "P1", 11)]);
}

#[test]
fn malformed_dates_only_remove_overlaps() {
    let records = vec![
        record("1", "P1", "2023-01-01", "2023-01-10"),
        record("2", "P1", "not a date", "2023-01-10"),
        record("3", "P1", "2023-01-05", ""),
        record("4", "P1", "2023-01-03", "2023-01-10"),
    ];

    let outcome = run_pairing(&records, &context());

    assert_eq!(outcome.entries, vec![OverlapEntry::new("1", "4", "P1", 7)]);
    assert_eq!(outcome.rows, vec![OverlapEntry::new("1", "4", "P1", 7)]);
}

#[test]
fn declared_layout_overrides_detection() {
    // Read as D/M/Y this is 1 Feb .. 10 Feb; year-first parsing rejects it.
    let records = vec![
        record("1", "P1", "01/02/2023", "10/02/2023"),
        record("2", "P1", "05/02/2023", "20/02/2023"),
    ];

    let detected = run_pairing(&records, &context());
    assert_eq!(detected.rows, vec![OverlapEntry::new("1", "2", "P1", 5)]);

    let forced = run_pairing(&records, &context().with_layout(DateLayout::YearMonthDay));
    assert!(forced.rows.is_empty());
}

#[test]
fn empty_input_is_not_an_error() {
    let outcome = run_pairing(&[], &context());
    assert_eq!(outcome, pairing_model::PairingOutcome::default());
}

#[test]
fn malformed_leading_start_keeps_day_month_year_batch() {
    let records = vec![
        record("1", "P9", "unknown", "10/01/2023"),
        record("2", "P1", "01/01/2023", "10/01/2023"),
        record("3", "P1", "05/01/2023", "15/01/2023"),
    ];

    let outcome = run_pairing(&records, &context());

    assert_eq!(outcome.rows, vec![OverlapEntry::new("2", "3", "P1", 5)]);
    assert_eq!(outcome.winner, Some(PairAggregate::new("2", "3", 5)));
}
