//! Data model shared by the pairing crates.
//!
//! The model is deliberately free of parsing and I/O: records carry their
//! dates as text, and the core decides how to read them.

pub mod assignment;
pub mod layout;
pub mod outcome;
pub mod overlap;

pub use assignment::{AssignmentRecord, NULL_DATE_SENTINEL};
pub use layout::DateLayout;
pub use outcome::PairingOutcome;
pub use overlap::{OverlapEntry, PairAggregate, PairKey};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_reports_winning_total() {
        let outcome = PairingOutcome {
            entries: vec![
                OverlapEntry::new("1", "2", "10", 3),
                OverlapEntry::new("1", "2", "11", 4),
            ],
            aggregates: vec![PairAggregate::new("1", "2", 7)],
            winner: Some(PairAggregate::new("1", "2", 7)),
            rows: vec![
                OverlapEntry::new("1", "2", "10", 3),
                OverlapEntry::new("1", "2", "11", 4),
            ],
        };
        assert_eq!(outcome.winning_days(), Some(7));
    }

    #[test]
    fn outcome_serializes() {
        let outcome = PairingOutcome::default();
        let json = serde_json::to_string(&outcome).expect("serialize outcome");
        let round: PairingOutcome = serde_json::from_str(&json).expect("deserialize outcome");
        assert!(round.entries.is_empty());
        assert!(round.winner.is_none());
    }
}
