use serde::{Deserialize, Serialize};

use crate::overlap::{OverlapEntry, PairAggregate};

/// Everything one pipeline run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingOutcome {
    /// Every positive overlap, in scan order.
    pub entries: Vec<OverlapEntry>,
    /// One aggregate per ordered pair, in first-occurrence order.
    pub aggregates: Vec<PairAggregate>,
    /// The pair with the greatest total, earliest on ties.
    pub winner: Option<PairAggregate>,
    /// Entries belonging to the winning pair.
    pub rows: Vec<OverlapEntry>,
}

impl PairingOutcome {
    pub fn winning_days(&self) -> Option<u64> {
        self.winner.as_ref().map(|winner| winner.sum_days_worked)
    }
}
