//! End-to-end pairing pipeline.
//!
//! Stages run in order inside their own spans:
//!
//! 1. `normalize` - parse every record's interval once
//! 2. `match` - pairwise scan for shared projects
//! 3. `aggregate` - total days per ordered pair
//! 4. `select` - winning pair and its rows
//!
//! Row-level problems (bad dates, empty fields) never fail the run; they only
//! remove overlaps. An input without any overlap produces an empty outcome.

use pairing_model::{AssignmentRecord, PairingOutcome};
use tracing::{debug, info, info_span};

use crate::aggregate::aggregate_pairs;
use crate::matcher::{match_pairs, normalize_assignments};
use crate::pipeline_context::PairingContext;
use crate::select::{select_winner, winning_rows};

/// Runs every stage over `records`.
///
/// `records` are expected in ascending numeric employee order, as delivered
/// by ingestion; the order decides which employee of a pair comes first.
pub fn run_pairing(records: &[AssignmentRecord], context: &PairingContext) -> PairingOutcome {
    let normalizer = context.normalizer_for(records);
    let layout = normalizer.layout();

    let normalized = info_span!("normalize", records = records.len(), layout = layout.pattern())
        .in_scope(|| normalize_assignments(records, &normalizer));
    let unusable = normalized
        .iter()
        .filter(|assignment| assignment.interval.is_none())
        .count();
    if unusable > 0 {
        debug!(unusable, "records with unparseable dates");
    }

    let entries = info_span!("match").in_scope(|| match_pairs(&normalized));
    debug!(entries = entries.len(), "overlap entries");

    let aggregates = info_span!("aggregate").in_scope(|| aggregate_pairs(&entries));
    debug!(pairs = aggregates.len(), "pair aggregates");

    let select_span = info_span!("select");
    let _select_guard = select_span.enter();
    let winner = select_winner(&aggregates).cloned();
    let rows = match &winner {
        Some(winner) => {
            info!(
                employee_one_id = %winner.employee_one_id,
                employee_two_id = %winner.employee_two_id,
                days = winner.sum_days_worked,
                "winning pair"
            );
            winning_rows(&entries, &winner.pair_key())
        }
        None => {
            info!("no employees share a project with overlapping dates");
            Vec::new()
        }
    };

    PairingOutcome {
        entries,
        aggregates,
        winner,
        rows,
    }
}
