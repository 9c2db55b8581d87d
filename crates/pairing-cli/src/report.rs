//! Presentation of pairing outcomes as tables and JSON.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use pairing_model::{OverlapEntry, PairAggregate, PairingOutcome};

/// JSON body of the `longest` command.
#[derive(Debug, Serialize)]
pub struct LongestReport<'a> {
    pub winner: Option<&'a PairAggregate>,
    pub rows: &'a [OverlapEntry],
}

/// One line of the `pairs` command.
#[derive(Debug, Serialize)]
pub struct PairSummary<'a> {
    pub employee_one_id: &'a str,
    pub employee_two_id: &'a str,
    pub shared_projects: usize,
    pub sum_days_worked: u64,
    pub winner: bool,
}

impl<'a> LongestReport<'a> {
    pub fn from_outcome(outcome: &'a PairingOutcome) -> Self {
        Self {
            winner: outcome.winner.as_ref(),
            rows: &outcome.rows,
        }
    }
}

/// Aggregates in first-occurrence order, with project counts and the winner
/// flagged.
pub fn pair_summaries(outcome: &PairingOutcome) -> Vec<PairSummary<'_>> {
    let winner = outcome.winner.as_ref().map(PairAggregate::pair_key);
    outcome
        .aggregates
        .iter()
        .map(|aggregate| {
            let key = aggregate.pair_key();
            PairSummary {
                employee_one_id: &aggregate.employee_one_id,
                employee_two_id: &aggregate.employee_two_id,
                shared_projects: outcome
                    .entries
                    .iter()
                    .filter(|entry| entry.belongs_to(&key))
                    .count(),
                sum_days_worked: aggregate.sum_days_worked,
                winner: winner.as_ref() == Some(&key),
            }
        })
        .collect()
}

pub fn longest_json(outcome: &PairingOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&LongestReport::from_outcome(outcome))
}

pub fn pairs_json(outcome: &PairingOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&pair_summaries(outcome))
}

/// Rows of the winning pair, one per shared project, plus a total line.
pub fn longest_table(outcome: &PairingOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Employee ID #1"),
        header_cell("Employee ID #2"),
        header_cell("Project ID"),
        header_cell("Days worked"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in &outcome.rows {
        table.add_row(vec![
            Cell::new(&row.employee_one_id),
            Cell::new(&row.employee_two_id),
            Cell::new(&row.project_id),
            Cell::new(row.days_worked),
        ]);
    }
    if let Some(days) = outcome.winning_days() {
        table.add_row(vec![
            header_cell("TOTAL"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new(days).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

/// Every pair aggregate; the winner is highlighted.
pub fn pairs_table(outcome: &PairingOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Employee ID #1"),
        header_cell("Employee ID #2"),
        header_cell("Projects"),
        header_cell("Days worked"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for summary in pair_summaries(outcome) {
        let days = if summary.winner {
            Cell::new(summary.sum_days_worked)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(summary.sum_days_worked)
        };
        table.add_row(vec![
            Cell::new(summary.employee_one_id),
            Cell::new(summary.employee_two_id),
            Cell::new(summary.shared_projects),
            days,
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
