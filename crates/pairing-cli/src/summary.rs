use anyhow::{Context, Result};

use pairing_cli::report::{longest_json, longest_table, pairs_json, pairs_table};
use pairing_model::PairingOutcome;

use crate::cli::OutputFormatArg;

pub fn print_longest(outcome: &PairingOutcome, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Json => {
            println!("{}", longest_json(outcome).context("serialize report")?);
        }
        OutputFormatArg::Table => match &outcome.winner {
            Some(winner) => {
                println!(
                    "Employees {} and {} worked together for {} days.",
                    winner.employee_one_id, winner.employee_two_id, winner.sum_days_worked
                );
                println!("{}", longest_table(outcome));
            }
            None => println!("No employees worked on the same project at the same time."),
        },
    }
    Ok(())
}

pub fn print_pairs(outcome: &PairingOutcome, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Json => {
            println!("{}", pairs_json(outcome).context("serialize report")?);
        }
        OutputFormatArg::Table => {
            if outcome.aggregates.is_empty() {
                println!("No employees worked on the same project at the same time.");
            } else {
                println!("{}", pairs_table(outcome));
            }
        }
    }
    Ok(())
}
