use anyhow::{Context, Result};
use tracing::info_span;

use pairing_core::{PairingContext, run_pairing};
use pairing_ingest::{IngestOptions, load_assignments};
use pairing_model::{DateLayout, PairingOutcome};

use crate::cli::{DateLayoutArg, InputArgs};

/// Loads the input file and runs every pipeline stage over it.
pub fn analyze(args: &InputArgs) -> Result<PairingOutcome> {
    let options = IngestOptions::default()
        .with_delimiter(args.delimiter)
        .with_headers(!args.no_headers);
    let ingest_span = info_span!("ingest", input = %args.input.display());
    let records = ingest_span
        .in_scope(|| load_assignments(&args.input, &options))
        .with_context(|| format!("load assignments from {}", args.input.display()))?;

    let context = pairing_context(args);
    Ok(run_pairing(&records, &context))
}

fn pairing_context(args: &InputArgs) -> PairingContext {
    let mut context = match args.reference_date {
        Some(instant) => PairingContext::new(instant),
        None => PairingContext::now(),
    };
    if let Some(layout) = declared_layout(args.date_layout) {
        context = context.with_layout(layout);
    }
    context
}

fn declared_layout(arg: DateLayoutArg) -> Option<DateLayout> {
    match arg {
        DateLayoutArg::Auto => None,
        DateLayoutArg::Dmy => Some(DateLayout::DayMonthYear),
        DateLayoutArg::Ymd => Some(DateLayout::YearMonthDay),
    }
}
