pub mod aggregate;
pub mod datetime;
pub mod interval;
pub mod matcher;
pub mod pipeline;
pub mod pipeline_context;
pub mod select;

pub use aggregate::aggregate_pairs;
pub use datetime::{
    DateNormalizer, detect_batch_layout, detect_layout, is_null_sentinel, parse_day_month_year,
    parse_general_date, parse_with_layout,
};
pub use interval::{DateInterval, overlap_days};
pub use matcher::{NormalizedAssignment, match_pairs, normalize_assignments};
pub use pipeline::run_pairing;
pub use pipeline_context::PairingContext;
pub use select::{select_winner, winning_rows};
