//! Date layouts accepted in assignment files.

use serde::{Deserialize, Serialize};

/// Textual layout used to read every date in one input batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateLayout {
    /// `D/M/Y`, e.g. `05/01/2023` for 5 January 2023.
    DayMonthYear,
    /// `Y-M-D`, or anything a general date parser accepts.
    #[default]
    YearMonthDay,
}

impl DateLayout {
    /// Human-readable pattern used in log output.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::DayMonthYear => "D/M/Y",
            Self::YearMonthDay => "Y-M-D",
        }
    }
}
