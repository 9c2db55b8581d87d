//! CLI library components for the employee pair finder.

pub mod logging;
pub mod report;
