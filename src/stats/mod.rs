//! Statistics module - derived views over a table

mod calculator;
mod correlation;
mod ranking;

pub use calculator::{ColumnSummary, MissingCount, StatsCalculator};
pub use correlation::CorrelationMatrix;
pub use ranking::{RankedRow, TopNRanking, DEFAULT_TOP_N};
