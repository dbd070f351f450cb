//! Statistics Calculator Module
//! Descriptive statistics and missing-value counts per column.

use crate::data::{ColumnKind, Table};
use crate::error::ExplorerResult;
use rayon::prelude::*;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Descriptive statistics for a single numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl Default for ColumnSummary {
    fn default() -> Self {
        Self {
            column: String::new(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            p50: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Absent-value count for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

/// Handles statistical calculations with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of present values.
    pub fn compute_descriptive_stats(values: &[f64]) -> ColumnSummary {
        let n = values.len();
        if n == 0 {
            return ColumnSummary::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        ColumnSummary {
            column: String::new(),
            count: n,
            mean: values.iter().mean(),
            // Sample deviation; NaN below two values
            std: values.iter().std_dev(),
            min: sorted[0],
            p25: Self::percentile(&sorted, 25.0),
            p50: Self::percentile(&sorted, 50.0),
            p75: Self::percentile(&sorted, 75.0),
            max: sorted[n - 1],
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Summary statistics for every numeric column, in declared order.
    pub fn summary_stats(table: &Table) -> ExplorerResult<Vec<ColumnSummary>> {
        let numeric: Vec<String> = table
            .column_kinds()
            .into_iter()
            .filter(|(_, kind)| *kind == ColumnKind::Numeric)
            .map(|(name, _)| name)
            .collect();

        // Use rayon for parallel computation; collect keeps column order
        numeric
            .par_iter()
            .map(|name| -> ExplorerResult<ColumnSummary> {
                let present: Vec<f64> = table.numeric_values(name)?.into_iter().flatten().collect();
                let mut summary = Self::compute_descriptive_stats(&present);
                summary.column = name.clone();
                Ok(summary)
            })
            .collect()
    }

    /// Absent-value count for every column, in declared order.
    pub fn missing_counts(table: &Table) -> Vec<MissingCount> {
        table
            .dataframe()
            .get_columns()
            .iter()
            .map(|col| MissingCount {
                column: col.name().to_string(),
                missing: col.null_count(),
            })
            .collect()
    }
}
