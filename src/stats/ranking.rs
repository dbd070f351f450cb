//! Top-N ranking of rows by a numeric column.

use crate::data::Table;
use crate::error::ExplorerResult;
use serde::Serialize;
use std::cmp::Ordering;

/// Default number of rows shown in a ranking chart.
pub const DEFAULT_TOP_N: usize = 10;

/// One ranked row reduced to what a bar chart needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    /// Position of the row in the source table.
    pub row: usize,
    pub label: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopNRanking {
    pub rank_column: String,
    pub label_column: String,
    pub rows: Vec<RankedRow>,
}

impl TopNRanking {
    /// The `n` rows with the largest `rank_column` values, descending.
    ///
    /// Ties keep table order; absent values sort after every present one.
    /// Fails with `InvalidColumn` when `rank_column` is missing or textual,
    /// or when `label_column` is missing.
    pub fn compute(
        table: &Table,
        rank_column: &str,
        label_column: &str,
        n: usize,
    ) -> ExplorerResult<Self> {
        let values = table.numeric_values(rank_column)?;
        let labels = table.text_values(label_column)?;

        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| descending_absent_last(values[a], values[b]));

        let rows = order
            .into_iter()
            .take(n)
            .map(|row| RankedRow {
                row,
                label: labels[row].clone(),
                value: values[row],
            })
            .collect();

        Ok(Self {
            rank_column: rank_column.to_string(),
            label_column: label_column.to_string(),
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn descending_absent_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
