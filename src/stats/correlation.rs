//! Pairwise Pearson correlation between numeric columns.

use crate::data::Table;
use crate::error::ExplorerResult;
use serde::Serialize;

/// Square symmetric matrix; row and column order match `columns`.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// Compute the matrix for `columns` of `table`.
    ///
    /// Each pair uses only rows where both values are present. Constant
    /// columns and pairs with fewer than two shared rows give NaN.
    pub fn compute(table: &Table, columns: &[String]) -> ExplorerResult<Self> {
        let series: Vec<Vec<Option<f64>>> = columns
            .iter()
            .map(|name| table.numeric_values(name))
            .collect::<ExplorerResult<_>>()?;

        let n = columns.len();
        let mut values = vec![vec![f64::NAN; n]; n];

        for i in 0..n {
            // Unit diagonal whenever the column varies
            values[i][i] = if pearson(&series[i], &series[i]).is_nan() {
                f64::NAN
            } else {
                1.0
            };

            for j in (i + 1)..n {
                let r = pearson(&series[i], &series[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Ok(Self {
            columns: columns.to_vec(),
            values,
        })
    }
}

/// Pearson coefficient over pairwise-complete observations.
fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();

    let n = pairs.len();
    if n < 2 {
        return f64::NAN;
    }

    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n as f64;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return f64::NAN;
    }

    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}
