//! In-memory table backed by a Polars DataFrame.

use crate::error::{ExplorerError, ExplorerResult};
use polars::prelude::*;

/// Storage class of a column as far as the dashboard is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColumnKind {
    Numeric,
    Textual,
}

impl ColumnKind {
    /// Only float and 64-bit integer storage counts as numeric.
    pub fn of(dtype: &DataType) -> Self {
        match dtype {
            DataType::Float32 | DataType::Float64 | DataType::Int64 => ColumnKind::Numeric,
            _ => ColumnKind::Textual,
        }
    }
}

/// Ordered, named, equal-length columns. Absent values are Polars nulls.
#[derive(Debug, Clone)]
pub struct Table {
    df: DataFrame,
}

impl Table {
    /// Wrap a DataFrame. A table without columns is rejected.
    pub fn from_dataframe(df: DataFrame) -> ExplorerResult<Self> {
        if df.width() == 0 {
            return Err(ExplorerError::Parse(
                "No columns to parse from file".to_string(),
            ));
        }
        Ok(Self { df })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_count(&self) -> usize {
        self.df.width()
    }

    /// Column names in declared order.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Column names paired with their kind, in declared order.
    pub fn column_kinds(&self) -> Vec<(String, ColumnKind)> {
        self.df
            .get_columns()
            .iter()
            .map(|col| (col.name().to_string(), ColumnKind::of(col.dtype())))
            .collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.df.get_column_index(name).is_some()
    }

    pub fn column_kind(&self, name: &str) -> Option<ColumnKind> {
        self.df.column(name).ok().map(|col| ColumnKind::of(col.dtype()))
    }

    /// Values of a numeric column as `f64`, `None` for absent entries.
    pub fn numeric_values(&self, name: &str) -> ExplorerResult<Vec<Option<f64>>> {
        let column = self
            .df
            .column(name)
            .map_err(|_| ExplorerError::missing_column(name))?;
        if ColumnKind::of(column.dtype()) != ColumnKind::Numeric {
            return Err(ExplorerError::not_numeric(name));
        }

        let as_f64 = column.cast(&DataType::Float64)?;
        let values = as_f64
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect();
        Ok(values)
    }

    /// Values of any column rendered as text, `None` for absent entries.
    pub fn text_values(&self, name: &str) -> ExplorerResult<Vec<Option<String>>> {
        let column = self
            .df
            .column(name)
            .map_err(|_| ExplorerError::missing_column(name))?;

        let as_str = column.cast(&DataType::String)?;
        let values = as_str
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect();
        Ok(values)
    }

    /// Number of absent entries in a column.
    pub fn missing_count(&self, name: &str) -> ExplorerResult<usize> {
        self.df
            .column(name)
            .map(|col| col.null_count())
            .map_err(|_| ExplorerError::missing_column(name))
    }

    /// First `limit` rows rendered as text, row-major.
    pub fn preview_rows(&self, limit: usize) -> ExplorerResult<Vec<Vec<Option<String>>>> {
        let take = limit.min(self.row_count());
        let columns: Vec<Vec<Option<String>>> = self
            .column_names()
            .iter()
            .map(|name| self.text_values(name))
            .collect::<ExplorerResult<_>>()?;

        Ok((0..take)
            .map(|row| columns.iter().map(|col| col[row].clone()).collect())
            .collect())
    }
}
