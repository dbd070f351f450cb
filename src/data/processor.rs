//! Data Processor Module
//! Derives the cleaned table used by the macronutrient views.

use crate::data::roles::Macronutrient;
use crate::data::table::Table;
use crate::error::ExplorerResult;
use polars::prelude::*;
use tracing::debug;

/// Handles data cleaning operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Drop every row with an absent value in any of `macronutrients`.
    ///
    /// With no macronutrient columns the table is returned unchanged.
    pub fn drop_missing_macronutrients(
        table: &Table,
        macronutrients: &[Macronutrient],
    ) -> ExplorerResult<Table> {
        let predicate = macronutrients
            .iter()
            .map(|m| col(m.column_name()).is_not_null())
            .reduce(|acc, next| acc.and(next));

        let Some(predicate) = predicate else {
            return Ok(table.clone());
        };

        let cleaned = table.dataframe().clone().lazy().filter(predicate).collect()?;

        debug!(
            before = table.row_count(),
            after = cleaned.height(),
            "dropped rows with missing macronutrients"
        );
        Table::from_dataframe(cleaned)
    }
}
