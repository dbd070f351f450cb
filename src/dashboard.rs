//! Dashboard assembly.
//!
//! A [`Dataset`] is one loaded file with its cleaned variant and inferred
//! column roles. [`Dataset::build_report`] turns it into the sections enabled
//! by a [`ViewFlags`] value, checking every precondition up front so the
//! derived views never see a missing or textual column.

use crate::data::{ColumnKind, ColumnRoles, DataLoader, DataProcessor, Macronutrient, Table};
use crate::error::ExplorerResult;
use crate::stats::{
    ColumnSummary, CorrelationMatrix, MissingCount, StatsCalculator, TopNRanking, DEFAULT_TOP_N,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Which views are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewFlags {
    pub raw_data: bool,
    pub summary: bool,
    pub missing_values: bool,
    pub numeric_correlation: bool,
    pub top_calories: bool,
    pub top_macronutrients: bool,
    pub macronutrient_correlation: bool,
}

impl Default for ViewFlags {
    fn default() -> Self {
        Self {
            raw_data: false,
            summary: true,
            missing_values: true,
            numeric_correlation: false,
            top_calories: false,
            top_macronutrients: false,
            macronutrient_correlation: false,
        }
    }
}

impl ViewFlags {
    pub fn all() -> Self {
        Self {
            raw_data: true,
            summary: true,
            missing_values: true,
            numeric_correlation: true,
            top_calories: true,
            top_macronutrients: true,
            macronutrient_correlation: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub top_n: usize,
    pub preview_rows: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            preview_rows: 100,
        }
    }
}

/// Leading rows of the raw table rendered as text.
#[derive(Debug, Clone, Serialize)]
pub struct RawPreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
    pub total_rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub enum ViewSection {
    RawData(RawPreview),
    Summary(Vec<ColumnSummary>),
    MissingValues(Vec<MissingCount>),
    NumericCorrelation(CorrelationMatrix),
    TopCalories(TopNRanking),
    TopMacronutrients(Vec<(Macronutrient, TopNRanking)>),
    MacronutrientCorrelation(CorrelationMatrix),
}

impl ViewSection {
    pub fn title(&self) -> &'static str {
        match self {
            ViewSection::RawData(_) => "Raw Data",
            ViewSection::Summary(_) => "Summary Statistics",
            ViewSection::MissingValues(_) => "Missing Values",
            ViewSection::NumericCorrelation(_) => "Correlation Heatmap of Nutritional Features",
            ViewSection::TopCalories(_) => "Top Foods by Caloric Value",
            ViewSection::TopMacronutrients(_) => "Top Foods by Macronutrients",
            ViewSection::MacronutrientCorrelation(_) => "Correlation Matrix of Macronutrients",
        }
    }

    /// Display heading; ranking titles carry the configured row count.
    pub fn heading(&self, top_n: usize) -> String {
        match self {
            ViewSection::TopCalories(_) => format!("Top {} Foods by Caloric Value", top_n),
            ViewSection::TopMacronutrients(_) => format!("Top {} Foods by Macronutrients", top_n),
            other => other.title().to_string(),
        }
    }
}

/// Heading for one macronutrient's ranking chart.
pub fn nutrient_heading(nutrient: Macronutrient, top_n: usize) -> String {
    format!("Top {} Foods Highest in {}", top_n, nutrient)
}

/// Non-fatal conditions shown to the user next to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DashboardWarning {
    CalorieColumnMissing,
}

impl fmt::Display for DashboardWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardWarning::CalorieColumnMissing => {
                f.write_str("Could not find a column related to 'Caloric Value'.")
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub rows: usize,
    /// Row limit the rankings were built with.
    pub top_n: usize,
    pub columns: usize,
    pub roles: ColumnRoles,
    pub sections: Vec<ViewSection>,
    pub warnings: Vec<DashboardWarning>,
}

/// One loaded file: the table, its cleaned variant and its column roles.
#[derive(Debug, Clone)]
pub struct Dataset {
    table: Table,
    cleaned: Table,
    roles: ColumnRoles,
}

impl Dataset {
    pub fn from_table(table: Table) -> ExplorerResult<Self> {
        let roles = ColumnRoles::infer(&table);
        let cleaned = DataProcessor::drop_missing_macronutrients(&table, &roles.macronutrient_columns)?;

        info!(
            rows = table.row_count(),
            columns = table.column_count(),
            cleaned_rows = cleaned.row_count(),
            "dataset ready"
        );
        debug!(?roles, "inferred column roles");

        Ok(Self {
            table,
            cleaned,
            roles,
        })
    }

    pub fn load_bytes(bytes: &[u8]) -> ExplorerResult<Self> {
        Self::from_table(DataLoader::load_bytes(bytes)?)
    }

    pub fn load_path(path: &Path) -> ExplorerResult<Self> {
        Self::from_table(DataLoader::load_path(path)?)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn cleaned(&self) -> &Table {
        &self.cleaned
    }

    pub fn roles(&self) -> &ColumnRoles {
        &self.roles
    }

    /// Compute every section enabled in `flags`, in dashboard order.
    ///
    /// Views whose inputs are missing are skipped; a missing calorie column
    /// also records [`DashboardWarning::CalorieColumnMissing`].
    pub fn build_report(
        &self,
        flags: &ViewFlags,
        options: &ReportOptions,
    ) -> ExplorerResult<DashboardReport> {
        let mut sections = Vec::new();
        let mut warnings = Vec::new();
        let roles = &self.roles;
        let label = roles.label_column.name.as_str();
        let macros = roles.macronutrient_names();

        if flags.raw_data {
            sections.push(ViewSection::RawData(RawPreview {
                columns: self.table.column_names(),
                rows: self.table.preview_rows(options.preview_rows)?,
                total_rows: self.table.row_count(),
            }));
        }

        if flags.summary {
            sections.push(ViewSection::Summary(StatsCalculator::summary_stats(
                &self.table,
            )?));
        }

        if flags.missing_values {
            sections.push(ViewSection::MissingValues(StatsCalculator::missing_counts(
                &self.table,
            )));
        }

        if flags.numeric_correlation && !roles.numeric_columns.is_empty() {
            sections.push(ViewSection::NumericCorrelation(CorrelationMatrix::compute(
                &self.table,
                &roles.numeric_columns,
            )?));
        }

        if flags.top_calories {
            match roles.calorie_column.name() {
                Some(calories) if self.is_rankable(calories) => {
                    sections.push(ViewSection::TopCalories(TopNRanking::compute(
                        &self.table,
                        calories,
                        label,
                        options.top_n,
                    )?));
                }
                Some(calories) => {
                    warn!(column = calories, "calorie column is not numeric, skipping ranking");
                    warnings.push(DashboardWarning::CalorieColumnMissing);
                }
                None => {
                    warn!("no calorie column found, skipping ranking");
                    warnings.push(DashboardWarning::CalorieColumnMissing);
                }
            }
        }

        if flags.top_macronutrients && !macros.is_empty() {
            let rankings = roles
                .macronutrient_columns
                .iter()
                .filter(|m| self.cleaned_is_rankable(m.column_name()))
                .map(|m| {
                    TopNRanking::compute(&self.cleaned, m.column_name(), label, options.top_n)
                        .map(|ranking| (*m, ranking))
                })
                .collect::<ExplorerResult<Vec<_>>>()?;
            if rankings.is_empty() {
                warn!("no numeric macronutrient columns, skipping rankings");
            } else {
                sections.push(ViewSection::TopMacronutrients(rankings));
            }
        }

        if flags.macronutrient_correlation && !macros.is_empty() {
            let numeric_macros: Vec<String> = macros
                .into_iter()
                .filter(|m| self.cleaned_is_rankable(m))
                .collect();
            if numeric_macros.is_empty() {
                warn!("no numeric macronutrient columns, skipping correlation");
            } else {
                sections.push(ViewSection::MacronutrientCorrelation(
                    CorrelationMatrix::compute(&self.cleaned, &numeric_macros)?,
                ));
            }
        }

        debug!(sections = sections.len(), warnings = warnings.len(), "report built");

        Ok(DashboardReport {
            rows: self.table.row_count(),
            top_n: options.top_n,
            columns: self.table.column_count(),
            roles: roles.clone(),
            sections,
            warnings,
        })
    }

    fn is_rankable(&self, column: &str) -> bool {
        self.roles.numeric_columns.iter().any(|c| c == column)
    }

    fn cleaned_is_rankable(&self, column: &str) -> bool {
        self.cleaned.column_kind(column) == Some(ColumnKind::Numeric)
    }
}
