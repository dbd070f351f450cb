//! Column role inference.
//!
//! Guesses which columns hold numbers, macronutrients, row labels and
//! calories from column names and stored types alone.

use crate::data::table::{ColumnKind, Table};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three macronutrients singled out for rankings and correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Macronutrient {
    Fat,
    Protein,
    Carbohydrates,
}

impl Macronutrient {
    /// Fixed display and lookup order.
    pub const ALL: [Macronutrient; 3] = [
        Macronutrient::Fat,
        Macronutrient::Protein,
        Macronutrient::Carbohydrates,
    ];

    /// Exact column name this nutrient is stored under.
    pub fn column_name(self) -> &'static str {
        match self {
            Macronutrient::Fat => "Fat",
            Macronutrient::Protein => "Protein",
            Macronutrient::Carbohydrates => "Carbohydrates",
        }
    }
}

impl fmt::Display for Macronutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Which rule picked the label column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelRule {
    /// An exported row-index column named `Unnamed: 0`.
    RowIndex,
    /// A column named `Food`.
    Food,
    /// A column named `food`.
    LowercaseFood,
    /// Fallback: the first declared column.
    FirstColumn,
}

/// The column used to name each row in charts. Always resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelColumn {
    pub name: String,
    pub rule: LabelRule,
}

/// The calorie-like column, if any column name looks calorie related.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalorieColumn {
    Present(String),
    Absent,
}

impl CalorieColumn {
    pub fn name(&self) -> Option<&str> {
        match self {
            CalorieColumn::Present(name) => Some(name),
            CalorieColumn::Absent => None,
        }
    }
}

/// Roles derived once per loaded table. Every name exists in that table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRoles {
    pub numeric_columns: Vec<String>,
    pub macronutrient_columns: Vec<Macronutrient>,
    pub label_column: LabelColumn,
    pub calorie_column: CalorieColumn,
}

impl ColumnRoles {
    pub fn infer(table: &Table) -> Self {
        let names = table.column_names();

        let numeric_columns = table
            .column_kinds()
            .into_iter()
            .filter(|(_, kind)| *kind == ColumnKind::Numeric)
            .map(|(name, _)| name)
            .collect();

        Self {
            numeric_columns,
            macronutrient_columns: infer_macronutrients(&names),
            label_column: infer_label_column(&names),
            calorie_column: infer_calorie_column(&names),
        }
    }

    pub fn macronutrient_names(&self) -> Vec<String> {
        self.macronutrient_columns
            .iter()
            .map(|m| m.column_name().to_string())
            .collect()
    }
}

/// Macronutrients present among `names`, in [`Macronutrient::ALL`] order.
pub fn infer_macronutrients(names: &[String]) -> Vec<Macronutrient> {
    Macronutrient::ALL
        .into_iter()
        .filter(|m| names.iter().any(|n| n == m.column_name()))
        .collect()
}

/// Label column by priority: `Unnamed: 0`, `Food`, `food`, then the first column.
///
/// `names` must not be empty; tables without columns never get this far.
pub fn infer_label_column(names: &[String]) -> LabelColumn {
    const PRIORITY: [(&str, LabelRule); 3] = [
        ("Unnamed: 0", LabelRule::RowIndex),
        ("Food", LabelRule::Food),
        ("food", LabelRule::LowercaseFood),
    ];

    for (candidate, rule) in PRIORITY {
        if names.iter().any(|n| n == candidate) {
            return LabelColumn {
                name: candidate.to_string(),
                rule,
            };
        }
    }

    LabelColumn {
        name: names.first().cloned().unwrap_or_default(),
        rule: LabelRule::FirstColumn,
    }
}

/// Stem shared by "calorie", "calories" and "caloric".
const CALORIE_STEM: &str = "calori";

/// First column, in declared order, whose lowercased name contains [`CALORIE_STEM`].
pub fn infer_calorie_column(names: &[String]) -> CalorieColumn {
    names
        .iter()
        .find(|n| n.to_lowercase().contains(CALORIE_STEM))
        .map(|n| CalorieColumn::Present(n.clone()))
        .unwrap_or(CalorieColumn::Absent)
}
