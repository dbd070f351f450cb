//! Data module - CSV loading, column roles and cleaning

mod loader;
mod processor;
mod roles;
mod table;

pub use loader::DataLoader;
pub use processor::DataProcessor;
pub use roles::{
    infer_calorie_column, infer_label_column, infer_macronutrients, CalorieColumn, ColumnRoles,
    LabelColumn, LabelRule, Macronutrient,
};
pub use table::{ColumnKind, Table};
