//! Food Explorer - Food Nutrition Dataset Explorer
//!
//! Loads a CSV of food-nutrition records, guesses which columns hold food
//! names, calories and macronutrients, and derives summary statistics,
//! missing-value counts, correlation matrices and top-N rankings for display.

pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod export;
pub mod gui;
pub mod stats;

pub use dashboard::{DashboardReport, DashboardWarning, Dataset, ReportOptions, ViewFlags, ViewSection};
pub use error::{ExplorerError, ExplorerResult};
