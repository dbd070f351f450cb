//! Single test binary entry point.
//!
//! Structure:
//! - unit: loader, column roles, statistics and config tests
//! - integration: full dataset to report and export workflows

mod integration;
mod unit;
