//! Unit tests for Food Explorer.

mod config_tests;
mod roles_tests;
mod stats_tests;
