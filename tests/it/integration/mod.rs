//! Integration tests covering multi-component workflows.

mod export_tests;
