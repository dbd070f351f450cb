//! Tests for explorer configuration loading and saving.

use food_explorer::config::{ExplorerConfig, ExportSettings};
use food_explorer::ViewFlags;

#[test]
fn defaults_match_the_dashboard() {
    let config = ExplorerConfig::default();
    assert_eq!(config.top_n, 10);
    assert_eq!(config.preview_rows, 100);
    assert!(config.views.summary && config.views.missing_values);
    assert!(!config.views.raw_data && !config.views.top_calories);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("food_explorer.json");

    let config = ExplorerConfig {
        views: ViewFlags::all(),
        top_n: 5,
        preview_rows: 20,
        export: ExportSettings {
            chart_width: 800,
            chart_height: 600,
            heatmap_size: 700,
        },
    };
    config.save(&path).unwrap();

    assert_eq!(ExplorerConfig::load(&path).unwrap(), config);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{ "top_n": 3, "views": { "raw_data": true } }"#).unwrap();

    let config = ExplorerConfig::load(&path).unwrap();
    assert_eq!(config.top_n, 3);
    assert!(config.views.raw_data);
    assert!(config.views.summary);
    assert_eq!(config.export, ExportSettings::default());
}

#[test]
fn missing_or_malformed_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert_eq!(ExplorerConfig::load_or_default(&missing), ExplorerConfig::default());

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    assert!(ExplorerConfig::load(&broken).is_err());
    assert_eq!(ExplorerConfig::load_or_default(&broken), ExplorerConfig::default());
}
