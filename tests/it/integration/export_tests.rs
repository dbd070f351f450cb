//! Tests for report export.

use crate::helpers::{dataset, FOODS_CSV};
use food_explorer::config::ExportSettings;
use food_explorer::export::{ReportExporter, REPORT_FILE};
use food_explorer::{ReportOptions, ViewFlags};

#[test]
fn table_only_report_writes_json() {
    let report = dataset(FOODS_CSV)
        .build_report(&ViewFlags::default(), &ReportOptions::default())
        .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("export");

    let files = ReportExporter::export(&report, &out, &ExportSettings::default()).unwrap();

    assert_eq!(files, vec![out.join(REPORT_FILE)]);
    let text = std::fs::read_to_string(&files[0]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["columns"], 7);
    assert_eq!(json["roles"]["label_column"]["name"], "Unnamed: 0");
}

fn assert_non_empty(path: &std::path::Path) {
    let meta = std::fs::metadata(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    assert!(meta.len() > 0, "{} is empty", path.display());
}

#[test]
fn every_chart_view_writes_a_png() {
    let report = dataset(FOODS_CSV)
        .build_report(&ViewFlags::all(), &ReportOptions::default())
        .unwrap();
    let dir = tempfile::tempdir().unwrap();

    let files = ReportExporter::export(&report, dir.path(), &ExportSettings::default()).unwrap();

    for name in [
        "correlation_heatmap.png",
        "top_calories.png",
        "top_fat.png",
        "top_protein.png",
        "top_carbohydrates.png",
        "macronutrient_correlation.png",
    ] {
        let path = dir.path().join(name);
        assert!(files.contains(&path), "{} not reported", name);
        assert_non_empty(&path);
    }
    assert_eq!(files.len(), 7);
}

#[test]
fn calorie_ranking_alone_exports() {
    let flags = ViewFlags {
        summary: false,
        missing_values: false,
        top_calories: true,
        ..ViewFlags::default()
    };
    let report = dataset(FOODS_CSV)
        .build_report(&flags, &ReportOptions::default())
        .unwrap();
    let dir = tempfile::tempdir().unwrap();

    let files = ReportExporter::export(&report, dir.path(), &ExportSettings::default()).unwrap();

    assert_eq!(
        files,
        vec![dir.path().join(REPORT_FILE), dir.path().join("top_calories.png")]
    );
    assert_non_empty(&files[1]);
}

#[test]
fn negative_values_rank_and_export() {
    let report = dataset("food,Calories\na,-5\nb,-1\nc,-12\n")
        .build_report(
            &ViewFlags {
                top_calories: true,
                ..ViewFlags::default()
            },
            &ReportOptions::default(),
        )
        .unwrap();
    let dir = tempfile::tempdir().unwrap();

    let files = ReportExporter::export(&report, dir.path(), &ExportSettings::default()).unwrap();

    assert_non_empty(&dir.path().join("top_calories.png"));
    assert!(files.len() >= 2);
}
