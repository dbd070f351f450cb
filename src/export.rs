//! Report export.
//! Writes the JSON report and one PNG per chart section into a folder.

use crate::charts::{BarPalette, ChartRenderer};
use crate::config::ExportSettings;
use crate::dashboard::{nutrient_heading, DashboardReport, ViewSection};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const REPORT_FILE: &str = "report.json";

pub struct ReportExporter;

impl ReportExporter {
    /// Export `report` into `dir`, creating it if needed. Returns written files.
    pub fn export(
        report: &DashboardReport,
        dir: &Path,
        settings: &ExportSettings,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating export folder {}", dir.display()))?;

        let mut written = Vec::new();

        let json_path = dir.join(REPORT_FILE);
        fs::write(&json_path, serde_json::to_string_pretty(report)?)
            .with_context(|| format!("writing {}", json_path.display()))?;
        written.push(json_path);

        let chart_size = (settings.chart_width, settings.chart_height);

        for section in &report.sections {
            match section {
                ViewSection::NumericCorrelation(matrix) if !matrix.is_empty() => {
                    let path = dir.join("correlation_heatmap.png");
                    ChartRenderer::render_heatmap_png(
                        matrix,
                        "Correlation Heatmap",
                        &path,
                        settings.heatmap_size,
                    )?;
                    written.push(path);
                }
                ViewSection::MacronutrientCorrelation(matrix) if !matrix.is_empty() => {
                    let path = dir.join("macronutrient_correlation.png");
                    ChartRenderer::render_heatmap_png(
                        matrix,
                        "Macronutrient Correlation Matrix",
                        &path,
                        settings.heatmap_size,
                    )?;
                    written.push(path);
                }
                ViewSection::TopCalories(ranking) if !ranking.is_empty() => {
                    let path = dir.join("top_calories.png");
                    ChartRenderer::render_ranking_png(
                        ranking,
                        &section.heading(report.top_n),
                        BarPalette::Viridis,
                        &path,
                        chart_size,
                    )?;
                    written.push(path);
                }
                ViewSection::TopMacronutrients(rankings) => {
                    for (nutrient, ranking) in rankings.iter().filter(|(_, r)| !r.is_empty()) {
                        let path = dir.join(format!(
                            "top_{}.png",
                            nutrient.column_name().to_lowercase()
                        ));
                        ChartRenderer::render_ranking_png(
                            ranking,
                            &nutrient_heading(*nutrient, report.top_n),
                            BarPalette::Coolwarm,
                            &path,
                            chart_size,
                        )?;
                        written.push(path);
                    }
                }
                _ => {}
            }
        }

        info!(dir = %dir.display(), files = written.len(), "report exported");
        Ok(written)
    }
}
