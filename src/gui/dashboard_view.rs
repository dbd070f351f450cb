//! Dashboard Viewer Widget
//! Central scrollable panel rendering every section of the current report.

use crate::charts::{BarPalette, ChartPlotter};
use crate::dashboard::{nutrient_heading, DashboardReport, ViewSection};
use egui::{Color32, RichText, ScrollArea};

const SECTION_SPACING: f32 = 18.0;

/// Scrollable report display, top to bottom in dashboard order.
#[derive(Default)]
pub struct DashboardView;

impl DashboardView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, report: Option<&DashboardReport>) {
        ui.heading(RichText::new("🍎 Food Nutrition Dataset Explorer").size(24.0));
        ui.add_space(10.0);

        let Some(report) = report else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Upload a CSV file").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for warning in &report.warnings {
                    egui::Frame::none()
                        .fill(Color32::from_rgb(255, 243, 205))
                        .rounding(5.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(format!("⚠ {}", warning))
                                    .color(Color32::from_rgb(133, 100, 4)),
                            );
                        });
                    ui.add_space(8.0);
                }

                if report.sections.is_empty() {
                    ui.label(RichText::new("No views enabled").color(Color32::GRAY));
                }

                for section in &report.sections {
                    Self::draw_section(ui, section, report.top_n);
                    ui.add_space(SECTION_SPACING);
                }
            });
    }

    fn draw_section(ui: &mut egui::Ui, section: &ViewSection, top_n: usize) {
        match section {
            ViewSection::TopMacronutrients(rankings) => {
                for (nutrient, ranking) in rankings {
                    Self::subheader(ui, &nutrient_heading(*nutrient, top_n));
                    ChartPlotter::draw_ranking_chart(
                        ui,
                        &format!("top_{}", nutrient.column_name()),
                        ranking,
                        BarPalette::Coolwarm,
                    );
                    ui.add_space(SECTION_SPACING);
                }
            }
            other => {
                Self::subheader(ui, &other.heading(top_n));
                match other {
                    ViewSection::RawData(preview) => ChartPlotter::draw_raw_preview(ui, preview),
                    ViewSection::Summary(summaries) => {
                        ChartPlotter::draw_summary_table(ui, summaries)
                    }
                    ViewSection::MissingValues(counts) => {
                        ChartPlotter::draw_missing_table(ui, counts)
                    }
                    ViewSection::NumericCorrelation(matrix)
                    | ViewSection::MacronutrientCorrelation(matrix) => {
                        ScrollArea::horizontal()
                            .id_salt(other.title())
                            .show(ui, |ui| ChartPlotter::draw_heatmap(ui, matrix));
                    }
                    ViewSection::TopCalories(ranking) => ChartPlotter::draw_ranking_chart(
                        ui,
                        "top_calories",
                        ranking,
                        BarPalette::Viridis,
                    ),
                    ViewSection::TopMacronutrients(_) => {}
                }
            }
        }
    }

    fn subheader(ui: &mut egui::Ui, text: &str) {
        ui.label(RichText::new(text).size(18.0).strong());
        ui.add_space(6.0);
    }
}
