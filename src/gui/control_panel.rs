//! Control Panel Widget
//! Left side panel with the file picker and one checkbox per view.

use crate::dashboard::ViewFlags;
use crate::data::{CalorieColumn, ColumnRoles};
use egui::{Color32, RichText};
use std::path::PathBuf;

/// How the status line should be coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Left side control panel with file selection and view toggles.
pub struct ControlPanel {
    pub flags: ViewFlags,
    pub top_n: usize,
    pub csv_path: Option<PathBuf>,
    pub roles: Option<ColumnRoles>,
    pub status: String,
    pub status_kind: StatusKind,
    pub is_busy: bool,
}

impl ControlPanel {
    pub fn new(flags: ViewFlags, top_n: usize) -> Self {
        Self {
            flags,
            top_n,
            csv_path: None,
            roles: None,
            status: "Upload a CSV file to begin".to_string(),
            status_kind: StatusKind::Info,
            is_busy: false,
        }
    }

    pub fn set_status(&mut self, kind: StatusKind, status: &str) {
        self.status_kind = kind;
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🍎 Food Explorer")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Nutrition Dataset EDA")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.csv_path.is_some() {
                            ui.visuals().strong_text_color()
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled_ui(!self.is_busy, |ui| {
                            if ui.button("📂 Upload CSV").clicked() {
                                action = ControlPanelAction::BrowseCsv;
                            }
                        });
                    });
                });
            });

        if let Some(roles) = &self.roles {
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Label column: {}", roles.label_column.name)).size(11.0),
            );
            let calorie_text = match &roles.calorie_column {
                CalorieColumn::Present(name) => format!("Calorie column: {}", name),
                CalorieColumn::Absent => "Calorie column: not found".to_string(),
            };
            ui.label(RichText::new(calorie_text).size(11.0));
            let macros: Vec<String> = roles
                .macronutrient_columns
                .iter()
                .map(|m| m.to_string())
                .collect();
            ui.label(
                RichText::new(format!(
                    "Macronutrients: {}",
                    if macros.is_empty() {
                        "none".to_string()
                    } else {
                        macros.join(", ")
                    }
                ))
                .size(11.0),
            );
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== View Toggles =====
        ui.label(RichText::new("📊 Views").size(14.0).strong());
        ui.add_space(5.0);

        let has_numeric = self
            .roles
            .as_ref()
            .is_some_and(|r| !r.numeric_columns.is_empty());
        let has_macros = self
            .roles
            .as_ref()
            .is_some_and(|r| !r.macronutrient_columns.is_empty());

        ui.checkbox(&mut self.flags.raw_data, "Show Raw Data");
        ui.checkbox(&mut self.flags.summary, "Summary Statistics");
        ui.checkbox(&mut self.flags.missing_values, "Missing Values");
        ui.add_enabled_ui(has_numeric, |ui| {
            ui.checkbox(
                &mut self.flags.numeric_correlation,
                "Show Improved Correlation Heatmap",
            );
        });
        ui.checkbox(
            &mut self.flags.top_calories,
            format!("Show Top {} Caloric Foods", self.top_n),
        );
        ui.add_enabled_ui(has_macros, |ui| {
            ui.checkbox(
                &mut self.flags.top_macronutrients,
                format!("Top {} Foods by Macronutrients", self.top_n),
            );
            ui.checkbox(
                &mut self.flags.macronutrient_correlation,
                "Macronutrient Correlation Heatmap",
            );
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.roles.is_some() && !self.is_busy, |ui| {
                let button = egui::Button::new(RichText::new("💾 Export Charts").size(14.0))
                    .min_size(egui::vec2(180.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Export;
                }
            });

            ui.add_space(6.0);

            if ui.small_button("Save view settings").clicked() {
                action = ControlPanelAction::SaveSettings;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        if self.is_busy {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(&self.status).size(11.0));
            });
        } else {
            let status_color = match self.status_kind {
                StatusKind::Error => Color32::from_rgb(220, 53, 69),
                StatusKind::Success => Color32::from_rgb(40, 167, 69),
                StatusKind::Info => Color32::GRAY,
            };
            ui.label(RichText::new(&self.status).size(11.0).color(status_color));
        }

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    Export,
    SaveSettings,
}
