//! Chart Plotter Module
//! Interactive dashboard widgets: egui_plot bar charts, a painted
//! correlation heatmap and the statistics tables.

use crate::charts::palette::{self, BarPalette, Rgb};
use crate::dashboard::RawPreview;
use crate::stats::{ColumnSummary, CorrelationMatrix, MissingCount, TopNRanking};
use egui::{Align2, Color32, FontId, RichText, Sense};
use egui_plot::{Bar, BarChart, GridMark, Plot};

const HEATMAP_CELL: f32 = 56.0;
const HEATMAP_LABEL_WIDTH: f32 = 150.0;
const HEATMAP_HEADER_HEIGHT: f32 = 24.0;
const LABEL_CHARS: usize = 18;
const BAR_ROW_HEIGHT: f32 = 32.0;

/// Text shown for absent values.
pub const ABSENT: &str = "<NA>";

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Shorten `text` to `max` characters with a trailing ellipsis.
pub fn short_label(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.3}", value)
    }
}

/// Creates dashboard visualizations using egui and egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Horizontal bar chart of a ranking, largest value on top.
    pub fn draw_ranking_chart(
        ui: &mut egui::Ui,
        id: &str,
        ranking: &TopNRanking,
        bar_palette: BarPalette,
    ) {
        let n = ranking.rows.len();
        if n == 0 {
            ui.label(RichText::new("No rows to rank").color(Color32::GRAY));
            return;
        }

        let labels: Vec<String> = ranking
            .rows
            .iter()
            .map(|r| r.label.clone().unwrap_or_else(|| ABSENT.to_string()))
            .collect();

        let bars: Vec<Bar> = ranking
            .rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| {
                let value = row.value?;
                Some(
                    Bar::new((n - 1 - i) as f64, value)
                        .name(&labels[i])
                        .fill(color(bar_palette.color(i, n))),
                )
            })
            .collect();

        let axis_labels = labels.clone();

        Plot::new(id)
            .height(n as f32 * BAR_ROW_HEIGHT + 60.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(ranking.rank_column.clone())
            // One tick per bar so every label is drawn
            .y_grid_spacer(move |_input| {
                (0..n)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .y_axis_formatter(move |mark, _range| {
                let pos = mark.value.round();
                if (mark.value - pos).abs() > 1e-6 || pos < 0.0 || pos as usize >= n {
                    return String::new();
                }
                let idx = n - 1 - pos as usize;
                short_label(&axis_labels[idx], LABEL_CHARS)
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).horizontal().width(0.7));
            });
    }

    /// Annotated heatmap of a correlation matrix on a coolwarm scale.
    pub fn draw_heatmap(ui: &mut egui::Ui, matrix: &CorrelationMatrix) {
        let n = matrix.len();
        if n == 0 {
            ui.label(RichText::new("No columns to correlate").color(Color32::GRAY));
            return;
        }

        let size = egui::vec2(
            HEATMAP_LABEL_WIDTH + n as f32 * HEATMAP_CELL,
            HEATMAP_HEADER_HEIGHT + n as f32 * HEATMAP_CELL,
        );
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);
        let text_color = ui.visuals().text_color();
        let origin = rect.min + egui::vec2(HEATMAP_LABEL_WIDTH, HEATMAP_HEADER_HEIGHT);
        let cell_font = FontId::proportional(11.0);

        for (j, name) in matrix.columns.iter().enumerate() {
            let pos = egui::pos2(
                origin.x + (j as f32 + 0.5) * HEATMAP_CELL,
                rect.min.y + HEATMAP_HEADER_HEIGHT / 2.0,
            );
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                short_label(name, 7),
                FontId::proportional(10.0),
                text_color,
            );
        }

        for (i, name) in matrix.columns.iter().enumerate() {
            let row_y = origin.y + i as f32 * HEATMAP_CELL;
            painter.text(
                egui::pos2(origin.x - 6.0, row_y + HEATMAP_CELL / 2.0),
                Align2::RIGHT_CENTER,
                short_label(name, LABEL_CHARS),
                FontId::proportional(11.0),
                text_color,
            );

            for j in 0..n {
                let value = matrix.get(i, j);
                let cell = egui::Rect::from_min_size(
                    egui::pos2(origin.x + j as f32 * HEATMAP_CELL, row_y),
                    egui::vec2(HEATMAP_CELL, HEATMAP_CELL),
                )
                .shrink(0.5);
                painter.rect_filled(cell, 0.0, color(palette::coolwarm(value)));

                let annotation = if value.is_nan() {
                    "NaN".to_string()
                } else {
                    format!("{:.2}", value)
                };
                let fg = if palette::needs_light_text(value) {
                    Color32::WHITE
                } else {
                    Color32::BLACK
                };
                painter.text(cell.center(), Align2::CENTER_CENTER, annotation, cell_font.clone(), fg);
            }
        }

        // Full names live in the tooltip
        if let Some(pointer) = response.hover_pos() {
            let local = pointer - origin;
            if local.x >= 0.0 && local.y >= 0.0 {
                let j = (local.x / HEATMAP_CELL) as usize;
                let i = (local.y / HEATMAP_CELL) as usize;
                if i < n && j < n {
                    let text = format!(
                        "{} × {}: {:.3}",
                        matrix.columns[i],
                        matrix.columns[j],
                        matrix.get(i, j)
                    );
                    response.on_hover_text_at_pointer(text);
                }
            }
        }
    }

    /// Descriptive statistics table, one row per numeric column.
    pub fn draw_summary_table(ui: &mut egui::Ui, summaries: &[ColumnSummary]) {
        if summaries.is_empty() {
            ui.label(RichText::new("No numeric columns").color(Color32::GRAY));
            return;
        }

        egui::ScrollArea::horizontal()
            .id_salt("summary_scroll")
            .show(ui, |ui| {
                egui::Grid::new("summary_table")
                    .striped(true)
                    .min_col_width(60.0)
                    .spacing([10.0, 4.0])
                    .show(ui, |ui| {
                        for header in [
                            "Column", "count", "mean", "std", "min", "25%", "50%", "75%", "max",
                        ] {
                            ui.label(RichText::new(header).strong().size(12.0));
                        }
                        ui.end_row();

                        for s in summaries {
                            ui.label(RichText::new(&s.column).size(12.0));
                            ui.label(RichText::new(s.count.to_string()).size(12.0));
                            for value in [s.mean, s.std, s.min, s.p25, s.p50, s.p75, s.max] {
                                ui.label(RichText::new(format_stat(value)).size(12.0));
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    pub fn draw_missing_table(ui: &mut egui::Ui, counts: &[MissingCount]) {
        egui::Grid::new("missing_table")
            .striped(true)
            .min_col_width(80.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Column").strong().size(12.0));
                ui.label(RichText::new("Missing").strong().size(12.0));
                ui.end_row();

                for count in counts {
                    let value_color = if count.missing > 0 {
                        Color32::from_rgb(220, 53, 69)
                    } else {
                        ui.visuals().text_color()
                    };
                    ui.label(RichText::new(&count.column).size(12.0));
                    ui.label(
                        RichText::new(count.missing.to_string())
                            .size(12.0)
                            .color(value_color),
                    );
                    ui.end_row();
                }
            });
    }

    pub fn draw_raw_preview(ui: &mut egui::Ui, preview: &RawPreview) {
        ui.label(
            RichText::new(format!(
                "Showing {} of {} rows",
                preview.rows.len(),
                preview.total_rows
            ))
            .size(11.0)
            .color(Color32::GRAY),
        );

        egui::ScrollArea::both()
            .id_salt("raw_scroll")
            .max_height(320.0)
            .show(ui, |ui| {
                egui::Grid::new("raw_table")
                    .striped(true)
                    .spacing([10.0, 2.0])
                    .show(ui, |ui| {
                        for name in &preview.columns {
                            ui.label(RichText::new(name).strong().size(11.0));
                        }
                        ui.end_row();

                        for row in &preview.rows {
                            for cell in row {
                                match cell {
                                    Some(text) => ui.label(RichText::new(text).size(11.0)),
                                    None => ui.label(
                                        RichText::new(ABSENT).size(11.0).color(Color32::GRAY),
                                    ),
                                };
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
