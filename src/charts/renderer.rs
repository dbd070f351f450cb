//! Static Chart Renderer
//! Writes correlation heatmaps and ranking bar charts to PNG files with plotters.
//!
//! Layout mirrors the interactive dashboard:
//! - Heatmap: annotated cells on a coolwarm scale, column names rotated on x
//! - Ranking: horizontal bars, largest value on top, one palette step per bar

use crate::charts::palette::{self, BarPalette, Rgb};
use crate::charts::plotter::{short_label, ABSENT};
use crate::stats::{CorrelationMatrix, TopNRanking};
use anyhow::Result;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::path::Path;

const FONT: &str = "sans-serif";

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

fn centered() -> Pos {
    Pos::new(HPos::Center, VPos::Center)
}

/// Bar axis spanning zero and every present value, with headroom.
fn value_axis(ranking: &TopNRanking) -> (f64, f64) {
    let present = || ranking.rows.iter().filter_map(|r| r.value);
    let max_value = present().fold(0.0_f64, f64::max);
    let min_value = present().fold(0.0_f64, f64::min);
    let x_max = if max_value > 0.0 { max_value * 1.1 } else { 0.0 };
    let x_min = if min_value < 0.0 { min_value * 1.1 } else { 0.0 };
    // Keep a visible axis when every value is zero
    if x_max == x_min {
        (0.0, 1.0)
    } else {
        (x_min, x_max)
    }
}

pub struct ChartRenderer;

impl ChartRenderer {
    /// Render an annotated correlation heatmap as a square PNG.
    pub fn render_heatmap_png(
        matrix: &CorrelationMatrix,
        title: &str,
        path: &Path,
        size: u32,
    ) -> Result<()> {
        let n = matrix.len() as i32;
        if n == 0 {
            anyhow::bail!("correlation matrix is empty");
        }

        let root = BitMapBackend::new(path, (size, size)).into_drawing_area();
        root.fill(&WHITE)?;

        let names = &matrix.columns;
        // Row 0 is drawn at the top
        let row_at = |y: i32| (n - 1 - y) as usize;
        // Segmented axes also emit a label past the last segment
        let axis_label = |idx: i32, flip: bool| {
            if !(0..n).contains(&idx) {
                return String::new();
            }
            let i = if flip { row_at(idx) } else { idx as usize };
            names.get(i).map(|s| short_label(s, 24)).unwrap_or_default()
        };

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT, 24).into_font())
            .margin(20)
            .x_label_area_size(140)
            .y_label_area_size(160)
            .build_cartesian_2d((0..n).into_segmented(), (0..n).into_segmented())?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(n as usize)
            .y_labels(n as usize)
            .x_label_style((FONT, 13).into_font().transform(FontTransform::Rotate90))
            .y_label_style((FONT, 13).into_font())
            .x_label_formatter(&|v: &SegmentValue<i32>| match v {
                SegmentValue::CenterOf(j) => axis_label(*j, false),
                _ => String::new(),
            })
            .y_label_formatter(&|v: &SegmentValue<i32>| match v {
                SegmentValue::CenterOf(y) => axis_label(*y, true),
                _ => String::new(),
            })
            .draw()?;

        let cells: Vec<(i32, i32, f64)> = (0..n)
            .flat_map(|y| (0..n).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, matrix.get(row_at(y), x as usize)))
            .collect();

        chart.draw_series(cells.iter().map(|&(x, y, value)| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(x), SegmentValue::Exact(y)),
                    (SegmentValue::Exact(x + 1), SegmentValue::Exact(y + 1)),
                ],
                rgb(palette::coolwarm(value)).filled(),
            )
        }))?;

        chart.draw_series(cells.iter().map(|&(x, y, value)| {
            let fg = if palette::needs_light_text(value) {
                WHITE
            } else {
                BLACK
            };
            let text = if value.is_nan() {
                "NaN".to_string()
            } else {
                format!("{:.2}", value)
            };
            Text::new(
                text,
                (SegmentValue::CenterOf(x), SegmentValue::CenterOf(y)),
                (FONT, 14).into_font().color(&fg).pos(centered()),
            )
        }))?;

        root.present()?;
        Ok(())
    }

    /// Render a ranking as horizontal bars, largest value on top.
    pub fn render_ranking_png(
        ranking: &TopNRanking,
        title: &str,
        bar_palette: BarPalette,
        path: &Path,
        (width, height): (u32, u32),
    ) -> Result<()> {
        let n = ranking.rows.len() as i32;
        if n == 0 {
            anyhow::bail!("ranking has no rows");
        }

        let labels: Vec<String> = ranking
            .rows
            .iter()
            .map(|r| r.label.clone().unwrap_or_else(|| ABSENT.to_string()))
            .collect();
        let row_at = |y: i32| (n - 1 - y) as usize;

        let (x_min, x_max) = value_axis(ranking);

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT, 24).into_font())
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(200)
            .build_cartesian_2d(x_min..x_max, (0..n).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(n as usize)
            .x_desc(ranking.rank_column.as_str())
            .y_desc(ranking.label_column.as_str())
            .label_style((FONT, 13).into_font())
            .y_label_formatter(&|v: &SegmentValue<i32>| match v {
                SegmentValue::CenterOf(y) if (0..n).contains(y) => labels
                    .get(row_at(*y))
                    .map(|l| short_label(l, 28))
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        let count = n as usize;
        let bars: Vec<(i32, f64, RGBColor)> = (0..n)
            .filter_map(|y| {
                let idx = row_at(y);
                let value = ranking.rows[idx].value?;
                Some((y, value, rgb(bar_palette.color(idx, count))))
            })
            .collect();

        chart.draw_series(bars.iter().map(|&(y, value, color)| {
            Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(y)),
                    (value, SegmentValue::Exact(y + 1)),
                ],
                color.filled(),
            )
        }))?;

        // White outline separates neighbouring bars
        chart.draw_series(bars.iter().map(|&(y, value, _)| {
            Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(y)),
                    (value, SegmentValue::Exact(y + 1)),
                ],
                WHITE.stroke_width(4),
            )
        }))?;

        root.present()?;
        Ok(())
    }
}
