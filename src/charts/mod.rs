//! Charts module - interactive widgets and static PNG rendering

pub mod palette;
mod plotter;
mod renderer;

pub use palette::BarPalette;
pub use plotter::{short_label, ChartPlotter, ABSENT};
pub use renderer::ChartRenderer;
