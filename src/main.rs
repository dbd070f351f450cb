//! Food Explorer - Food Nutrition Dataset Explorer
//!
//! Desktop dashboard for exploring a food-nutrition CSV.
//! Usage: `food_explorer [FILE.csv]`

use eframe::egui;
use food_explorer::config::ExplorerConfig;
use food_explorer::gui::ExplorerApp;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = ExplorerConfig::default_path();
    let config = ExplorerConfig::load_or_default(&config_path);
    let initial_file = std::env::args_os().nth(1).map(PathBuf::from);
    info!(config = %config_path.display(), "starting Food Explorer");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 650.0])
            .with_title("Food Nutrition EDA"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Food Nutrition EDA",
        options,
        Box::new(move |cc| Ok(Box::new(ExplorerApp::new(cc, config, config_path, initial_file)))),
    )
}
