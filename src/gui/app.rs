//! Food Explorer Main Application
//! Main window with control panel and dashboard view.

use crate::config::ExplorerConfig;
use crate::dashboard::{DashboardReport, Dataset, ViewFlags};
use crate::export::ReportExporter;
use crate::gui::control_panel::StatusKind;
use crate::gui::{ControlPanel, ControlPanelAction, DashboardView};
use egui::SidePanel;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use tracing::{error, info};

/// CSV loading result from background thread
enum LoadResult {
    Complete { dataset: Dataset, path: PathBuf },
    Error { error: String, path: PathBuf },
    /// The loader thread ended without sending anything.
    Lost,
}

/// Non-blocking poll of the loader channel; `None` while still loading.
fn poll_load(rx: &Receiver<LoadResult>) -> Option<LoadResult> {
    match rx.try_recv() {
        Ok(result) => Some(result),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(LoadResult::Lost),
    }
}

/// Main application window.
pub struct ExplorerApp {
    config: ExplorerConfig,
    config_path: PathBuf,
    control_panel: ControlPanel,
    dashboard_view: DashboardView,

    dataset: Option<Dataset>,
    report: Option<DashboardReport>,
    // Flags the current report was built with
    report_flags: Option<ViewFlags>,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl ExplorerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: ExplorerConfig,
        config_path: PathBuf,
        initial_file: Option<PathBuf>,
    ) -> Self {
        let mut app = Self {
            control_panel: ControlPanel::new(config.views, config.top_n),
            dashboard_view: DashboardView::new(),
            config,
            config_path,
            dataset: None,
            report: None,
            report_flags: None,
            load_rx: None,
            is_loading: false,
        };

        if let Some(path) = initial_file {
            app.start_loading(path);
        }
        app
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_loading(path);
        }
    }

    /// Load a CSV file in a background thread
    fn start_loading(&mut self, path: PathBuf) {
        self.control_panel.csv_path = Some(path.clone());
        self.control_panel
            .set_status(StatusKind::Info, "Loading CSV file...");
        self.control_panel.is_busy = true;
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match Dataset::load_path(&path) {
                Ok(dataset) => LoadResult::Complete { dataset, path },
                Err(e) => LoadResult::Error {
                    error: e.to_string(),
                    path,
                },
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match poll_load(&rx) {
            Some(LoadResult::Complete { dataset, path }) => {
                let table = dataset.table();
                self.control_panel.set_status(
                    StatusKind::Success,
                    &format!(
                        "File successfully loaded! {} rows, {} columns",
                        table.row_count(),
                        table.column_count()
                    ),
                );
                info!(path = %path.display(), "dataset loaded");
                self.control_panel.roles = Some(dataset.roles().clone());
                // A new file replaces the previous dataset and its report
                self.dataset = Some(dataset);
                self.report = None;
                self.report_flags = None;
                self.finish_loading();
            }
            Some(LoadResult::Error { error, path }) => {
                error!(path = %path.display(), %error, "failed to load CSV");
                self.control_panel
                    .set_status(StatusKind::Error, &format!("Error: {}", error));
                self.finish_loading();
            }
            Some(LoadResult::Lost) => {
                error!("CSV loader thread exited without a result");
                self.control_panel.set_status(
                    StatusKind::Error,
                    "Error: loading stopped unexpectedly",
                );
                self.finish_loading();
            }
            None => {
                // Still loading
                self.load_rx = Some(rx);
            }
        }
    }

    fn finish_loading(&mut self) {
        self.is_loading = false;
        self.control_panel.is_busy = false;
    }

    /// Rebuild the report when the dataset or the view toggles changed
    fn refresh_report(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        let flags = self.control_panel.flags;
        if self.report_flags == Some(flags) {
            return;
        }

        match dataset.build_report(&flags, &self.config.report_options()) {
            Ok(report) => self.report = Some(report),
            Err(e) => {
                error!(error = %e, "failed to build report");
                self.report = None;
                self.control_panel
                    .set_status(StatusKind::Error, &format!("Error: {}", e));
            }
        }
        self.report_flags = Some(flags);
    }

    /// Export the current report's charts and JSON into a chosen folder
    fn handle_export(&mut self) {
        let Some(report) = &self.report else {
            self.control_panel
                .set_status(StatusKind::Info, "Nothing to export");
            return;
        };

        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return; // User cancelled
        };

        match ReportExporter::export(report, &dir, &self.config.export) {
            Ok(files) => {
                self.control_panel.set_status(
                    StatusKind::Success,
                    &format!("Exported {} files to {}", files.len(), dir.display()),
                );
                if let Err(e) = open::that(&dir) {
                    error!(error = %e, "could not open export folder");
                }
            }
            Err(e) => {
                error!(error = %e, "export failed");
                self.control_panel
                    .set_status(StatusKind::Error, &format!("Export error: {:#}", e));
            }
        }
    }

    fn handle_save_settings(&mut self) {
        self.config.views = self.control_panel.flags;
        match self.config.save(&self.config_path) {
            Ok(()) => self.control_panel.set_status(
                StatusKind::Success,
                &format!("Settings saved to {}", self.config_path.display()),
            ),
            Err(e) => self
                .control_panel
                .set_status(StatusKind::Error, &format!("Error: {}", e)),
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::Export => {
                            self.refresh_report();
                            self.handle_export();
                        }
                        ControlPanelAction::SaveSettings => self.handle_save_settings(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        self.refresh_report();

        // Central panel - Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard_view.show(ui, self.report.as_ref());
        });
    }
}
