//! Diabetes Dashboard Main Application
//! Main window with the sidebar and the selected page.

use crate::config::DashboardConfig;
use crate::data::{Dataset, DatasetCache};
use crate::gui::sidebar::{DataStatus, Page, Sidebar, SidebarAction};
use crate::gui::{banner, ExplorationPage, IntroductionPage, VisualizationPage};
use egui::{RichText, SidePanel};
use std::sync::Arc;

/// Main application window.
pub struct DashboardApp {
    cache: DatasetCache,
    dataset: Result<Arc<Dataset>, String>,
    sidebar: Sidebar,
    introduction: IntroductionPage,
    exploration: ExplorationPage,
    visualization: VisualizationPage,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let cache = DatasetCache::new(config.dataset_path.clone(), config.load_options());
        let mut app = Self {
            cache,
            dataset: Err("Not loaded".to_string()),
            sidebar: Sidebar::new(),
            introduction: IntroductionPage::new(config.image_path.clone()),
            exploration: ExplorationPage::new(config.initial_preview_rows()),
            visualization: VisualizationPage::new(),
        };
        app.load_dataset();
        app
    }

    /// Fetch the table from the cache and hand it to every page.
    fn load_dataset(&mut self) {
        self.dataset = match self.cache.load() {
            Ok(dataset) => {
                self.exploration.on_dataset_loaded();
                self.visualization.on_dataset_loaded(&dataset);
                Ok(dataset)
            }
            Err(e) => {
                log::error!("Failed to load dataset: {}", e);
                Err(e.to_string())
            }
        };
    }

    /// Handle CSV file selection
    fn handle_open_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.cache.set_source(path);
            self.load_dataset();
        }
    }

    fn handle_reload(&mut self) {
        self.cache.reset();
        self.load_dataset();
    }

    fn handle_page_changed(&mut self) {
        self.exploration.on_page_left();
    }

    fn show_page(&mut self, ui: &mut egui::Ui) {
        let dataset = match &self.dataset {
            Ok(dataset) => Arc::clone(dataset),
            Err(error) => {
                banner::error(ui, &format!("Could not load dataset: {}", error));
                return;
            }
        };

        match self.sidebar.page {
            Page::Introduction => self.introduction.show(ui, &dataset),
            Page::DataExploration => self.exploration.show(ui, &dataset),
            Page::Visualization => self.visualization.show(ui, &dataset),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Sidebar
        SidePanel::left("sidebar")
            .min_width(240.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                let status = match &self.dataset {
                    Ok(ds) => DataStatus::Loaded {
                        rows: ds.row_count(),
                        columns: ds.column_count(),
                    },
                    Err(error) => DataStatus::Failed(error),
                };
                let action = self.sidebar.show(ui, self.cache.source(), status);

                match action {
                    SidebarAction::PageChanged => self.handle_page_changed(),
                    SidebarAction::OpenCsv => self.handle_open_csv(),
                    SidebarAction::Reload => self.handle_reload(),
                    SidebarAction::None => {}
                }
            });

        // Central panel - Selected page
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.label(RichText::new("Diabetes Dataset Analysis").size(26.0).strong());
                    ui.add_space(10.0);
                    self.show_page(ui);
                });
        });
    }
}
