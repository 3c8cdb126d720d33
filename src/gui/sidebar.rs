//! Sidebar
//! Page selector and data source controls.

use egui::{Color32, ComboBox, RichText};
use std::path::Path;

/// Dashboard pages, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Introduction,
    DataExploration,
    Visualization,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Introduction, Page::DataExploration, Page::Visualization];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Introduction => "Introduction",
            Page::DataExploration => "Data Exploration",
            Page::Visualization => "Visualization",
        }
    }
}

/// What the dataset looks like from the sidebar's point of view.
pub enum DataStatus<'a> {
    Loaded { rows: usize, columns: usize },
    Failed(&'a str),
}

/// Actions triggered by the sidebar
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    None,
    PageChanged,
    OpenCsv,
    Reload,
}

/// Left side panel with page selection and data source.
#[derive(Default)]
pub struct Sidebar {
    pub page: Page,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the sidebar
    pub fn show(&mut self, ui: &mut egui::Ui, source: &Path, status: DataStatus<'_>) -> SidebarAction {
        let mut action = SidebarAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🩺 Diabetes Analysis Dashboard")
                    .size(18.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Page Selection =====
        ui.label(RichText::new("Select Page").size(14.0).strong());
        ui.add_space(5.0);

        ComboBox::from_id_salt("page_select")
            .width(ui.available_width() - 10.0)
            .selected_text(self.page.label())
            .show_ui(ui, |ui| {
                for page in Page::ALL {
                    if ui
                        .selectable_label(self.page == page, page.label())
                        .clicked()
                        && self.page != page
                    {
                        self.page = page;
                        action = SidebarAction::PageChanged;
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Data Source =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let file_name = source
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| source.display().to_string());
                ui.label(RichText::new(file_name).size(12.0));

                match status {
                    DataStatus::Loaded { rows, columns } => {
                        ui.label(
                            RichText::new(format!("{} rows × {} columns", rows, columns))
                                .size(11.0)
                                .color(Color32::from_rgb(40, 167, 69)),
                        );
                    }
                    DataStatus::Failed(error) => {
                        ui.label(
                            RichText::new(format!("Error: {}", error))
                                .size(11.0)
                                .color(Color32::from_rgb(220, 53, 69)),
                        );
                    }
                }

                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    if ui.button("📂 Open CSV…").clicked() {
                        action = SidebarAction::OpenCsv;
                    }
                    if ui.button("🔄 Reload").clicked() {
                        action = SidebarAction::Reload;
                    }
                });
            });

        action
    }
}
