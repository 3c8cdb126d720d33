//! Visualization page
//! Axis selectors and tabs for the bar chart, line chart and correlation heatmap.

use crate::charts::{
    build_series, check_columns, ChartError, ChartKind, ChartPlotter, StaticChartRenderer,
    XySeries,
};
use crate::data::Dataset;
use crate::gui::banner;
use crate::stats::{CorrelationMatrix, StatsCalculator};
use egui::{ComboBox, RichText, ScrollArea};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisTab {
    #[default]
    Bar,
    Line,
    Heatmap,
}

impl VisTab {
    pub const ALL: [VisTab; 3] = [VisTab::Bar, VisTab::Line, VisTab::Heatmap];

    pub fn label(&self) -> &'static str {
        match self {
            VisTab::Bar => "Bar Chart",
            VisTab::Line => "Line Chart",
            VisTab::Heatmap => "Correlation Heatmap",
        }
    }
}

type SeriesKey = (usize, usize, ChartKind);

/// Axis selection, active tab and the views derived from them.
pub struct VisualizationPage {
    x: usize,
    y: usize,
    tab: VisTab,
    series: Option<(SeriesKey, Result<Arc<XySeries>, ChartError>)>,
    correlation: Option<CorrelationMatrix>,
    export: Option<Result<PathBuf, String>>,
}

impl Default for VisualizationPage {
    fn default() -> Self {
        Self {
            x: 0,
            y: 1,
            tab: VisTab::default(),
            series: None,
            correlation: None,
            export: None,
        }
    }
}

impl VisualizationPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset selections to the first two columns and drop cached views.
    pub fn on_dataset_loaded(&mut self, dataset: &Dataset) {
        let columns = dataset.column_count();
        self.x = 0;
        self.y = if columns > 1 { 1 } else { 0 };
        self.series = None;
        self.correlation = None;
        self.export = None;
    }

    fn on_axis_changed(&mut self) {
        self.series = None;
    }

    /// Cached series for the current axes; hits share the same allocation.
    fn series_for(
        &mut self,
        dataset: &Dataset,
        kind: ChartKind,
    ) -> Result<Arc<XySeries>, ChartError> {
        let key = (self.x, self.y, kind);
        if let Some((cached, result)) = &self.series {
            if *cached == key {
                return result.clone();
            }
        }

        let names = dataset.column_names();
        let result = match (names.get(self.x), names.get(self.y)) {
            (Some(x), Some(y)) => build_series(dataset, x, y, kind).map(Arc::new),
            _ => Err(ChartError::InsufficientColumns { found: names.len() }),
        };
        self.series = Some((key, result.clone()));
        result
    }

    fn correlation_for(&mut self, dataset: &Dataset) -> &CorrelationMatrix {
        self.correlation
            .get_or_insert_with(|| StatsCalculator::correlation_matrix(dataset))
    }

    fn on_save_heatmap(&mut self, dataset: &Dataset) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("correlation_heatmap.png")
            .save_file()
        else {
            return; // User cancelled
        };

        let result = StaticChartRenderer::save_heatmap_png(self.correlation_for(dataset), &path);
        self.export = Some(match result {
            Ok(()) => Ok(path),
            Err(e) => {
                log::error!("Heatmap export failed: {:#}", e);
                Err(format!("{:#}", e))
            }
        });
    }

    fn on_open_export(path: &Path) {
        if let Err(e) = open::that(path) {
            log::error!("Failed to open {}: {}", path.display(), e);
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, dataset: &Dataset) {
        ui.label(RichText::new("Data Visualization").size(18.0).strong());
        ui.add_space(5.0);

        if let Err(e) = check_columns(dataset) {
            banner::error(ui, &e.to_string());
            return;
        }

        let columns = dataset.column_names();
        let label_width = 140.0;
        let combo_width = 200.0;

        let mut changed = false;
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Select X-axis variable"));
            changed |= Self::column_combo(ui, "x_axis", combo_width, &columns, &mut self.x);
        });
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Select Y-axis variable"));
            changed |= Self::column_combo(ui, "y_axis", combo_width, &columns, &mut self.y);
        });
        if changed {
            self.on_axis_changed();
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            for tab in VisTab::ALL {
                ui.selectable_value(&mut self.tab, tab, RichText::new(tab.label()).size(14.0));
            }
        });
        ui.separator();

        match self.tab {
            VisTab::Bar => {
                ui.label(RichText::new("Bar Chart").size(16.0).strong());
                match self.series_for(dataset, ChartKind::Bar) {
                    Ok(series) => ChartPlotter::draw_bar_chart(ui, &series),
                    Err(e) => banner::error(ui, &e.to_string()),
                }
            }
            VisTab::Line => {
                ui.label(RichText::new("Line Chart").size(16.0).strong());
                match self.series_for(dataset, ChartKind::Line) {
                    Ok(series) => ChartPlotter::draw_line_chart(ui, &series),
                    Err(e @ ChartError::SameAxis(_)) => banner::warning(ui, &e.to_string()),
                    Err(e) => banner::error(ui, &e.to_string()),
                }
            }
            VisTab::Heatmap => self.show_heatmap(ui, dataset),
        }
    }

    fn show_heatmap(&mut self, ui: &mut egui::Ui, dataset: &Dataset) {
        ui.label(RichText::new("Correlation Matrix").size(16.0).strong());

        if self.correlation_for(dataset).is_empty() {
            banner::info(ui, "No numeric columns to correlate");
            return;
        }

        let mut save_clicked = false;
        ui.horizontal(|ui| {
            save_clicked = ui.button("💾 Save PNG…").clicked();

            match &self.export {
                Some(Ok(path)) => {
                    ui.label(
                        RichText::new(format!("Saved {}", path.display()))
                            .size(11.0)
                            .color(banner::SUCCESS_COLOR),
                    );
                    if ui.small_button("Open").clicked() {
                        Self::on_open_export(path);
                    }
                }
                Some(Err(error)) => {
                    ui.label(
                        RichText::new(format!("Export failed: {}", error))
                            .size(11.0)
                            .color(banner::ERROR_COLOR),
                    );
                }
                None => {}
            }
        });
        if save_clicked {
            self.on_save_heatmap(dataset);
        }

        ui.add_space(8.0);
        let matrix = self.correlation_for(dataset);
        ScrollArea::both().id_salt("heatmap_scroll").show(ui, |ui| {
            ChartPlotter::draw_heatmap(ui, matrix);
        });
    }

    /// Column selector; returns true when the selection changed.
    fn column_combo(
        ui: &mut egui::Ui,
        id: &str,
        width: f32,
        columns: &[String],
        selected: &mut usize,
    ) -> bool {
        let mut changed = false;
        let current = columns.get(*selected).cloned().unwrap_or_default();
        ComboBox::from_id_salt(id)
            .width(width)
            .selected_text(current)
            .show_ui(ui, |ui| {
                for (i, col) in columns.iter().enumerate() {
                    if ui.selectable_label(*selected == i, col).clicked() && *selected != i {
                        *selected = i;
                        changed = true;
                    }
                }
            });
        changed
    }
}
