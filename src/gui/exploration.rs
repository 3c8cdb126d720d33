//! Data Exploration page: preview, missing values and summary statistics.

use crate::charts::ChartPlotter;
use crate::config::PREVIEW_ROWS;
use crate::data::{ColumnKind, Dataset};
use crate::gui::banner;
use crate::stats::{DescribeTable, StatsCalculator};
use egui::{RichText, ScrollArea};

pub struct ExplorationPage {
    rows: usize,
    preview: Option<Vec<Vec<String>>>,
    show_describe: bool,
    describe: Option<DescribeTable>,
}

impl ExplorationPage {
    pub fn new(rows: usize) -> Self {
        Self {
            rows: rows.clamp(*PREVIEW_ROWS.start(), *PREVIEW_ROWS.end()),
            preview: None,
            show_describe: false,
            describe: None,
        }
    }

    /// Drop views derived from the previous table.
    pub fn on_dataset_loaded(&mut self) {
        self.preview = None;
        self.describe = None;
        self.show_describe = false;
    }

    /// Hide the describe table again when the user navigates away.
    pub fn on_page_left(&mut self) {
        self.show_describe = false;
    }

    fn on_rows_changed(&mut self) {
        self.preview = None;
    }

    fn on_describe_clicked(&mut self, dataset: &Dataset) {
        self.show_describe = true;
        if self.describe.is_none() {
            self.describe = Some(StatsCalculator::describe(dataset));
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, dataset: &Dataset) {
        // ===== Data Preview =====
        ui.label(RichText::new("Data Preview").size(18.0).strong());
        ui.add_space(5.0);

        let slider = egui::Slider::new(&mut self.rows, PREVIEW_ROWS)
            .text("Select number of rows to display");
        if ui.add(slider).changed() {
            self.on_rows_changed();
        }

        let rows = self.rows;
        let preview = self.preview.get_or_insert_with(|| dataset.preview(rows));
        Self::draw_preview(ui, &dataset.column_names(), preview);

        ui.add_space(15.0);
        ui.separator();

        // ===== Missing Values =====
        ui.label(RichText::new("Missing Values").size(18.0).strong());
        ui.add_space(5.0);
        Self::draw_missing(ui, dataset);
        ui.add_space(5.0);
        if dataset.total_missing() == 0 {
            banner::success(ui, "No missing values found");
        } else {
            banner::warning(ui, "Dataset contains missing values");
        }

        ui.add_space(15.0);
        ui.separator();

        // ===== Summary Statistics =====
        ui.label(RichText::new("Summary Statistics").size(18.0).strong());
        ui.add_space(5.0);
        if ui.button("Show Describe Table").clicked() {
            self.on_describe_clicked(dataset);
        }

        if self.show_describe {
            ui.add_space(5.0);
            match &self.describe {
                Some(table) if !table.is_empty() => ChartPlotter::draw_describe_table(ui, table),
                _ => banner::info(ui, "No numeric columns to describe"),
            }
        }
    }

    fn draw_preview(ui: &mut egui::Ui, columns: &[String], rows: &[Vec<String>]) {
        ScrollArea::horizontal()
            .id_salt("preview_scroll")
            .show(ui, |ui| {
                egui::Grid::new("preview_table")
                    .striped(true)
                    .min_col_width(50.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("");
                        for name in columns {
                            ui.label(RichText::new(name).strong().size(11.0));
                        }
                        ui.end_row();

                        for (i, row) in rows.iter().enumerate() {
                            ui.label(RichText::new(i.to_string()).weak().size(11.0));
                            for cell in row {
                                ui.label(RichText::new(cell).size(11.0));
                            }
                            ui.end_row();
                        }
                    });
            });
    }

    fn draw_missing(ui: &mut egui::Ui, dataset: &Dataset) {
        egui::Grid::new("missing_table")
            .striped(true)
            .min_col_width(80.0)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Column").strong().size(11.0));
                ui.label(RichText::new("Type").strong().size(11.0));
                ui.label(RichText::new("Missing").strong().size(11.0));
                ui.end_row();

                for (name, missing) in dataset.missing_counts() {
                    let kind = dataset.column_kind(&name).map(|k| k.label()).unwrap_or("");
                    ui.label(RichText::new(&name).size(11.0));
                    ui.label(RichText::new(kind).size(11.0));
                    ui.label(RichText::new(missing.to_string()).size(11.0));
                    ui.end_row();
                }
            });

        let numeric_missing: usize = dataset
            .profiles()
            .iter()
            .filter(|p| p.kind == ColumnKind::Numeric)
            .map(|p| p.missing)
            .sum();
        if numeric_missing > 0 {
            ui.label(
                RichText::new(format!(
                    "{} numeric cells were missing or invalid and are shown as 0",
                    numeric_missing
                ))
                .size(11.0)
                .weak(),
            );
        }
    }
}
