//! Chart Plotter Module
//! Creates interactive visualizations using egui_plot and the egui painter.

use crate::charts::heatmap::{self, HeatmapLayout};
use crate::charts::XySeries;
use crate::stats::{ColumnSummary, CorrelationMatrix, DescribeTable};
use egui::{Align2, Color32, FontId, RichText, Sense};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};
use std::sync::Arc;

/// Series colors
pub const BAR_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
pub const LINE_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red

const CHART_HEIGHT: f32 = 360.0;
const HEATMAP_GUTTER: f32 = 150.0;
const LABEL_CHARS: usize = 16;

/// Creates the dashboard charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Bars of Y at ordinal positions sorted by X.
    pub fn draw_bar_chart(ui: &mut egui::Ui, series: &Arc<XySeries>) {
        let bars: Vec<Bar> = series
            .bar_points()
            .into_iter()
            .map(|[x, y]| Bar::new(x, y).width(0.8).fill(BAR_COLOR))
            .collect();

        let labels = Arc::clone(series);
        Plot::new(format!("bar_{}_{}", series.x_label, series.y_label))
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .x_axis_label(series.x_label.clone())
            .y_axis_label(series.y_label.clone())
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| labels.tick_label(mark.value).unwrap_or_default())
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name(&series.y_label));
            });
    }

    /// Line of Y against X; text X is plotted at ordinal positions.
    pub fn draw_line_chart(ui: &mut egui::Ui, series: &Arc<XySeries>) {
        let points = series.line_points();

        let mut plot = Plot::new(format!("line_{}_{}", series.x_label, series.y_label))
            .height(CHART_HEIGHT)
            .legend(Legend::default())
            .x_axis_label(series.x_label.clone())
            .y_axis_label(series.y_label.clone())
            .allow_scroll(false);
        if let Some(labels) = Self::categorical_labels(series) {
            plot = plot.x_axis_formatter(move |mark, _range| {
                labels.tick_label(mark.value).unwrap_or_default()
            });
        }

        plot.show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from_iter(points.iter().copied()))
                    .color(LINE_COLOR)
                    .width(1.5)
                    .name(&series.y_label),
            );

            if series.len() <= 200 {
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(2.5)
                        .color(LINE_COLOR),
                );
            }
        });
    }

    /// Series whose X ticks need text labels. Numeric X keeps the default grid formatter.
    fn categorical_labels(series: &Arc<XySeries>) -> Option<Arc<XySeries>> {
        series.has_categorical_x().then(|| Arc::clone(series))
    }

    /// Annotated correlation heatmap with hover details.
    pub fn draw_heatmap(ui: &mut egui::Ui, matrix: &CorrelationMatrix) {
        let n = matrix.size();
        let width = ui.available_width().min(900.0);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, width), Sense::hover());

        let layout = HeatmapLayout::fit(
            response.rect.min,
            response.rect.size(),
            HEATMAP_GUTTER,
            n,
        );
        let text_color = ui.visuals().text_color();
        let font = FontId::proportional((layout.cell * 0.22).clamp(9.0, 14.0));

        for row in 0..n {
            for col in 0..n {
                let value = matrix.get(row, col);
                let rect = layout.cell_rect(row, col);
                let (r, g, b) = heatmap::coolwarm(value);
                painter.rect_filled(rect.shrink(0.5), 0.0, Color32::from_rgb(r, g, b));

                let label_color = if heatmap::label_is_light(value) {
                    Color32::WHITE
                } else {
                    Color32::BLACK
                };
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    heatmap::format_cell(value),
                    font.clone(),
                    label_color,
                );
            }
        }

        let grid = layout.grid_rect();
        for (i, name) in matrix.columns().iter().enumerate() {
            let row_rect = layout.cell_rect(i, 0);
            painter.text(
                egui::pos2(grid.left() - 6.0, row_rect.center().y),
                Align2::RIGHT_CENTER,
                Self::short_label(name),
                FontId::proportional(11.0),
                text_color,
            );

            // Column labels alternate between two rows so neighbours do not overlap
            let col_rect = layout.cell_rect(0, i);
            let offset = if i % 2 == 0 { 4.0 } else { 18.0 };
            painter.text(
                egui::pos2(col_rect.center().x, grid.bottom() + offset),
                Align2::CENTER_TOP,
                Self::short_label(name),
                FontId::proportional(11.0),
                text_color,
            );
        }

        if let Some((row, col)) = response.hover_pos().and_then(|p| layout.cell_at(p)) {
            let columns = matrix.columns();
            response.on_hover_text(format!(
                "{} × {}: {}",
                columns[row],
                columns[col],
                heatmap::format_cell(matrix.get(row, col))
            ));
        }
    }

    fn short_label(name: &str) -> String {
        if name.chars().count() <= LABEL_CHARS {
            name.to_string()
        } else {
            let mut short: String = name.chars().take(LABEL_CHARS - 1).collect();
            short.push('…');
            short
        }
    }

    /// Draw describe table: one row per statistic, one column per numeric column.
    pub fn draw_describe_table(ui: &mut egui::Ui, table: &DescribeTable) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::ScrollArea::horizontal()
                    .id_salt("describe_scroll")
                    .show(ui, |ui| {
                        egui::Grid::new("describe_table")
                            .striped(true)
                            .min_col_width(60.0)
                            .spacing([10.0, 4.0])
                            .show(ui, |ui| {
                                ui.label("");
                                for summary in &table.columns {
                                    ui.label(RichText::new(&summary.column).strong().size(11.0));
                                }
                                ui.end_row();

                                for (row, label) in ColumnSummary::LABELS.iter().enumerate() {
                                    ui.label(RichText::new(*label).strong().size(11.0));
                                    for summary in &table.columns {
                                        let value = summary.values()[row];
                                        ui.label(
                                            RichText::new(Self::format_stat(value)).size(11.0),
                                        );
                                    }
                                    ui.end_row();
                                }
                            });
                    });
            });
    }

    fn format_stat(value: f64) -> String {
        if value.is_nan() {
            "NaN".to_string()
        } else {
            format!("{:.3}", value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{build_series, ChartKind};
    use crate::data::{parse_csv_str, LoadOptions};

    fn series(text: &str, x: &str, y: &str) -> Arc<XySeries> {
        let ds = parse_csv_str(text, &LoadOptions::default()).unwrap();
        Arc::new(build_series(&ds, x, y, ChartKind::Line).unwrap())
    }

    #[test]
    fn test_numeric_x_uses_default_ticks() {
        let numeric = series("a,b\n0.1,1\n0.3,2\n", "a", "b");
        assert!(ChartPlotter::categorical_labels(&numeric).is_none());
    }

    #[test]
    fn test_text_x_shares_series_for_ticks() {
        let text = series("group,v\nlow,1\nhigh,2\n", "group", "v");
        let labels = ChartPlotter::categorical_labels(&text).unwrap();
        assert!(Arc::ptr_eq(&labels, &text));
        assert_eq!(labels.tick_label(0.0).as_deref(), Some("high"));
    }

    #[test]
    fn test_short_label() {
        assert_eq!(ChartPlotter::short_label("BMI"), "BMI");
        assert_eq!(
            ChartPlotter::short_label("DiabetesPedigreeFunction"),
            "DiabetesPedigre…"
        );
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(ChartPlotter::format_stat(120.894531), "120.895");
        assert_eq!(ChartPlotter::format_stat(f64::NAN), "NaN");
    }
}
