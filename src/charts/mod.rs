//! Charts module - Chart data preparation and rendering

mod heatmap;
mod plotter;
mod renderer;
mod series;

pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
pub use series::{build_series, check_columns, ChartError, ChartKind, XySeries};
