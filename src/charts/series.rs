//! X/Y series preparation for the bar and line charts.

use crate::data::{ColumnKind, Dataset};
use std::cmp::Ordering;
use thiserror::Error;

/// Minimum number of columns the visualization page needs.
pub const MIN_CHART_COLUMNS: usize = 2;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Dataset needs at least 2 columns for visualization (found {found})")]
    InsufficientColumns { found: usize },
    #[error("Select different columns for the X and Y axes (both are '{0}')")]
    SameAxis(String),
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),
    #[error("Column '{0}' is not numeric and cannot be used as the Y axis")]
    NonNumeric(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

/// X values after sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisValues {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

/// Rows of two columns sorted by the X column.
#[derive(Debug, Clone, PartialEq)]
pub struct XySeries {
    pub x_label: String,
    pub y_label: String,
    pub x: AxisValues,
    pub y: Vec<f64>,
}

impl XySeries {
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Bars sit at ordinal positions; `tick_label` maps them back to X values.
    pub fn bar_points(&self) -> Vec<[f64; 2]> {
        self.y
            .iter()
            .enumerate()
            .map(|(i, &y)| [i as f64, y])
            .collect()
    }

    /// Numeric X is plotted at its value, text X at ordinal positions.
    pub fn line_points(&self) -> Vec<[f64; 2]> {
        match &self.x {
            AxisValues::Numeric(xs) => xs.iter().zip(&self.y).map(|(&x, &y)| [x, y]).collect(),
            AxisValues::Categorical(_) => self.bar_points(),
        }
    }

    /// Label for an ordinal position, if one exists there.
    pub fn tick_label(&self, position: f64) -> Option<String> {
        if position < 0.0 || (position - position.round()).abs() > 1e-6 {
            return None;
        }
        let idx = position.round() as usize;
        match &self.x {
            AxisValues::Numeric(xs) => xs.get(idx).map(|v| v.to_string()),
            AxisValues::Categorical(xs) => xs.get(idx).cloned(),
        }
    }

    pub fn has_categorical_x(&self) -> bool {
        matches!(self.x, AxisValues::Categorical(_))
    }
}

/// Fail early when the dataset cannot be charted at all.
pub fn check_columns(dataset: &Dataset) -> Result<(), ChartError> {
    let found = dataset.column_count();
    if found < MIN_CHART_COLUMNS {
        return Err(ChartError::InsufficientColumns { found });
    }
    Ok(())
}

/// Build the series for a chart of `y` against `x`, sorted by `x`.
pub fn build_series(
    dataset: &Dataset,
    x: &str,
    y: &str,
    kind: ChartKind,
) -> Result<XySeries, ChartError> {
    check_columns(dataset)?;

    let x_kind = dataset
        .column_kind(x)
        .ok_or_else(|| ChartError::UnknownColumn(x.to_string()))?;
    if dataset.column_kind(y).is_none() {
        return Err(ChartError::UnknownColumn(y.to_string()));
    }
    if kind == ChartKind::Line && x == y {
        return Err(ChartError::SameAxis(x.to_string()));
    }

    let y_values = dataset
        .numeric_values(y)
        .ok_or_else(|| ChartError::NonNumeric(y.to_string()))?;

    let (x_values, order) = match x_kind {
        ColumnKind::Numeric => {
            let xs = dataset.numeric_values(x).unwrap_or_default();
            let order = sorted_order(&xs, |a, b| a.total_cmp(b));
            let sorted = order.iter().map(|&i| xs[i]).collect();
            (AxisValues::Numeric(sorted), order)
        }
        ColumnKind::Text => {
            let xs = dataset.text_values(x).unwrap_or_default();
            let order = sorted_order(&xs, |a, b| a.cmp(b));
            let sorted = order.iter().map(|&i| xs[i].clone()).collect();
            (AxisValues::Categorical(sorted), order)
        }
    };

    Ok(XySeries {
        x_label: x.to_string(),
        y_label: y.to_string(),
        x: x_values,
        y: order.iter().map(|&i| y_values[i]).collect(),
    })
}

/// Stable sort permutation of `values`.
fn sorted_order<T>(values: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| cmp(&values[a], &values[b]));
    order
}
