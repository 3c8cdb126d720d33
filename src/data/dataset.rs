//! Cleaned dataset and the read-only views the pages query.

use polars::prelude::*;

/// Type every cell of a column was coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
}

impl ColumnKind {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
        }
    }
}

/// Load-time facts about one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    pub name: String,
    pub kind: ColumnKind,
    /// Cells that were missing, or zero-filled for numeric columns.
    pub missing: usize,
}

/// Cleaned, immutable table backed by a Polars DataFrame.
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
    profiles: Vec<ColumnProfile>,
}

impl Dataset {
    pub(crate) fn new(df: DataFrame, profiles: Vec<ColumnProfile>) -> Self {
        Self { df, profiles }
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_count(&self) -> usize {
        self.df.width()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }

    pub fn numeric_column_names(&self) -> Vec<String> {
        self.profiles
            .iter()
            .filter(|p| p.kind == ColumnKind::Numeric)
            .map(|p| p.name.clone())
            .collect()
    }

    pub fn profiles(&self) -> &[ColumnProfile] {
        &self.profiles
    }

    pub fn column_kind(&self, name: &str) -> Option<ColumnKind> {
        self.profiles.iter().find(|p| p.name == name).map(|p| p.kind)
    }

    /// Missing (or zero-filled) cell count per column, in column order.
    pub fn missing_counts(&self) -> Vec<(String, usize)> {
        self.profiles
            .iter()
            .map(|p| (p.name.clone(), p.missing))
            .collect()
    }

    pub fn total_missing(&self) -> usize {
        self.profiles.iter().map(|p| p.missing).sum()
    }

    /// First `n` rows as a DataFrame.
    pub fn head(&self, n: usize) -> DataFrame {
        self.df.head(Some(n))
    }

    /// Values of a numeric column; `None` for unknown or text columns.
    pub fn numeric_values(&self, name: &str) -> Option<Vec<f64>> {
        if self.column_kind(name)? != ColumnKind::Numeric {
            return None;
        }
        let ca = self.df.column(name).ok()?.f64().ok()?;
        Some(ca.into_iter().map(|v| v.unwrap_or(0.0)).collect())
    }

    /// Values of a text column; `None` for unknown or numeric columns.
    pub fn text_values(&self, name: &str) -> Option<Vec<String>> {
        if self.column_kind(name)? != ColumnKind::Text {
            return None;
        }
        let column = self.df.column(name).ok()?;
        let ca = column.as_materialized_series().str().ok()?;
        Some(
            ca.into_iter()
                .map(|v| v.unwrap_or_default().to_string())
                .collect(),
        )
    }

    /// Display strings for the first `n` rows, one inner Vec per row.
    pub fn preview(&self, n: usize) -> Vec<Vec<String>> {
        let head = Self::new(self.head(n), self.profiles.clone());
        let columns: Vec<Vec<String>> = self
            .profiles
            .iter()
            .map(|p| match p.kind {
                ColumnKind::Numeric => head
                    .numeric_values(&p.name)
                    .unwrap_or_default()
                    .iter()
                    .map(|v| v.to_string())
                    .collect(),
                ColumnKind::Text => head.text_values(&p.name).unwrap_or_default(),
            })
            .collect();

        (0..head.row_count())
            .map(|row| {
                columns
                    .iter()
                    .map(|col| col.get(row).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::data::{parse_csv_str, ColumnKind, LoadOptions};

    const SAMPLE: &str = "Pregnancies,Glucose,BMI,Group\n\
6,148,33.6,a\n\
1,85,26.6,b\n\
8,183,23.3,a\n\
1,89,28.1,c\n";

    #[test]
    fn test_counts_and_names() {
        let ds = parse_csv_str(SAMPLE, &LoadOptions::default()).unwrap();

        assert_eq!(ds.row_count(), 4);
        assert_eq!(ds.column_count(), 4);
        assert_eq!(ds.column_names(), vec!["Pregnancies", "Glucose", "BMI", "Group"]);
        assert_eq!(ds.numeric_column_names(), vec!["Pregnancies", "Glucose", "BMI"]);
        assert_eq!(ds.column_kind("Group"), Some(ColumnKind::Text));
        assert_eq!(ds.column_kind("Insulin"), None);
    }

    #[test]
    fn test_head_is_clamped_to_row_count() {
        let ds = parse_csv_str(SAMPLE, &LoadOptions::default()).unwrap();

        assert_eq!(ds.head(2).height(), 2);
        assert_eq!(ds.head(20).height(), 4);
    }

    #[test]
    fn test_preview_formats_cells() {
        let ds = parse_csv_str(SAMPLE, &LoadOptions::default()).unwrap();
        let rows = ds.preview(2);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["6", "148", "33.6", "a"]);
        assert_eq!(rows[1], vec!["1", "85", "26.6", "b"]);
    }

    #[test]
    fn test_numeric_columns_hold_no_nulls() {
        let ds = parse_csv_str("a,b\n1,\n,2\n3,4\n", &LoadOptions::default()).unwrap();

        for name in ds.numeric_column_names() {
            let values = ds.numeric_values(&name).unwrap();
            assert_eq!(values.len(), ds.row_count());
            assert!(values.iter().all(|v| v.is_finite()));
        }
        assert_eq!(ds.total_missing(), 2);
    }
}
