//! CSV Data Loader Module
//! Reads the source CSV, normalizes headers and coerces every column to a
//! single type before handing the table to Polars.

use super::dataset::{ColumnKind, ColumnProfile, Dataset};
use polars::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Cell tokens treated as missing, matching the usual dataframe reader defaults.
pub const MISSING_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV has no header row")]
    EmptyFile,
    #[error("Failed to build table: {0}")]
    Frame(#[from] PolarsError),
}

/// Per-column type overrides applied on top of inference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Columns forced to numeric; invalid cells become zero.
    pub numeric_columns: Vec<String>,
    /// Columns forced to text even if every cell looks like a number.
    pub text_columns: Vec<String>,
}

impl LoadOptions {
    fn declared_kind(&self, name: &str) -> Option<ColumnKind> {
        if self.text_columns.iter().any(|c| c == name) {
            Some(ColumnKind::Text)
        } else if self.numeric_columns.iter().any(|c| c == name) {
            Some(ColumnKind::Numeric)
        } else {
            None
        }
    }
}

/// A column after header cleanup, still holding raw cells.
struct RawColumn {
    name: String,
    /// Position of the column in the original header row.
    source_index: usize,
    cells: Vec<String>,
}

/// Load and clean a CSV file from disk.
pub fn load_csv(path: &Path, options: &LoadOptions) -> Result<Dataset, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_reader(file, options)?;
    log::info!(
        "Loaded {} rows, {} columns from {}",
        dataset.row_count(),
        dataset.column_count(),
        path.display()
    );
    Ok(dataset)
}

/// Load and clean CSV text held in memory.
#[cfg(test)]
pub fn parse_csv_str(text: &str, options: &LoadOptions) -> Result<Dataset, LoaderError> {
    parse_reader(text.as_bytes(), options)
}

/// Load and clean CSV from any reader.
pub fn parse_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Dataset, LoaderError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = rdr.records();
    let header = match records.next() {
        Some(record) => record?,
        None => return Err(LoaderError::EmptyFile),
    };

    let mut columns = clean_headers(header.iter());

    let mut ragged_rows = 0usize;
    for record in records {
        let record = record?;
        if record.len() != header.len() {
            ragged_rows += 1;
        }
        for column in &mut columns {
            let cell = record.get(column.source_index).unwrap_or("");
            column.cells.push(cell.to_string());
        }
    }

    if ragged_rows > 0 {
        log::warn!(
            "{} rows had a different field count than the header; padded or truncated",
            ragged_rows
        );
    }

    build_dataset(columns, options)
}

/// Trim header names, name blank headers and drop later duplicates.
fn clean_headers<'a>(names: impl Iterator<Item = &'a str>) -> Vec<RawColumn> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut columns = Vec::new();

    for (i, raw) in names.enumerate() {
        let trimmed = raw.trim();
        let name = if trimmed.is_empty() {
            format!("Unnamed: {}", i)
        } else {
            trimmed.to_string()
        };

        if !seen.insert(name.clone()) {
            log::debug!("Dropping duplicate column '{}' at position {}", name, i);
            continue;
        }

        columns.push(RawColumn {
            name,
            source_index: i,
            cells: Vec::new(),
        });
    }

    columns
}

fn is_missing(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell.trim())
}

/// Parse a cell as a finite number, or `None` when it cannot be.
fn parse_finite(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Infer a column kind: numeric when every non-missing cell is a finite number.
fn infer_kind(cells: &[String]) -> ColumnKind {
    let all_numeric = cells
        .iter()
        .filter(|c| !is_missing(c))
        .all(|c| parse_finite(c).is_some());

    if all_numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Text
    }
}

fn build_dataset(columns: Vec<RawColumn>, options: &LoadOptions) -> Result<Dataset, LoaderError> {
    let mut frame_columns: Vec<Column> = Vec::with_capacity(columns.len());
    let mut profiles: Vec<ColumnProfile> = Vec::with_capacity(columns.len());

    for raw in columns {
        let kind = options
            .declared_kind(&raw.name)
            .unwrap_or_else(|| infer_kind(&raw.cells));

        let missing = match kind {
            ColumnKind::Numeric => {
                let (values, substituted) = coerce_numeric(&raw.cells);
                if substituted > 0 {
                    log::warn!(
                        "Column '{}': {} missing or invalid values replaced with 0",
                        raw.name,
                        substituted
                    );
                }
                frame_columns.push(Column::new(raw.name.as_str().into(), values));
                substituted
            }
            ColumnKind::Text => {
                let (values, missing) = coerce_text(raw.cells);
                frame_columns.push(Column::new(raw.name.as_str().into(), values));
                missing
            }
        };

        profiles.push(ColumnProfile {
            name: raw.name,
            kind,
            missing,
        });
    }

    let df = DataFrame::new(frame_columns)?;
    Ok(Dataset::new(df, profiles))
}

/// Parse every cell as a number, substituting zero for anything invalid.
/// Returns the values and the number of substituted cells.
fn coerce_numeric(cells: &[String]) -> (Vec<f64>, usize) {
    let mut substituted = 0;
    let values = cells
        .iter()
        .map(|cell| match parse_finite(cell) {
            Some(v) => v,
            None => {
                substituted += 1;
                0.0
            }
        })
        .collect();
    (values, substituted)
}

/// Keep every cell as text; missing tokens become empty strings.
fn coerce_text(cells: Vec<String>) -> (Vec<String>, usize) {
    let mut missing = 0;
    let values = cells
        .into_iter()
        .map(|cell| {
            if is_missing(&cell) {
                missing += 1;
                String::new()
            } else {
                cell
            }
        })
        .collect();
    (values, missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn numeric(names: &[&str]) -> LoadOptions {
        LoadOptions {
            numeric_columns: names.iter().map(|s| s.to_string()).collect(),
            text_columns: Vec::new(),
        }
    }

    #[test]
    fn test_duplicate_header_keeps_first_occurrence() {
        let ds = parse_csv_str("a,a,b\n1,2,3\n4,5,6", &LoadOptions::default()).unwrap();

        assert_eq!(ds.column_names(), vec!["a", "b"]);
        assert_eq!(ds.numeric_values("a").unwrap(), vec![1.0, 4.0]);
        assert_eq!(ds.numeric_values("b").unwrap(), vec![3.0, 6.0]);
    }

    #[test]
    fn test_declared_numeric_column_zero_fills() {
        let ds = parse_csv_str("a,b\n1,x\n2,", &numeric(&["b"])).unwrap();

        assert_eq!(ds.column_kind("b"), Some(ColumnKind::Numeric));
        assert_eq!(ds.numeric_values("b").unwrap(), vec![0.0, 0.0]);
        assert_eq!(ds.numeric_values("a").unwrap(), vec![1.0, 2.0]);
        assert_eq!(ds.profiles()[1].missing, 2);
    }

    #[test]
    fn test_headers_are_trimmed() {
        let ds = parse_csv_str(" Glucose , BMI\n148,33.6\n", &LoadOptions::default()).unwrap();
        assert_eq!(ds.column_names(), vec!["Glucose", "BMI"]);
    }

    #[test]
    fn test_trimmed_headers_collapse_to_duplicates() {
        let ds = parse_csv_str("Age, Age ,Outcome\n50,51,1\n", &LoadOptions::default()).unwrap();
        assert_eq!(ds.column_names(), vec!["Age", "Outcome"]);
        assert_eq!(ds.numeric_values("Age").unwrap(), vec![50.0]);
    }

    #[test]
    fn test_blank_header_is_named_by_position() {
        let ds = parse_csv_str(",value\n0,1.5\n", &LoadOptions::default()).unwrap();
        assert_eq!(ds.column_names(), vec!["Unnamed: 0", "value"]);
    }

    #[test]
    fn test_mixed_column_becomes_text() {
        let ds = parse_csv_str("id,label\n1,10\n2,abc\n", &LoadOptions::default()).unwrap();

        assert_eq!(ds.column_kind("label"), Some(ColumnKind::Text));
        assert_eq!(ds.text_values("label").unwrap(), vec!["10", "abc"]);
        assert!(ds.numeric_values("label").is_none());
    }

    #[test]
    fn test_text_override_wins_over_inference() {
        let options = LoadOptions {
            numeric_columns: Vec::new(),
            text_columns: vec!["Outcome".to_string()],
        };
        let ds = parse_csv_str("Glucose,Outcome\n148,1\n85,0\n", &options).unwrap();

        assert_eq!(ds.column_kind("Outcome"), Some(ColumnKind::Text));
        assert_eq!(ds.numeric_column_names(), vec!["Glucose"]);
    }

    #[test]
    fn test_missing_tokens_in_inferred_numeric_column() {
        let ds = parse_csv_str("x\n1\nNA\n\n3\n", &LoadOptions::default()).unwrap();

        // csv skips the fully blank line
        assert_eq!(ds.column_kind("x"), Some(ColumnKind::Numeric));
        assert_eq!(ds.numeric_values("x").unwrap(), vec![1.0, 0.0, 3.0]);
        assert_eq!(ds.total_missing(), 1);
    }

    #[test]
    fn test_non_finite_numbers_are_replaced() {
        let ds = parse_csv_str("x,y\ninf,1\n2,2\n", &numeric(&["x"])).unwrap();
        let values = ds.numeric_values("x").unwrap();

        assert!(values.iter().all(|v| v.is_finite()));
        assert_eq!(values, vec![0.0, 2.0]);
    }

    #[test]
    fn test_text_missing_cells_are_counted() {
        let ds = parse_csv_str("name,n\nann,1\n,2\nNULL,3\n", &LoadOptions::default()).unwrap();

        assert_eq!(ds.text_values("name").unwrap(), vec!["ann", "", ""]);
        assert_eq!(ds.missing_counts(), vec![("name".to_string(), 2), ("n".to_string(), 0)]);
    }

    #[test]
    fn test_ragged_rows_are_padded_and_truncated() {
        let ds = parse_csv_str("a,b\n1\n2,3,4\n", &LoadOptions::default()).unwrap();

        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.column_count(), 2);
        assert_eq!(ds.numeric_values("b").unwrap(), vec![0.0, 3.0]);
    }

    #[test]
    fn test_header_only_file() {
        let ds = parse_csv_str("a,b,c\n", &LoadOptions::default()).unwrap();
        assert_eq!(ds.row_count(), 0);
        assert_eq!(ds.column_count(), 3);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let err = parse_csv_str("", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoaderError::EmptyFile));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/definitely/not/here/diabetes.csv");
        let err = load_csv(path, &LoadOptions::default()).unwrap_err();

        match err {
            LoaderError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Pregnancies,Glucose,BMI,Outcome").unwrap();
        writeln!(file, "6,148,33.6,1").unwrap();
        writeln!(file, "1,85,26.6,0").unwrap();

        let ds = load_csv(file.path(), &LoadOptions::default()).unwrap();

        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.column_count(), 4);
        assert_eq!(ds.numeric_values("BMI").unwrap(), vec![33.6, 26.6]);
    }

    #[test]
    fn test_column_count_matches_distinct_headers() {
        let text = "x,y,x,z,y\n1,2,3,4,5\n";
        let ds = parse_csv_str(text, &LoadOptions::default()).unwrap();
        assert_eq!(ds.column_count(), 3);
    }
}
