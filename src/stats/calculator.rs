//! Statistics Calculator Module
//! Descriptive statistics per numeric column and the Pearson correlation matrix.

use crate::data::Dataset;
use rayon::prelude::*;
use statrs::statistics::Statistics;

/// Summary row for one numeric column, in `describe()` order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Row labels matching the order of `values()`.
    pub const LABELS: [&'static str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.median,
            self.q75,
            self.max,
        ]
    }
}

/// Descriptive statistics for every numeric column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeTable {
    pub columns: Vec<ColumnSummary>,
}

impl DescribeTable {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Pairwise Pearson correlation between numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    columns: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn size(&self) -> usize {
        self.columns.len()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Handles statistical calculations with multi-threading support.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    pub fn summarize(column: &str, values: &[f64]) -> ColumnSummary {
        let n = values.len();
        if n == 0 {
            return ColumnSummary {
                column: column.to_string(),
                count: 0,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                median: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        ColumnSummary {
            column: column.to_string(),
            count: n,
            mean: values.iter().mean(),
            // Sample standard deviation; NaN below two values
            std: values.iter().std_dev(),
            min: sorted[0],
            q25: Self::percentile(&sorted, 25.0),
            median: Self::percentile(&sorted, 50.0),
            q75: Self::percentile(&sorted, 75.0),
            max: sorted[n - 1],
        }
    }

    /// Calculate percentile using linear interpolation (NumPy compatible).
    pub fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// `describe()` over all numeric columns, summarised in parallel.
    pub fn describe(dataset: &Dataset) -> DescribeTable {
        let numeric: Vec<(String, Vec<f64>)> = Self::numeric_columns(dataset);

        let columns = numeric
            .par_iter()
            .map(|(name, values)| Self::summarize(name, values))
            .collect();

        DescribeTable { columns }
    }

    /// Pearson correlation coefficient. NaN when either side has no variance.
    pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
        let n = x.len().min(y.len());
        if n < 2 {
            return f64::NAN;
        }
        let (x, y) = (&x[..n], &y[..n]);

        let mean_x = x.iter().sum::<f64>() / n as f64;
        let mean_y = y.iter().sum::<f64>() / n as f64;

        let mut cov = 0.0;
        let mut var_x = 0.0;
        let mut var_y = 0.0;
        for (a, b) in x.iter().zip(y) {
            let dx = a - mean_x;
            let dy = b - mean_y;
            cov += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }

        let denom = (var_x * var_y).sqrt();
        if denom == 0.0 {
            return f64::NAN;
        }
        (cov / denom).clamp(-1.0, 1.0)
    }

    /// Correlation matrix across numeric columns.
    /// Each unordered pair is computed once and mirrored.
    pub fn correlation_matrix(dataset: &Dataset) -> CorrelationMatrix {
        let numeric = Self::numeric_columns(dataset);
        let n = numeric.len();

        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();

        let coefficients: Vec<(usize, usize, f64)> = pairs
            .par_iter()
            .map(|&(i, j)| (i, j, Self::pearson(&numeric[i].1, &numeric[j].1)))
            .collect();

        let mut values = vec![vec![1.0; n]; n];
        for (i, j, r) in coefficients {
            values[i][j] = r;
            values[j][i] = r;
        }

        CorrelationMatrix {
            columns: numeric.into_iter().map(|(name, _)| name).collect(),
            values,
        }
    }

    fn numeric_columns(dataset: &Dataset) -> Vec<(String, Vec<f64>)> {
        dataset
            .numeric_column_names()
            .into_iter()
            .filter_map(|name| {
                let values = dataset.numeric_values(&name)?;
                Some((name, values))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{parse_csv_str, LoadOptions};

    const SAMPLE: &str = "Glucose,BMI,Age,Outcome,Label\n\
148,33.6,50,1,x\n\
85,26.6,31,0,y\n\
183,23.3,32,1,x\n\
89,28.1,21,0,y\n\
137,43.1,33,1,z\n";

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_percentile_linear_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!(approx(StatsCalculator::percentile(&sorted, 25.0), 1.75));
        assert!(approx(StatsCalculator::percentile(&sorted, 50.0), 2.5));
        assert!(approx(StatsCalculator::percentile(&sorted, 75.0), 3.25));
        assert!(approx(StatsCalculator::percentile(&[7.0], 75.0), 7.0));
        assert!(StatsCalculator::percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_summarize_matches_describe_semantics() {
        let s = StatsCalculator::summarize("v", &[4.0, 1.0, 3.0, 2.0]);

        assert_eq!(s.count, 4);
        assert!(approx(s.mean, 2.5));
        assert!(approx(s.std, (5.0f64 / 3.0).sqrt()));
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        assert!(approx(s.q25, 1.75));
        assert!(approx(s.median, 2.5));
        assert!(approx(s.q75, 3.25));
    }

    #[test]
    fn test_single_value_has_nan_std() {
        let s = StatsCalculator::summarize("v", &[3.0]);
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert_eq!(s.median, 3.0);
    }

    #[test]
    fn test_describe_covers_numeric_columns_in_order() {
        let ds = parse_csv_str(SAMPLE, &LoadOptions::default()).unwrap();
        let table = StatsCalculator::describe(&ds);

        let names: Vec<&str> = table.columns.iter().map(|c| c.column.as_str()).collect();
        assert_eq!(names, vec!["Glucose", "BMI", "Age", "Outcome"]);
        assert!(approx(table.columns[0].mean, 128.4));
        assert_eq!(table.columns[3].values()[0], 5.0);
    }

    #[test]
    fn test_describe_without_numeric_columns_is_empty() {
        let ds = parse_csv_str("name,city\nann,oslo\nbob,rome\n", &LoadOptions::default()).unwrap();
        let table = StatsCalculator::describe(&ds);
        assert!(table.is_empty());
    }

    #[test]
    fn test_pearson_perfect_and_inverse() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert!(approx(StatsCalculator::pearson(&x, &[2.0, 4.0, 6.0, 8.0]), 1.0));
        assert!(approx(StatsCalculator::pearson(&x, &[8.0, 6.0, 4.0, 2.0]), -1.0));
        assert!(StatsCalculator::pearson(&x, &[5.0, 5.0, 5.0, 5.0]).is_nan());
    }

    #[test]
    fn test_correlation_matrix_is_symmetric_with_unit_diagonal() {
        let ds = parse_csv_str(SAMPLE, &LoadOptions::default()).unwrap();
        let corr = StatsCalculator::correlation_matrix(&ds);

        assert_eq!(corr.size(), 4);
        assert_eq!(corr.columns(), &["Glucose", "BMI", "Age", "Outcome"]);
        for i in 0..corr.size() {
            assert_eq!(corr.get(i, i), 1.0);
            for j in 0..corr.size() {
                assert_eq!(corr.get(i, j).to_bits(), corr.get(j, i).to_bits());
                assert!(corr.get(i, j).abs() <= 1.0);
            }
        }
    }

    #[test]
    fn test_constant_column_correlation() {
        let ds = parse_csv_str("a,b\n1,5\n2,5\n3,5\n", &LoadOptions::default()).unwrap();
        let corr = StatsCalculator::correlation_matrix(&ds);

        assert_eq!(corr.get(1, 1), 1.0);
        assert!(corr.get(0, 1).is_nan());
        assert!(corr.get(1, 0).is_nan());
    }

    #[test]
    fn test_correlation_without_numeric_columns() {
        let ds = parse_csv_str("name\nann\n", &LoadOptions::default()).unwrap();
        assert!(StatsCalculator::correlation_matrix(&ds).is_empty());
    }
}
