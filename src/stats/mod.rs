//! Stats module - Descriptive statistics and correlation

mod calculator;

pub use calculator::{ColumnSummary, CorrelationMatrix, DescribeTable, StatsCalculator};
