//! Data module - CSV loading, cleaning and caching

mod cache;
mod dataset;
mod loader;

pub use cache::DatasetCache;
pub use dataset::{ColumnKind, Dataset};
pub use loader::LoadOptions;

#[cfg(test)]
pub use loader::parse_csv_str;
