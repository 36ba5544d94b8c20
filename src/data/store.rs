//! Dataset Store Module
//! Lazily-initialized, memoized handle to the cleaned unicorn table.

use super::{normalize, DataError};
use polars::prelude::DataFrame;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::info;

/// Default source file names, matching the upstream data drop.
pub const PRIMARY_CSV: &str = "unicorns_companies.csv";
pub const METADATA_CSV: &str = "companies_metadata.csv";

/// Memoized handle to the cleaned, joined unicorn dataset.
///
/// The load-and-normalize pipeline runs at most once per store; every later
/// `dataset` call returns the same in-memory table without re-reading the
/// files. A failed load is not cached, so the next call retries.
pub struct UnicornStore {
    primary_path: PathBuf,
    metadata_path: PathBuf,
    dataset: OnceLock<DataFrame>,
}

impl UnicornStore {
    pub fn new(primary_path: impl Into<PathBuf>, metadata_path: impl Into<PathBuf>) -> Self {
        Self {
            primary_path: primary_path.into(),
            metadata_path: metadata_path.into(),
            dataset: OnceLock::new(),
        }
    }

    /// The normalized dataset, loading and joining the source tables on the
    /// first call.
    pub fn dataset(&self) -> Result<&DataFrame, DataError> {
        if let Some(df) = self.dataset.get() {
            return Ok(df);
        }
        let df = normalize::load_unicorns(&self.primary_path, &self.metadata_path)?;
        info!(rows = df.height(), "unicorn dataset ready");
        Ok(self.dataset.get_or_init(|| df))
    }
}

impl Default for UnicornStore {
    fn default() -> Self {
        Self::new(PRIMARY_CSV, METADATA_CSV)
    }
}
