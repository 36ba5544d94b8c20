//! Data module - CSV loading, normalization and the memoized dataset

mod loader;
mod metadata;
mod normalize;
mod store;

pub use loader::{read_table, LoaderError};
pub use metadata::{load_metadata, metadata_from_table};
pub use normalize::{clean_primary, join_metadata, load_unicorns, to_snake_case};
pub use store::{UnicornStore, METADATA_CSV, PRIMARY_CSV};

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors from the load-and-normalize pipeline.
///
/// The pipeline is one failure unit: the first error anywhere aborts the
/// whole load and is returned as-is. There is no per-row recovery; malformed
/// input has to be fixed at the source.
#[derive(Error, Debug)]
pub enum DataError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error("table operation failed: {0}")]
    Table(#[from] PolarsError),
    #[error("could not parse {field} value `{value}`")]
    Parse { field: &'static str, value: String },
    #[error("company join failed: {0}")]
    Join(String),
}

impl DataError {
    pub(crate) fn parse(field: &'static str, value: impl Into<String>) -> Self {
        DataError::Parse {
            field,
            value: value.into(),
        }
    }
}
