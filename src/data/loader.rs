//! CSV Table Loader Module
//! Raw CSV reading using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Load a CSV file with every column read as a string.
///
/// Schema inference is disabled on purpose: the source tables carry currency
/// prefixes, unit suffixes and sentinel strings in otherwise numeric fields,
/// so all typing decisions belong to the normalization pipeline.
pub fn read_table(path: &Path) -> Result<DataFrame, LoaderError> {
    std::fs::metadata(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(0))
        .finish()?
        .collect()?;

    debug!(
        rows = df.height(),
        columns = df.width(),
        path = %path.display(),
        "loaded raw table"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_io_error_with_path() {
        let err = read_table(Path::new("/nonexistent/unicorns.csv")).unwrap_err();
        match err {
            LoaderError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/unicorns.csv"))
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn every_column_is_read_as_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        std::fs::write(&path, "Company,Valuation ($B)\nAcme,$10\n").unwrap();

        let df = read_table(&path).unwrap();
        assert_eq!(df.height(), 1);
        for column in df.get_columns() {
            assert_eq!(column.dtype(), &DataType::String);
        }
    }
}
