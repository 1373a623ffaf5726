use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning one product URL into a pricing record.
///
/// Every variant is row-local: the reconciler reports it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    #[error("transport failure: {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("parsing failure: required element `{selector}` not found")]
    PageStructure { selector: String },

    #[error("parsing failure: {reason}")]
    Parsing { reason: String },
}

/// Failures of the tabular store.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv_async::Error,
    },

    #[error("failed to write dataset {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row_index} is out of range ({row_count} rows)")]
    RowOutOfRange { row_index: usize, row_count: usize },

    #[error("column index {column_index} is out of range ({column_count} columns)")]
    UnknownColumn {
        column_index: usize,
        column_count: usize,
    },
}
