use std::path::Path;

use async_trait::async_trait;

/// Labeled movie review datasets
pub mod reviews;

/// Row filters
pub mod filter;

pub use filter::LengthFilter;

/// A dataset which can be loaded
#[async_trait]
pub trait LoadableDataset {
    /// Load the dataset
    async fn load(path: &Path) -> Result<Self, DatasetError>
    where
        Self: std::marker::Sized;
}

/// Dataset Error
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    /// The file could not be read or written
    #[error("unable to access dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be parsed or written as CSV
    #[error("invalid dataset row: {0}")]
    Csv(#[from] csv::Error),

    /// A transformed text column did not line up with the rows
    #[error("expected {expected} documents, found {found}")]
    Length {
        /// The number of rows in the dataset
        expected: usize,
        /// The number of documents supplied
        found: usize,
    },
}
