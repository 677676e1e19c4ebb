use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the clinic dataset.
///
/// Malformed numeric cells are not errors; they are coerced to missing values.
#[derive(Error, Debug)]
pub enum LoadError {
    /// No CSV exists at any lookup location.
    #[error("handwashing.csv not found at {} or {}", primary.display(), fallback.display())]
    ResourceNotFound { primary: PathBuf, fallback: PathBuf },

    #[error("Failed to read CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("CSV {} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

pub type Result<T> = std::result::Result<T, LoadError>;
