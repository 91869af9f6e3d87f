// crates/ng-states-core/src/error.rs

//! Error types for the reference store.

use thiserror::Error;

/// Everything that can go wrong while loading or querying the dataset.
///
/// Query errors are only ever [`StatesError::InvalidArgument`] and
/// [`StatesError::NotFound`]. The remaining variants can surface while a
/// dataset is being loaded.
#[derive(Debug, Error)]
pub enum StatesError {
    /// A blank or empty identifier where a concrete name/region is required.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Well-formed input that matches no record.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset parsed but breaks a record invariant.
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}

impl StatesError {
    pub fn invalid_state_name() -> Self {
        StatesError::InvalidArgument("Invalid state name".to_string())
    }

    pub fn invalid_region_name() -> Self {
        StatesError::InvalidArgument("Invalid region name".to_string())
    }

    pub fn state_not_found(name: &str) -> Self {
        StatesError::NotFound(format!("State \"{name}\" not found"))
    }

    pub fn region_not_found(region: &str) -> Self {
        StatesError::NotFound(format!("Region \"{region}\" not found"))
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, StatesError::NotFound(_))
    }

    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StatesError::InvalidArgument(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StatesError>;
