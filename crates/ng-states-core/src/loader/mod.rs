// crates/ng-states-core/src/loader/mod.rs

//! # Data Loader
//!
//! Parses the JSON dataset (embedded or supplied by the caller) and hands
//! the raw records to the validating converter.

use crate::error::Result;
use crate::model::convert::from_raw;
use crate::model::StatesDb;
use crate::raw::StatesRaw;
use once_cell::sync::OnceCell;

#[cfg(feature = "json")]
mod common_io;

/// The bundled dataset, compiled into the library.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/states.json");

/// Number of records in the bundled dataset (36 states plus the FCT).
pub const EMBEDDED_STATE_COUNT: usize = 37;

static STATES_DB_CACHE: OnceCell<StatesDb> = OnceCell::new();

impl StatesDb {
    /// The process-wide store built from the embedded dataset.
    ///
    /// Parsed on first call and shared afterwards; every later call is a
    /// plain pointer read.
    ///
    /// ```rust
    /// use ng_states_core::StatesDb;
    ///
    /// let a = StatesDb::embedded().unwrap();
    /// let b = StatesDb::embedded().unwrap();
    /// assert!(std::ptr::eq(a, b));
    /// ```
    pub fn embedded() -> Result<&'static StatesDb> {
        STATES_DB_CACHE.get_or_try_init(|| {
            let db = Self::from_json_str(EMBEDDED_DATASET)?;
            tracing::debug!(states = db.state_count(), "loaded embedded dataset");
            Ok(db)
        })
    }

    /// Build a store from a JSON document with the dataset's shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: StatesRaw = serde_json::from_str(json)?;
        from_raw(raw)
    }

    /// Build a store from any JSON reader.
    #[cfg(feature = "json")]
    pub fn from_reader(reader: impl std::io::Read) -> Result<Self> {
        let raw: StatesRaw = serde_json::from_reader(reader)?;
        from_raw(raw)
    }

    /// Load an alternative dataset file.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let db = Self::from_reader(reader)?;
        tracing::debug!(path = %path.display(), states = db.state_count(), "loaded dataset file");
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_parses() {
        let db = StatesDb::embedded().unwrap();
        assert_eq!(db.state_count(), EMBEDDED_STATE_COUNT);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = StatesDb::from_json_str("[{\"state\": ").unwrap_err();
        assert!(matches!(err, crate::StatesError::Json(_)));
    }

    #[test]
    fn empty_array_is_rejected() {
        let err = StatesDb::from_json_str("[]").unwrap_err();
        assert!(matches!(err, crate::StatesError::InvalidDataset(_)));
    }
}
