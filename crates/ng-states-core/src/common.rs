// crates/ng-states-core/src/common.rs

use serde::Serialize;

/// Simple aggregate statistics for the dataset.
///
/// Returned by [`crate::StateSearch::stats`]; the counts are summed over
/// every record that was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DbStats {
    pub states: usize,
    pub lgas: usize,
    pub senatorial_districts: usize,
    pub towns: usize,
}

/// A `{ state, capital }` projection of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateWithCapital<'a> {
    pub state: &'a str,
    pub capital: &'a str,
}

/// One hit of [`crate::StateSearch::search_towns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TownMatch<'a> {
    pub state: &'a str,
    pub town: &'a str,
}
