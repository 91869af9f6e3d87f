// crates/ng-states-core/src/raw.rs

use serde::Deserialize;

/// Raw coordinates as they appear in the JSON dataset.
#[derive(Debug, Deserialize)]
pub struct CoordinatesRaw {
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw state structure from JSON.
///
/// Field names mirror the dataset file; this type is only an input to
/// [`crate::model::convert::from_raw`] and is not part of the query API.
#[derive(Debug, Deserialize)]
pub struct StateRaw {
    pub state: String,
    pub capital: String,
    pub region: String,
    pub postal_code: String,
    pub coordinates: CoordinatesRaw,
    pub population: i64,
    pub created: String,
    pub slogan: String,
    #[serde(default)]
    pub lgas: Vec<String>,
    #[serde(default)]
    pub senatorial_districts: Vec<String>,
    #[serde(default)]
    pub towns: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
}

pub type StatesRaw = Vec<StateRaw>;
