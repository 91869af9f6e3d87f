// crates/ng-states-core/src/model/domain.rs
use super::region::Region;
use chrono::NaiveDate;
use serde::Serialize;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A state (or the FCT) with its complete reference data.
///
/// Records are only built by the loader and are never mutated afterwards;
/// read them through the accessor methods.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateRecord {
    #[serde(rename = "state")]
    pub(crate) name: String,
    pub(crate) capital: String,
    pub(crate) region: Region,
    pub(crate) postal_code: String,
    pub(crate) coordinates: Coordinates,
    pub(crate) population: u64,
    /// ISO-8601 calendar date, e.g. `1967-05-27`.
    pub(crate) created: String,
    pub(crate) slogan: String,
    pub(crate) lgas: Vec<String>,
    pub(crate) senatorial_districts: Vec<String>,
    pub(crate) towns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) website: Option<String>,
}

/// The in-memory reference store.
///
/// Holds every record in dataset order. Constructed by the loader module
/// from the embedded JSON dataset (or an alternative file with the same
/// shape) and read-only afterwards, so a shared `&StatesDb` can be queried
/// from any number of threads.
#[derive(Clone, Debug, Serialize)]
pub struct StatesDb {
    pub(crate) states: Vec<StateRecord>,
}

impl StateRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capital(&self) -> &str {
        &self.capital
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    /// Creation date as stored, in `YYYY-MM-DD` form.
    pub fn created(&self) -> &str {
        &self.created
    }

    /// Creation date parsed into a calendar date.
    ///
    /// The loader rejects unparsable dates, so this is `Some` for every
    /// record of a loaded store.
    pub fn founded_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.created, "%Y-%m-%d").ok()
    }

    pub fn slogan(&self) -> &str {
        &self.slogan
    }

    pub fn lgas(&self) -> &[String] {
        &self.lgas
    }

    pub fn senatorial_districts(&self) -> &[String] {
        &self.senatorial_districts
    }

    pub fn towns(&self) -> &[String] {
        &self.towns
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }
}

impl StatesDb {
    pub fn state_count(&self) -> usize {
        self.states.len()
    }
}
