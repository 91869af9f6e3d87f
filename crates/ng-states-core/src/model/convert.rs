// crates/ng-states-core/src/model/convert.rs
use super::domain::{Coordinates, StateRecord, StatesDb};
use super::region::Region;
use crate::error::{Result, StatesError};
use crate::raw::{StateRaw, StatesRaw};
use crate::text::normalize;
use chrono::NaiveDate;
use std::collections::HashSet;

/// **Standard Converter:** Raw -> StatesDb.
///
/// Every record is checked against the dataset invariants while it is
/// converted; the first violation aborts the whole load with
/// [`StatesError::InvalidDataset`].
pub fn from_raw(raw_states: StatesRaw) -> Result<StatesDb> {
    let mut states = Vec::with_capacity(raw_states.len());
    let mut seen_names = HashSet::with_capacity(raw_states.len());

    for s_raw in raw_states {
        let record = convert_state(s_raw)?;
        if !seen_names.insert(normalize(&record.name)) {
            return Err(StatesError::InvalidDataset(format!(
                "duplicate state name \"{}\"",
                record.name
            )));
        }
        tracing::trace!(state = %record.name, lgas = record.lgas.len(), "converted state");
        states.push(record);
    }

    if states.is_empty() {
        return Err(StatesError::InvalidDataset(
            "dataset contains no states".to_string(),
        ));
    }

    Ok(StatesDb { states })
}

fn convert_state(s: StateRaw) -> Result<StateRecord> {
    let name = required(s.state, "state", "<unnamed>")?;
    let capital = required(s.capital, "capital", &name)?;
    let postal_code = required(s.postal_code, "postal_code", &name)?;
    let slogan = required(s.slogan, "slogan", &name)?;

    let region = s.region.parse::<Region>().map_err(|_| {
        StatesError::InvalidDataset(format!("{name}: unknown region \"{}\"", s.region))
    })?;

    if NaiveDate::parse_from_str(&s.created, "%Y-%m-%d").is_err() {
        return Err(StatesError::InvalidDataset(format!(
            "{name}: created \"{}\" is not an ISO-8601 date",
            s.created
        )));
    }

    let population = u64::try_from(s.population)
        .ok()
        .filter(|p| *p > 0)
        .ok_or_else(|| {
            StatesError::InvalidDataset(format!(
                "{name}: population must be positive, got {}",
                s.population
            ))
        })?;

    let lgas = required_list(s.lgas, "lgas", &name)?;
    let mut seen = HashSet::with_capacity(lgas.len());
    if let Some(dup) = lgas.iter().find(|lga| !seen.insert(normalize(lga))) {
        return Err(StatesError::InvalidDataset(format!(
            "{name}: duplicate LGA \"{dup}\""
        )));
    }

    let senatorial_districts = required_list(s.senatorial_districts, "senatorial_districts", &name)?;
    let towns = required_list(s.towns, "towns", &name)?;

    Ok(StateRecord {
        capital,
        region,
        postal_code,
        coordinates: Coordinates {
            latitude: s.coordinates.latitude,
            longitude: s.coordinates.longitude,
        },
        population,
        created: s.created,
        slogan,
        lgas,
        senatorial_districts,
        towns,
        website: s.website.filter(|w| !w.trim().is_empty()),
        name,
    })
}

fn required(value: String, field: &str, state: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(StatesError::InvalidDataset(format!(
            "{state}: field \"{field}\" is empty"
        )));
    }
    Ok(value)
}

fn required_list(values: Vec<String>, field: &str, state: &str) -> Result<Vec<String>> {
    if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
        return Err(StatesError::InvalidDataset(format!(
            "{state}: \"{field}\" must be a non-empty list of non-empty names"
        )));
    }
    Ok(values)
}
