// crates/ng-states-core/src/api.rs

//! Free functions over the embedded dataset.
//!
//! Each function is a thin call into [`StateSearch`] on
//! [`StatesDb::embedded`]. Use the trait directly when working with a
//! store loaded from another file.
//!
//! ```rust
//! use ng_states_core::api;
//!
//! # fn main() -> ng_states_core::Result<()> {
//! assert_eq!(api::get_capital("Lagos")?, "Ikeja");
//! assert_eq!(api::get_state("abuja")?.name(), "Federal Capital Territory");
//! assert!(api::find_state_by_lga("Nowhere")?.is_none());
//! # Ok(())
//! # }
//! ```

use crate::common::{StateWithCapital, TownMatch};
use crate::error::Result;
use crate::model::{Coordinates, Region, StateRecord, StatesDb};
use crate::traits::StateSearch;

#[inline]
fn db() -> Result<&'static StatesDb> {
    StatesDb::embedded()
}

/// All 37 records in dataset order.
pub fn get_states() -> Result<&'static [StateRecord]> {
    Ok(db()?.states())
}

pub fn get_state_names() -> Result<Vec<&'static str>> {
    Ok(db()?.state_names())
}

pub fn get_state(name: &str) -> Result<&'static StateRecord> {
    db()?.state(name)
}

pub fn get_state_data(name: &str) -> Result<&'static StateRecord> {
    db()?.state_data(name)
}

pub fn get_states_and_capitals() -> Result<Vec<StateWithCapital<'static>>> {
    Ok(db()?.states_and_capitals())
}

pub fn get_capital(name: &str) -> Result<&'static str> {
    db()?.capital(name)
}

pub fn get_lgas(name: &str) -> Result<&'static [String]> {
    db()?.lgas(name)
}

pub fn get_senatorial_districts(name: &str) -> Result<&'static [String]> {
    db()?.senatorial_districts(name)
}

pub fn get_towns(name: &str) -> Result<&'static [String]> {
    db()?.towns(name)
}

pub fn get_postal_code(name: &str) -> Result<&'static str> {
    db()?.postal_code(name)
}

pub fn get_coordinates(name: &str) -> Result<Coordinates> {
    db()?.coordinates(name)
}

pub fn get_population(name: &str) -> Result<u64> {
    db()?.population(name)
}

pub fn get_creation_date(name: &str) -> Result<&'static str> {
    db()?.creation_date(name)
}

pub fn get_slogan(name: &str) -> Result<&'static str> {
    db()?.slogan(name)
}

/// The state containing `lga`, or `None`. A miss is not an error.
pub fn find_state_by_lga(lga: &str) -> Result<Option<&'static StateRecord>> {
    Ok(db()?.find_state_by_lga(lga))
}

/// The state listing `town` among its major towns, or `None`.
pub fn find_state_by_town(town: &str) -> Result<Option<&'static StateRecord>> {
    Ok(db()?.find_state_by_town(town))
}

/// Zone names, sorted alphabetically.
pub fn get_geopolitical_zones() -> Result<Vec<&'static str>> {
    Ok(db()?
        .geopolitical_zones()
        .into_iter()
        .map(|r| r.as_str())
        .collect())
}

pub fn get_states_by_region(region: &str) -> Result<Vec<&'static StateRecord>> {
    db()?.states_by_region(region)
}

pub fn get_region(name: &str) -> Result<Region> {
    db()?.region(name)
}

pub fn search_states(query: &str) -> Result<Vec<&'static StateRecord>> {
    Ok(db()?.search_states(query))
}

pub fn search_towns(query: &str) -> Result<Vec<TownMatch<'static>>> {
    Ok(db()?.search_towns(query))
}
