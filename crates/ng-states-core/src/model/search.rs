// crates/ng-states-core/src/model/search.rs
use super::domain::{StateRecord, StatesDb};
use super::region::Region;
use crate::common::{DbStats, StateWithCapital, TownMatch};
use crate::error::{Result, StatesError};
use crate::text::{contains_normalized, equals_normalized, is_blank, normalize};
use crate::traits::{NameMatch, StateSearch};

impl StateSearch for StatesDb {
    fn stats(&self) -> DbStats {
        DbStats {
            states: self.states.len(),
            lgas: self.states.iter().map(|s| s.lgas.len()).sum(),
            senatorial_districts: self
                .states
                .iter()
                .map(|s| s.senatorial_districts.len())
                .sum(),
            towns: self.states.iter().map(|s| s.towns.len()).sum(),
        }
    }

    fn states(&self) -> &[StateRecord] {
        &self.states
    }

    fn state_names(&self) -> Vec<&str> {
        self.states.iter().map(StateRecord::name).collect()
    }

    fn find_by_name(&self, name: &str) -> Option<&StateRecord> {
        // Linear scan is fine: the dataset is 37 records.
        self.states.iter().find(|s| s.is_named(name))
    }

    fn state(&self, name: &str) -> Result<&StateRecord> {
        if is_blank(name) {
            return Err(StatesError::invalid_state_name());
        }
        self.find_by_name(name)
            .ok_or_else(|| StatesError::state_not_found(name))
    }

    fn states_and_capitals(&self) -> Vec<StateWithCapital<'_>> {
        self.states
            .iter()
            .map(|s| StateWithCapital {
                state: s.name(),
                capital: s.capital(),
            })
            .collect()
    }

    fn find_state_by_lga(&self, lga: &str) -> Option<&StateRecord> {
        self.states
            .iter()
            .find(|s| s.lgas.iter().any(|l| equals_normalized(l, lga)))
    }

    fn find_state_by_town(&self, town: &str) -> Option<&StateRecord> {
        self.states
            .iter()
            .find(|s| s.towns.iter().any(|t| equals_normalized(t, town)))
    }

    fn geopolitical_zones(&self) -> Vec<Region> {
        let mut zones: Vec<Region> = self.states.iter().map(StateRecord::region).collect();
        zones.sort_unstable();
        zones.dedup();
        zones
    }

    fn states_by_region(&self, region: &str) -> Result<Vec<&StateRecord>> {
        if is_blank(region) {
            return Err(StatesError::invalid_region_name());
        }

        let out: Vec<&StateRecord> = self
            .states
            .iter()
            .filter(|s| s.region.matches(region))
            .collect();

        if out.is_empty() {
            return Err(StatesError::region_not_found(region));
        }
        Ok(out)
    }

    fn search_states(&self, query: &str) -> Vec<&StateRecord> {
        let q = normalize(query);
        if q.is_empty() {
            return Vec::new();
        }
        self.states
            .iter()
            .filter(|s| contains_normalized(&s.name, &q))
            .collect()
    }

    fn search_towns(&self, query: &str) -> Vec<TownMatch<'_>> {
        let q = normalize(query);
        let mut out = Vec::new();
        if q.is_empty() {
            return out;
        }

        for s in &self.states {
            for town in &s.towns {
                if contains_normalized(town, &q) {
                    out.push(TownMatch {
                        state: s.name(),
                        town,
                    });
                }
            }
        }
        out
    }
}
