// crates/ng-states-core/src/traits.rs
use crate::common::{DbStats, StateWithCapital, TownMatch};
use crate::error::Result;
use crate::model::{Coordinates, Region, StateRecord};
use crate::text::{normalize, resolve_alias};

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`], and get:
/// - [`NameMatch::is_named`]: equality after alias resolution and normalization
/// - [`NameMatch::name_contains`]: substring match on normalized form
///
/// # Examples
/// ```rust
/// use ng_states_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Federal Capital Territory").is_named("f.c.t"));
/// assert!(Place("Akwa Ibom").name_contains(" IBO"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        normalize(self.name_str()) == normalize(resolve_alias(q))
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        normalize(self.name_str()).contains(&normalize(q))
    }
}

impl NameMatch for StateRecord {
    fn name_str(&self) -> &str {
        self.name()
    }
}

/// The query surface of the reference store.
///
/// Lookups by name or region fail with a typed error; the LGA/town finders
/// return `None` for misses instead, since "not in any state" is a normal
/// answer for them. Searches with a blank query return an empty result.
pub trait StateSearch {
    fn stats(&self) -> DbStats;

    /// Returns every record in dataset order.
    ///
    /// ```rust
    /// use ng_states_core::prelude::*;
    ///
    /// let db = StatesDb::embedded().unwrap();
    /// assert_eq!(db.states().len(), 37);
    /// ```
    fn states(&self) -> &[StateRecord];

    fn state_names(&self) -> Vec<&str>;

    /// Case-insensitive lookup with FCT alias resolution; `None` on a miss.
    fn find_by_name(&self, name: &str) -> Option<&StateRecord>;

    /// Complete data for a single state.
    ///
    /// # Errors
    /// [`crate::StatesError::InvalidArgument`] for a blank name,
    /// [`crate::StatesError::NotFound`] when nothing matches.
    ///
    /// ```rust
    /// use ng_states_core::prelude::*;
    ///
    /// let db = StatesDb::embedded().unwrap();
    /// assert_eq!(db.state("lagos").unwrap().capital(), "Ikeja");
    /// assert_eq!(db.state("FCT").unwrap().name(), "Federal Capital Territory");
    /// ```
    fn state(&self, name: &str) -> Result<&StateRecord>;

    /// Same as [`StateSearch::state`].
    fn state_data(&self, name: &str) -> Result<&StateRecord> {
        self.state(name)
    }

    fn states_and_capitals(&self) -> Vec<StateWithCapital<'_>>;

    fn capital(&self, name: &str) -> Result<&str> {
        self.state(name).map(StateRecord::capital)
    }

    fn lgas(&self, name: &str) -> Result<&[String]> {
        self.state(name).map(StateRecord::lgas)
    }

    fn senatorial_districts(&self, name: &str) -> Result<&[String]> {
        self.state(name).map(StateRecord::senatorial_districts)
    }

    fn towns(&self, name: &str) -> Result<&[String]> {
        self.state(name).map(StateRecord::towns)
    }

    fn postal_code(&self, name: &str) -> Result<&str> {
        self.state(name).map(StateRecord::postal_code)
    }

    fn coordinates(&self, name: &str) -> Result<Coordinates> {
        self.state(name).map(StateRecord::coordinates)
    }

    fn population(&self, name: &str) -> Result<u64> {
        self.state(name).map(StateRecord::population)
    }

    fn creation_date(&self, name: &str) -> Result<&str> {
        self.state(name).map(StateRecord::created)
    }

    fn slogan(&self, name: &str) -> Result<&str> {
        self.state(name).map(StateRecord::slogan)
    }

    fn region(&self, name: &str) -> Result<Region> {
        self.state(name).map(StateRecord::region)
    }

    fn find_state_by_lga(&self, lga: &str) -> Option<&StateRecord>;
    fn find_state_by_town(&self, town: &str) -> Option<&StateRecord>;

    /// Distinct zones present in the data, sorted alphabetically.
    fn geopolitical_zones(&self) -> Vec<Region>;

    fn states_by_region(&self, region: &str) -> Result<Vec<&StateRecord>>;
    fn search_states(&self, query: &str) -> Vec<&StateRecord>;
    fn search_towns(&self, query: &str) -> Vec<TownMatch<'_>>;
}
