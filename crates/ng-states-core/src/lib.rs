// crates/ng-states-core/src/lib.rs

//! ng-states-core
//! ==============
//!
//! Read-only reference data for Nigeria's 36 states and the Federal Capital
//! Territory: capitals, geopolitical zones, postal codes, coordinates,
//! population, creation dates, slogans, local government areas, senatorial
//! districts and major towns.
//!
//! The dataset is embedded in the library and parsed once on first use.
//! Lookups are case-insensitive and accept the usual FCT aliases
//! (`"FCT"`, `"Abuja"`, `"F.C.T"`, ...).
//!
//! ```rust
//! use ng_states_core::prelude::*;
//!
//! # fn main() -> ng_states_core::Result<()> {
//! let db = StatesDb::embedded()?;
//! let lagos = db.state("Lagos")?;
//! assert_eq!(lagos.capital(), "Ikeja");
//! assert_eq!(lagos.region(), Region::SouthWest);
//!
//! let ikeja = db.find_state_by_lga("Ikeja").map(|s| s.name());
//! assert_eq!(ikeja, Some("Lagos"));
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
#[doc(hidden)]
pub mod raw;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{DbStats, StateWithCapital, TownMatch};
pub use crate::error::{Result, StatesError};
pub use crate::model::{Coordinates, Region, StateRecord, StatesDb};
pub use crate::traits::{NameMatch, StateSearch};
