//! ng-states prelude: bring common types and traits into scope.

pub use crate::common::{DbStats, StateWithCapital, TownMatch};
pub use crate::error::{Result, StatesError};
pub use crate::model::{Coordinates, Region, StateRecord, StatesDb};
pub use crate::text::{normalize, resolve_alias};
pub use crate::traits::{NameMatch, StateSearch};
