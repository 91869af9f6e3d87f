// crates/ng-states-core/src/model/mod.rs
pub mod convert;
pub mod domain;
pub mod region;
pub mod search;

pub use domain::{Coordinates, StateRecord, StatesDb};
pub use region::Region;
