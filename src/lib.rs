//! ng-states-rs
//!
//! Workspace umbrella crate. Re-exports [`ng_states_core`] so the demos
//! under `demos/` can `use ng_states_rs::prelude::*`.

pub use ng_states_core::*;
