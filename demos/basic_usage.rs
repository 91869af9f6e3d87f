//! Basic usage example for ng-states-rs
//!
//! This example demonstrates how to:
//! - Load the embedded dataset
//! - Look up a state and its fields
//! - Use the free-function API

use ng_states_rs::api;
use ng_states_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== ng-states-rs Basic Usage Example ===\n");

    let db = StatesDb::embedded()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: All states
    println!("--- Example 1: List states ---");
    let states = db.states();
    println!("Total states: {}", states.len());
    for (i, state) in states.iter().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, state.name(), state.capital());
    }
    println!("... and {} more\n", states.len() - 5);

    // Example 2: One state in detail
    println!("--- Example 2: Lagos State ---");
    let lagos = db.state("Lagos")?;
    println!("Capital: {}", lagos.capital());
    println!("LGAs: {}", lagos.lgas().len());
    println!("Senatorial Districts: {:?}", lagos.senatorial_districts());
    println!("Major Towns: {}", lagos.towns().len());
    println!();

    // Example 3: States with capitals
    println!("--- Example 3: States and capitals ---");
    for pair in db.states_and_capitals().iter().take(3) {
        println!("{}: {}", pair.state, pair.capital);
    }
    println!();

    // Example 4: Free functions over the same data
    println!("--- Example 4: Oyo via the api module ---");
    println!("Oyo Capital: {}", api::get_capital("Oyo")?);
    println!("Oyo LGAs count: {}", api::get_lgas("Oyo")?.len());
    println!("Oyo Senatorial Districts: {:?}", api::get_senatorial_districts("Oyo")?);
    let towns = api::get_towns("Oyo")?;
    println!("Major towns in Oyo: {:?}", &towns[..towns.len().min(5)]);
    println!();

    // Example 5: Case-insensitive queries and FCT aliases
    println!("--- Example 5: FCT aliases ---");
    for alias in ["abuja", "FCT", "F.C.T", "Federal Capital Territory"] {
        println!("{alias:>28} -> {}", db.state(alias)?.name());
    }

    Ok(())
}
