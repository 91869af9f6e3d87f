//! Error handling example for ng-states-rs
//!
//! This example demonstrates typed errors and the "absent is not an error"
//! finders.

use ng_states_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== ng-states-rs Error Handling Example ===\n");

    let db = match StatesDb::embedded() {
        Ok(db) => {
            println!("✓ Dataset loaded ({} states)", db.states().len());
            db
        }
        Err(e) => {
            eprintln!("✗ Failed to load dataset: {e}");
            return Err(e);
        }
    };
    println!();

    // Example 1: Unknown and blank names
    println!("--- Example 1: Lookups that fail ---");
    for name in ["Invalid State", "", "   ", "Lagoss"] {
        match db.state(name) {
            Ok(state) => println!("  Found: {}", state.name()),
            Err(StatesError::InvalidArgument(msg)) => println!("  Invalid input {name:?}: {msg}"),
            Err(StatesError::NotFound(msg)) => println!("  {msg}"),
            Err(e) => return Err(e),
        }
    }
    println!();

    // Example 2: Regions
    println!("--- Example 2: Regions ---");
    for zone in ["South-West", "south-west", "Invalid Region"] {
        match db.states_by_region(zone) {
            Ok(states) => println!("  {zone}: {} states", states.len()),
            Err(e) => println!("  {zone}: {e}"),
        }
    }
    println!();

    // Example 3: Reverse lookups return Option
    println!("--- Example 3: Reverse lookups ---");
    for lga in ["Ikeja", "InvalidLGA"] {
        match db.find_state_by_lga(lga) {
            Some(state) => println!("  LGA {lga} is in {}", state.name()),
            None => println!("  LGA {lga} not found"),
        }
    }

    Ok(())
}
