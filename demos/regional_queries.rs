//! Zone and search example for ng-states-rs

use ng_states_rs::prelude::*;

fn main() -> Result<()> {
    let db = StatesDb::embedded()?;

    println!("--- Geopolitical zones ---");
    for zone in db.geopolitical_zones() {
        let states = db.states_by_region(zone.as_str())?;
        let names: Vec<&str> = states.iter().map(|s| s.name()).collect();
        let population: u64 = states.iter().map(|s| s.population()).sum();
        println!("{zone} ({population} people): {}", names.join(", "));
    }
    println!();

    println!("--- States matching \"river\" ---");
    for s in db.search_states("river") {
        println!("  {} (created {})", s.name(), s.created());
    }
    println!();

    println!("--- Towns matching \"aba\" ---");
    for hit in db.search_towns("aba") {
        println!("  {} ({})", hit.town, hit.state);
    }

    Ok(())
}
