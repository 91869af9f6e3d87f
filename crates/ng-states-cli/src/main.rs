//! ng-states: command-line interface for ng-states-core
//!
//! This binary provides a simple way to query the bundled reference data
//! for Nigeria's states from your terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ ng-states stats
//!
//! - Complete data for a state (case-insensitive, FCT aliases work)
//!   $ ng-states state lagos
//!   $ ng-states state abuja --json
//!
//! - Single fields
//!   $ ng-states capital Oyo
//!   $ ng-states lgas "Akwa Ibom"
//!
//! - Zones and reverse lookups
//!   $ ng-states by-region south-west
//!   $ ng-states find-lga Ikeja
//!   $ ng-states search-towns aba
//!
//! Data source
//! -----------
//!
//! By default the CLI queries the dataset embedded in `ng-states-core`.
//! Use `--input <path>` to point at a JSON file with the same shape.
//! Set `RUST_LOG=debug` to see loader diagnostics on stderr.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use ng_states_core::prelude::*;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let loaded;
    let db: &StatesDb = match args.input.as_deref() {
        Some(path) => {
            loaded = load_input(path)?;
            &loaded
        }
        None => StatesDb::embedded().context("embedded dataset failed to load")?,
    };

    run(db, args.command, args.json)
}

#[cfg(feature = "json")]
fn load_input(path: &str) -> anyhow::Result<StatesDb> {
    tracing::info!(path, "loading dataset from file");
    StatesDb::load_from_path(path).with_context(|| format!("failed to load dataset {path}"))
}

#[cfg(not(feature = "json"))]
fn load_input(path: &str) -> anyhow::Result<StatesDb> {
    anyhow::bail!("--input {path} requires the `json` feature")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_list(items: &[String]) {
    for item in items {
        println!("{item}");
    }
}

fn print_state(s: &StateRecord) {
    let c = s.coordinates();
    println!("State: {}", s.name());
    println!("Capital: {}", s.capital());
    println!("Region: {}", s.region());
    println!("Postal Code: {}", s.postal_code());
    println!("Coordinates: {}, {}", c.latitude, c.longitude);
    println!("Population: {}", s.population());
    println!("Created: {}", s.created());
    println!("Slogan: {}", s.slogan());
    if let Some(site) = s.website() {
        println!("Website: {site}");
    }
    println!("LGAs ({}): {}", s.lgas().len(), s.lgas().join(", "));
    println!("Senatorial Districts: {}", s.senatorial_districts().join(", "));
    println!("Towns: {}", s.towns().join(", "));
}

fn run(db: &StatesDb, command: Commands, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Stats => {
            let stats = db.stats();
            if json {
                return print_json(&stats);
            }
            println!("Dataset statistics:");
            println!("  States: {}", stats.states);
            println!("  LGAs: {}", stats.lgas);
            println!("  Senatorial Districts: {}", stats.senatorial_districts);
            println!("  Towns: {}", stats.towns);
        }

        Commands::States => {
            if json {
                return print_json(db.states());
            }
            for s in db.states() {
                println!("{} ({}, {})", s.name(), s.capital(), s.region());
            }
        }

        Commands::Names => {
            let names = db.state_names();
            if json {
                return print_json(&names);
            }
            for name in names {
                println!("{name}");
            }
        }

        Commands::State { name } => {
            let s = db.state(&name)?;
            if json {
                return print_json(s);
            }
            print_state(s);
        }

        Commands::Capitals => {
            let pairs = db.states_and_capitals();
            if json {
                return print_json(&pairs);
            }
            for p in pairs {
                println!("{}: {}", p.state, p.capital);
            }
        }

        Commands::Capital { name } => {
            let capital = db.capital(&name)?;
            if json {
                return print_json(capital);
            }
            println!("{capital}");
        }

        Commands::Lgas { name } => {
            let lgas = db.lgas(&name)?;
            if json {
                return print_json(lgas);
            }
            print_list(lgas);
        }

        Commands::Districts { name } => {
            let districts = db.senatorial_districts(&name)?;
            if json {
                return print_json(districts);
            }
            print_list(districts);
        }

        Commands::Towns { name } => {
            let towns = db.towns(&name)?;
            if json {
                return print_json(towns);
            }
            print_list(towns);
        }

        Commands::PostalCode { name } => {
            let code = db.postal_code(&name)?;
            if json {
                return print_json(code);
            }
            println!("{code}");
        }

        Commands::Coordinates { name } => {
            let c = db.coordinates(&name)?;
            if json {
                return print_json(&c);
            }
            println!("{}, {}", c.latitude, c.longitude);
        }

        Commands::Population { name } => {
            let population = db.population(&name)?;
            if json {
                return print_json(&population);
            }
            println!("{population}");
        }

        Commands::Created { name } => {
            let created = db.creation_date(&name)?;
            if json {
                return print_json(created);
            }
            println!("{created}");
        }

        Commands::Slogan { name } => {
            let slogan = db.slogan(&name)?;
            if json {
                return print_json(slogan);
            }
            println!("{slogan}");
        }

        Commands::Region { name } => {
            let region = db.region(&name)?;
            if json {
                return print_json(&region);
            }
            println!("{region}");
        }

        Commands::Zones => {
            let zones = db.geopolitical_zones();
            if json {
                return print_json(&zones);
            }
            for zone in zones {
                println!("{zone}");
            }
        }

        Commands::ByRegion { zone } => {
            let states = db.states_by_region(&zone)?;
            if json {
                return print_json(&states);
            }
            for s in states {
                println!("{} ({})", s.name(), s.capital());
            }
        }

        Commands::FindLga { lga } => match db.find_state_by_lga(&lga) {
            Some(s) if json => return print_json(s),
            Some(s) => println!("{}", s.name()),
            None => println!("No state found for LGA: {lga}"),
        },

        Commands::FindTown { town } => match db.find_state_by_town(&town) {
            Some(s) if json => return print_json(s),
            Some(s) => println!("{}", s.name()),
            None => println!("No state found for town: {town}"),
        },

        Commands::Search { query } => {
            let hits = db.search_states(&query);
            if json {
                return print_json(&hits);
            }
            if hits.is_empty() {
                println!("No states found matching: {query}");
            }
            for s in hits {
                println!("{}", s.name());
            }
        }

        Commands::SearchTowns { query } => {
            let hits = db.search_towns(&query);
            if json {
                return print_json(&hits);
            }
            if hits.is_empty() {
                println!("No towns found matching: {query}");
            }
            for hit in hits {
                println!("{} ({})", hit.town, hit.state);
            }
        }
    }

    Ok(())
}
