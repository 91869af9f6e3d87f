use clap::{Parser, Subcommand};

/// CLI arguments for ng-states
#[derive(Debug, Parser)]
#[command(
    name = "ng-states",
    version,
    about = "Query reference data for Nigeria's states and the FCT"
)]
pub struct CliArgs {
    /// Path to an alternative JSON dataset (default: the embedded dataset)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List every state with its complete data
    States,

    /// List state names
    Names,

    /// Show complete data for one state (case-insensitive, FCT aliases accepted)
    State { name: String },

    /// List every state with its capital
    Capitals,

    /// Capital city of a state
    Capital { name: String },

    /// Local government areas of a state
    Lgas { name: String },

    /// Senatorial districts of a state
    Districts { name: String },

    /// Major towns of a state
    Towns { name: String },

    /// Postal code of a state
    PostalCode { name: String },

    /// Coordinates of a state
    Coordinates { name: String },

    /// Population of a state
    Population { name: String },

    /// Creation date of a state
    Created { name: String },

    /// Slogan of a state
    Slogan { name: String },

    /// Geopolitical zone of a state
    Region { name: String },

    /// List the geopolitical zones
    Zones,

    /// List the states in a geopolitical zone (e.g. South-West)
    ByRegion { zone: String },

    /// Find the state an LGA belongs to
    FindLga { lga: String },

    /// Find the state a town belongs to
    FindTown { town: String },

    /// Search state names containing a substring
    Search { query: String },

    /// Search towns containing a substring
    SearchTowns { query: String },
}
