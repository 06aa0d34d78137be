use clap::{Parser, Subcommand};
use placefinder_core::config::{API_URL_ENV, DEFAULT_API_URL};
use std::path::PathBuf;

/// CLI arguments for placefinder
#[derive(Debug, Parser)]
#[command(
    name = "placefinder",
    version,
    about = "Suggest cities/areas and search places through the place finder backend"
)]
pub struct CliArgs {
    /// Path to a custom catalog (.json or .json.gz); defaults to the embedded one
    #[arg(short = 'c', long = "catalog", global = true)]
    pub catalog: Option<PathBuf>,

    /// Base URL of the search backend
    #[arg(long = "api-url", env = API_URL_ENV, default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog contents
    Stats,

    /// Suggest cities starting with a prefix
    Cities {
        /// Prefix to match (case-insensitive)
        query: String,
    },

    /// Suggest areas of a city; lists all of them without a prefix
    Areas {
        /// City name (any casing)
        city: String,

        /// Prefix to match (case-insensitive)
        query: Option<String>,
    },

    /// List place types
    Types {
        /// Ask the backend instead of using the catalog
        #[arg(long)]
        remote: bool,
    },

    /// Search places in an area of a city
    Search {
        #[arg(long)]
        city: String,

        #[arg(long)]
        area: String,

        /// Place type (e.g. cafe, restaurant, gym)
        #[arg(short = 't', long = "type")]
        place_type: String,
    },

    /// Probe the backend's health endpoint
    Health,
}
