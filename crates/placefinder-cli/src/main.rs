//! placefinder: command-line front end for placefinder-core
//!
//! Runs the same suggestion filter and search flow as the browser form:
//!
//! - Suggest cities / areas
//!   $ placefinder cities b
//!   $ placefinder areas "  BENGALURU " w
//!
//! - Search (POST {api-url}/search)
//!   $ placefinder search --city Bengaluru --area Koramangala --type cafe
//!
//! - Probe the backend
//!   $ placefinder --api-url http://localhost:8002 health
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use placefinder_core::autocomplete::Dropdown;
use placefinder_core::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "placefinder=warn";

/// `RUST_LOG` wins when set and valid; otherwise warnings from our crates.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let catalog = match &args.catalog {
        Some(path) => Catalog::load_from_path(path)?,
        None => Catalog::load()?,
    };
    let config = ClientConfig::new(&args.api_url);
    tracing::debug!(api_url = %config.base_url, catalog = ?args.catalog, "resolved configuration");

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            println!("Catalog statistics:");
            println!("  Cities: {}", stats.cities);
            println!("  Cities with areas: {}", stats.cities_with_areas);
            println!("  Areas: {}", stats.areas);
            println!("  Place types: {}", stats.place_types);
        }

        Commands::Cities { query } => {
            print_suggestions(catalog.cities(), &query);
        }

        Commands::Areas { city, query } => {
            let areas = catalog.areas_for(&city);
            match query {
                Some(q) => print_suggestions(areas, &q),
                None if areas.is_empty() => println!("{NO_MATCHES}"),
                None => areas.iter().for_each(|a| println!("{a}")),
            }
        }

        Commands::Types { remote } => {
            let types = if remote {
                HttpClient::new(config)?.place_types()?
            } else {
                catalog.place_types().to_vec()
            };
            for t in types {
                println!("{t}");
            }
        }

        Commands::Search {
            city,
            area,
            place_type,
        } => {
            let client = HttpClient::new(config)?;
            let form = SearchForm::new(&city, &area, &place_type);
            let mut session = SearchSession::new();
            eprintln!("{}", session.trigger_label());
            let outcome = session.run(&client, &form)?;

            match outcome.message() {
                Some(msg) => println!("{msg}"),
                None => {
                    for card in PlaceCard::from_places(outcome.places(), &place_type) {
                        println!("{} [{}]", card.name, card.place_type);
                        println!("  {}", card.address);
                        if let Some(phone) = &card.phone {
                            println!("  phone: {phone}");
                        }
                        println!("  maps:  {}", card.maps_url);
                    }
                }
            }
        }

        Commands::Health => {
            let client = HttpClient::new(config)?;
            if check_health(&client) {
                println!("Backend connection successful ({})", client.config().base_url);
            } else {
                println!("Backend connection failed ({})", client.config().base_url);
            }
        }
    }

    Ok(())
}

/// Print what the dropdown would render for `query`.
fn print_suggestions(candidates: &[String], query: &str) {
    let mut dropdown = Dropdown::new();
    dropdown.filter(candidates, query);
    let view = dropdown.view();
    if let Some(text) = view.placeholder_text() {
        println!("{text}");
    }
    for item in view.items {
        println!("{}", item.value);
    }
}
