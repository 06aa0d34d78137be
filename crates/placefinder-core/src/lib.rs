// crates/placefinder-core/src/lib.rs

//! Core of the place finder search form: the candidate catalog, the
//! city/area autocomplete state machine, search form validation and the
//! JSON contract of the remote search endpoint.

pub mod autocomplete;
pub mod card;
pub mod catalog;
#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod error;
pub mod loader;
pub mod prelude;
pub mod search;
pub mod session;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{PlaceError, Result};
pub use autocomplete::{AutocompleteController, Field, NavKey, Target, MAX_SUGGESTIONS};
pub use card::PlaceCard;
pub use catalog::{Catalog, CatalogStats};
#[cfg(feature = "client")]
pub use client::HttpClient;
pub use config::ClientConfig;
pub use search::{Place, SearchForm, SearchOutcome, SearchRequest, SearchResponse};
pub use session::SearchSession;
pub use traits::SearchBackend;
