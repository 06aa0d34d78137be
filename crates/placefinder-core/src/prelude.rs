//! placefinder prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::autocomplete::{
    AutocompleteController, ControllerView, DropdownView, Effect, Field, NavKey, Target,
    MAX_SUGGESTIONS, NO_MATCHES,
};
pub use crate::card::PlaceCard;
pub use crate::catalog::{Catalog, CatalogStats};
#[cfg(feature = "client")]
pub use crate::client::HttpClient;
pub use crate::config::ClientConfig;
pub use crate::error::{PlaceError, Result};
pub use crate::search::{
    HealthStatus, Place, SearchForm, SearchOutcome, SearchRequest, SearchResponse,
};
pub use crate::session::SearchSession;
pub use crate::text::fold_key;
pub use crate::traits::{check_health, SearchBackend};
