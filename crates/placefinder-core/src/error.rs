// crates/placefinder-core/src/error.rs
use thiserror::Error;

/// Message shown when the search form is submitted with a blank field.
pub const MSG_MISSING_FIELDS: &str = "Please fill in all fields";

/// Errors produced by the catalog loader, the search form and the HTTP client.
///
/// Autocomplete never produces one of these: an unmatched query is an empty
/// suggestion list, not a failure.
#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("{}", MSG_MISSING_FIELDS)]
    MissingFields,

    #[error("a search is already in flight")]
    Busy,

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid catalog: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("HTTP status {0} from {1}")]
    Status(u16, String),
}

pub type Result<T> = std::result::Result<T, PlaceError>;
