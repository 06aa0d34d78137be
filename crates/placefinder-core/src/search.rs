// crates/placefinder-core/src/search.rs

//! Search form validation and the JSON contract of the remote search
//! endpoint (`POST {base}/search`, `GET {base}/health`).

use crate::error::{PlaceError, Result};
use serde::{Deserialize, Deserializer, Serialize};

pub const MSG_NO_PLACES: &str = "No places found for your search criteria";
pub const MSG_SEARCH_FAILED: &str = "Failed to search places. Please try again.";

/// Raw values of the three form controls at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub city: String,
    pub area: String,
    pub place_type: String,
}

impl SearchForm {
    pub fn new(city: &str, area: &str, place_type: &str) -> Self {
        Self {
            city: city.to_string(),
            area: area.to_string(),
            place_type: place_type.to_string(),
        }
    }

    /// Trim the fields and turn them into a request body.
    ///
    /// Any blank field yields [`PlaceError::MissingFields`] and no request.
    pub fn validate(&self) -> Result<SearchRequest> {
        let city = self.city.trim();
        let area = self.area.trim();
        let place_type = self.place_type.trim();
        if city.is_empty() || area.is_empty() || place_type.is_empty() {
            return Err(PlaceError::MissingFields);
        }
        Ok(SearchRequest {
            city: city.to_string(),
            area: area.to_string(),
            place_type: place_type.to_string(),
        })
    }
}

/// Body of `POST /search`. Serializes as `{"city":..,"area":..,"type":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub city: String,
    pub area: String,
    #[serde(rename = "type")]
    pub place_type: String,
}

/// A place as returned by the backend. Only `name` and `address` are
/// guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub address: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub place_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response of `POST /search`. A missing or `null` `places` reads as no
/// places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub places: Vec<Place>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Place>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Place>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /health`. Reachability is decided by the HTTP status alone;
/// the body is informational and every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl HealthStatus {
    /// Lenient decode of a 2xx health body; anything unparsable is an empty
    /// status.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// What the result region shows once a search resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "places", rename_all = "lowercase")]
pub enum SearchOutcome {
    Results(Vec<Place>),
    Empty,
    Failed,
}

impl SearchOutcome {
    pub fn from_response(resp: SearchResponse) -> Self {
        if resp.places.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Results(resp.places)
        }
    }

    /// Collapse any request failure into [`SearchOutcome::Failed`], logging
    /// the underlying error.
    pub fn from_result(result: Result<SearchResponse>) -> Self {
        match result {
            Ok(resp) => Self::from_response(resp),
            Err(e) => {
                tracing::error!(error = %e, "search request failed");
                SearchOutcome::Failed
            }
        }
    }

    /// User-facing error message, if the outcome is not a result list.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::Results(_) => None,
            SearchOutcome::Empty => Some(MSG_NO_PLACES),
            SearchOutcome::Failed => Some(MSG_SEARCH_FAILED),
        }
    }

    pub fn places(&self) -> &[Place] {
        match self {
            SearchOutcome::Results(p) => p,
            _ => &[],
        }
    }
}
