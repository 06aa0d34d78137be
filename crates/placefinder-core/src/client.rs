// crates/placefinder-core/src/client.rs
#![cfg(feature = "client")]

use crate::config::ClientConfig;
use crate::error::{PlaceError, Result};
use crate::search::{HealthStatus, SearchRequest, SearchResponse};
use crate::traits::SearchBackend;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

impl From<reqwest::Error> for PlaceError {
    fn from(e: reqwest::Error) -> Self {
        PlaceError::Http(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct TypesResponse {
    types: Vec<String>,
}

/// Blocking HTTP client for the search backend.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("placefinder/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /types`: the place types the backend advertises.
    pub fn place_types(&self) -> Result<Vec<String>> {
        let url = self.config.endpoint("types");
        let resp = self.http.get(&url).send()?;
        let body: TypesResponse = decode(resp, &url)?;
        Ok(body.types)
    }
}

impl SearchBackend for HttpClient {
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = self.config.endpoint("search");
        tracing::debug!(%url, "posting search request");
        let resp = self.http.post(&url).json(request).send()?;
        decode(resp, &url)
    }

    fn health(&self) -> Result<HealthStatus> {
        let url = self.config.endpoint("health");
        let resp = self.http.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(PlaceError::Status(status.as_u16(), url));
        }
        Ok(HealthStatus::from_body(&resp.text()?))
    }
}

fn decode<T: DeserializeOwned>(resp: Response, url: &str) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        return Err(PlaceError::Status(status.as_u16(), url.to_string()));
    }
    let text = resp.text()?;
    serde_json::from_str(&text).map_err(PlaceError::Json)
}
