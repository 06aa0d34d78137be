// crates/placefinder-core/src/traits.rs
use crate::error::Result;
use crate::search::{HealthStatus, SearchRequest, SearchResponse};

/// The remote search service, seen through the two calls the form makes.
///
/// Implemented by the blocking HTTP client; tests and alternative front
/// ends can plug in their own.
pub trait SearchBackend {
    /// `POST /search`. Non-2xx statuses and undecodable bodies are errors.
    fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;

    /// `GET /health`. Any 2xx reply is `Ok`, whatever its body says.
    fn health(&self) -> Result<HealthStatus>;
}

/// Best-effort connectivity probe. The result is informational only: it is
/// logged and returned, never raised.
pub fn check_health<B: SearchBackend + ?Sized>(backend: &B) -> bool {
    match backend.health() {
        Ok(status) => {
            tracing::info!(status = %status.status, "backend connection successful");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "backend not available");
            false
        }
    }
}
