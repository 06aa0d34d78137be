// crates/placefinder-core/src/session.rs
use crate::error::{PlaceError, Result};
use crate::search::{SearchForm, SearchOutcome, SearchRequest, SearchResponse};
use crate::traits::SearchBackend;
use serde::{Deserialize, Serialize};

pub const LABEL_IDLE: &str = "Search Places";
pub const LABEL_SEARCHING: &str = "Searching...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Idle,
    Searching,
}

/// Tracks the single in-flight search.
///
/// While a search is pending the trigger control is disabled; that is the
/// only guard against overlapping requests. There is no cancellation,
/// timeout or retry.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    state: SessionState,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the trigger control is disabled.
    pub fn is_busy(&self) -> bool {
        self.state == SessionState::Searching
    }

    pub fn trigger_label(&self) -> &'static str {
        match self.state {
            SessionState::Idle => LABEL_IDLE,
            SessionState::Searching => LABEL_SEARCHING,
        }
    }

    /// Validate `form` and mark a search as in flight.
    ///
    /// Validation failures leave the session idle and issue no request.
    pub fn begin(&mut self, form: &SearchForm) -> Result<SearchRequest> {
        if self.is_busy() {
            return Err(PlaceError::Busy);
        }
        let request = form.validate()?;
        self.state = SessionState::Searching;
        tracing::debug!(city = %request.city, area = %request.area, kind = %request.place_type, "search started");
        Ok(request)
    }

    /// Resolve the in-flight search. Always re-enables the trigger.
    pub fn finish(&mut self, result: Result<SearchResponse>) -> SearchOutcome {
        self.finish_with(SearchOutcome::from_result(result))
    }

    /// Resolve the in-flight search with an outcome the caller already
    /// mapped, e.g. from a transport with its own error type.
    pub fn finish_with(&mut self, outcome: SearchOutcome) -> SearchOutcome {
        self.state = SessionState::Idle;
        outcome
    }

    /// `begin`, call `backend`, `finish`. Only validation and the busy guard
    /// surface as errors; request failures become [`SearchOutcome::Failed`].
    pub fn run<B: SearchBackend + ?Sized>(
        &mut self,
        backend: &B,
        form: &SearchForm,
    ) -> Result<SearchOutcome> {
        let request = self.begin(form)?;
        Ok(self.finish(backend.search(&request)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{HealthStatus, Place};
    use std::cell::RefCell;

    struct FakeBackend {
        reply: fn() -> Result<SearchResponse>,
        seen: RefCell<Vec<SearchRequest>>,
    }

    impl SearchBackend for FakeBackend {
        fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
            self.seen.borrow_mut().push(request.clone());
            (self.reply)()
        }

        fn health(&self) -> Result<HealthStatus> {
            Ok(HealthStatus {
                status: "healthy".into(),
                service: None,
            })
        }
    }

    fn backend(reply: fn() -> Result<SearchResponse>) -> FakeBackend {
        FakeBackend {
            reply,
            seen: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn busy_session_rejects_second_begin() {
        let mut s = SearchSession::new();
        let form = SearchForm::new("Pune", "Baner", "gym");
        s.begin(&form).unwrap();
        assert!(s.is_busy());
        assert_eq!(s.trigger_label(), LABEL_SEARCHING);
        assert!(matches!(s.begin(&form), Err(PlaceError::Busy)));

        s.finish(Err(PlaceError::Status(502, "/search".into())));
        assert!(!s.is_busy());
        assert_eq!(s.trigger_label(), LABEL_IDLE);
    }

    #[test]
    fn invalid_form_sends_nothing() {
        let b = backend(|| unreachable!());
        let mut s = SearchSession::new();
        let err = s.run(&b, &SearchForm::new("Pune", "", "gym")).unwrap_err();
        assert!(matches!(err, PlaceError::MissingFields));
        assert!(b.seen.borrow().is_empty());
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[test]
    fn failure_re_enables_trigger() {
        let b = backend(|| Err(PlaceError::Status(500, "/search".into())));
        let mut s = SearchSession::new();
        let outcome = s.run(&b, &SearchForm::new("Pune", "Baner", "gym")).unwrap();
        assert_eq!(outcome, SearchOutcome::Failed);
        assert!(!s.is_busy());
    }

    #[test]
    fn results_flow_through() {
        let b = backend(|| {
            Ok(SearchResponse {
                places: vec![Place {
                    name: "Cult Fit".into(),
                    address: "Baner Rd".into(),
                    place_type: None,
                    phone: None,
                    rating: None,
                    description: None,
                }],
                success: Some(true),
                query: None,
                count: Some(1),
            })
        });
        let mut s = SearchSession::new();
        let outcome = s.run(&b, &SearchForm::new(" Pune", "Baner ", "gym")).unwrap();
        assert_eq!(outcome.places().len(), 1);
        assert_eq!(b.seen.borrow()[0].city, "Pune");
        assert_eq!(b.seen.borrow()[0].area, "Baner");
    }
}
