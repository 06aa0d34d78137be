use crate::{log, to_js};
use placefinder_core::prelude::*;
use serde::Serialize;
use std::result::Result;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// What the result region should show after a search.
#[derive(Debug, Serialize)]
pub(crate) struct SearchView {
    pub message: Option<&'static str>,
    pub cards: Vec<PlaceCard>,
}

impl SearchView {
    pub(crate) fn from_outcome(outcome: &SearchOutcome, selected_type: &str) -> Self {
        Self {
            message: outcome.message(),
            cards: PlaceCard::from_places(outcome.places(), selected_type),
        }
    }
}

/// Validate, `POST {base}/search`, and map the reply.
///
/// Rejects with the validation message when a field is blank; every request
/// failure resolves to `{ message: "Failed to search places...", cards: [] }`.
#[wasm_bindgen]
pub async fn search_places(
    base_url: String,
    city: String,
    area: String,
    place_type: String,
) -> Result<JsValue, JsValue> {
    let config = ClientConfig::new(&base_url);
    let request = SearchForm::new(&city, &area, &place_type)
        .validate()
        .map_err(crate::to_js_error)?;
    let outcome = post_search(&config, &request).await;
    to_js(&SearchView::from_outcome(&outcome, &request.place_type))
}

/// Best-effort `GET {base}/health`; the result is only logged. Resolves to
/// `true` for any 2xx reply.
#[wasm_bindgen]
pub async fn check_backend(base_url: String) -> JsValue {
    let config = ClientConfig::new(&base_url);
    JsValue::from_bool(probe_health(&config).await)
}

pub(crate) async fn probe_health(config: &ClientConfig) -> bool {
    match fetch_text(&config.endpoint("health"), None).await {
        Ok(body) => {
            let status = HealthStatus::from_body(&body);
            log(&format!("Backend connection successful ({})", status.status));
            true
        }
        Err(e) => {
            web_sys::console::warn_2(&"Backend not available:".into(), &e);
            false
        }
    }
}

pub(crate) async fn post_search(config: &ClientConfig, request: &SearchRequest) -> SearchOutcome {
    match try_post_search(config, request).await {
        Ok(resp) => SearchOutcome::from_response(resp),
        Err(e) => {
            web_sys::console::error_2(&"Search error:".into(), &e);
            SearchOutcome::Failed
        }
    }
}

async fn try_post_search(
    config: &ClientConfig,
    request: &SearchRequest,
) -> Result<SearchResponse, JsValue> {
    let body = serde_json::to_string(request).map_err(crate::to_js_error)?;
    let text = fetch_text(&config.endpoint("search"), Some(&body)).await?;
    serde_json::from_str(&text).map_err(crate::to_js_error)
}

/// GET `url`, or POST `body` as JSON when given. Non-2xx is an error.
async fn fetch_text(url: &str, body: Option<&str>) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    match body {
        Some(b) => {
            opts.set_method("POST");
            opts.set_body(&JsValue::from_str(b));
        }
        None => opts.set_method("GET"),
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "HTTP error! status: {}",
            resp.status()
        )));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}
