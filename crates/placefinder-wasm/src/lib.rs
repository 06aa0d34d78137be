//! placefinder-wasm: WebAssembly bindings for placefinder-core
//!
//! This crate exposes the place finder form logic to the browser. It embeds
//! the default candidate catalog (via `placefinder-core`) and provides:
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - [`AutocompleteWidget`]: the city/area autocomplete state machine as a JS
//!   class whose methods return plain render-state objects
//! - `search_places(baseUrl, city, area, type)`: validated `POST /search`
//!   through `fetch`, resolving to `{ message, cards }`
//! - `check_backend(baseUrl)`: best-effort `GET /health`, logged only
//! - `mount(baseUrl?)`: binds the whole search form on the current page
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { mount } from 'placefinder-wasm';
//!
//! async function main() {
//!   await init();
//!   mount('http://localhost:8000');
//! }
//! main();
//! ```
//!
//! Using the widget without the DOM binder
//! ---------------------------------------
//! ```javascript
//! import init, { AutocompleteWidget } from 'placefinder-wasm';
//!
//! await init();
//! const ac = new AutocompleteWidget();
//! let view = ac.on_query_changed('city', 'be');
//! view = ac.on_key_navigate('city', 'ArrowDown').view;
//! ```
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use placefinder_core::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use std::result::Result;

mod dom;
mod fetch;
mod widget;

pub use dom::mount;
pub use fetch::{check_backend, search_places};
pub use widget::AutocompleteWidget;

// 1. Static Instance
static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("Initializing place finder WASM module...");

    match catalog() {
        Ok(c) => log(&format!("✓ Loaded {} cities", c.stats().cities)),
        Err(e) => web_sys::console::error_1(&e),
    }
}

/// The embedded catalog, parsed on first use.
pub(crate) fn catalog() -> Result<&'static Catalog, JsValue> {
    if let Some(c) = CATALOG.get() {
        return Ok(c);
    }
    let loaded = Catalog::load().map_err(to_js_error)?;
    Ok(CATALOG.get_or_init(|| loaded))
}

pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

pub(crate) fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(JsValue::from)
}

/* --------------------------------------------------------------------------
   Catalog Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_place_types() -> Result<JsValue, JsValue> {
    to_js(catalog()?.place_types())
}

#[wasm_bindgen]
pub fn get_catalog_stats() -> Result<JsValue, JsValue> {
    to_js(&catalog()?.stats())
}

/* --------------------------------------------------------------------------
   Form Helpers
-------------------------------------------------------------------------- */

/// Validate the three form values, resolving to the request body or
/// throwing the user-facing message.
#[wasm_bindgen]
pub fn validate_search(city: &str, area: &str, place_type: &str) -> Result<JsValue, JsValue> {
    let request = SearchForm::new(city, area, place_type)
        .validate()
        .map_err(to_js_error)?;
    to_js(&request)
}

/// Map a `places` array from the backend into card view models.
#[wasm_bindgen]
pub fn place_cards(places: JsValue, selected_type: &str) -> Result<JsValue, JsValue> {
    let places: Vec<Place> = serde_wasm_bindgen::from_value(places)?;
    to_js(&PlaceCard::from_places(&places, selected_type))
}
