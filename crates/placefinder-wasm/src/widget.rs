use crate::{catalog, to_js, to_js_error};
use placefinder_core::prelude::*;
use std::result::Result;
use wasm_bindgen::prelude::*;

/// The city/area autocomplete for JavaScript callers.
///
/// Every method returns a plain object: a `ControllerView`
/// (`{ city: { value, hint, dropdown }, area: {...} }`) or, for selections
/// and key presses, an `Effect` (`{ view, focus, consumed }`).
#[wasm_bindgen]
pub struct AutocompleteWidget {
    inner: AutocompleteController,
}

#[wasm_bindgen]
impl AutocompleteWidget {
    /// Widget over the embedded catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<AutocompleteWidget, JsValue> {
        Ok(Self {
            inner: AutocompleteController::new(catalog()?.clone()),
        })
    }

    /// Widget over a catalog given as JSON text.
    pub fn with_catalog(json: &str) -> Result<AutocompleteWidget, JsValue> {
        let catalog = Catalog::from_json_str(json).map_err(to_js_error)?;
        Ok(Self {
            inner: AutocompleteController::new(catalog),
        })
    }

    pub fn on_query_changed(&mut self, field: &str, query: &str) -> Result<JsValue, JsValue> {
        let field = parse_field(field)?;
        to_js(&self.inner.on_query_changed(field, query))
    }

    pub fn on_select(&mut self, field: &str, value: &str) -> Result<JsValue, JsValue> {
        let field = parse_field(field)?;
        to_js(&self.inner.on_select(field, value))
    }

    /// `key` is a DOM `KeyboardEvent.key` value.
    pub fn on_key_navigate(&mut self, field: &str, key: &str) -> Result<JsValue, JsValue> {
        let field = parse_field(field)?;
        to_js(&self.inner.on_key_navigate(field, NavKey::from_key_name(key)))
    }

    /// `target` is one of `city-input`, `city-dropdown`, `area-input`,
    /// `area-dropdown`; anything else counts as outside both fields.
    pub fn on_outside_interaction(&mut self, target: &str) -> Result<JsValue, JsValue> {
        to_js(&self.inner.on_outside_interaction(parse_target(target)))
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.view())
    }

    pub fn candidates(&self, field: &str) -> Result<JsValue, JsValue> {
        let field = parse_field(field)?;
        to_js(self.inner.candidates(field))
    }

    /// Current values as a validated request body; throws the user-facing
    /// message when a field is blank.
    pub fn request(&self, place_type: &str) -> Result<JsValue, JsValue> {
        let request = self.inner.form(place_type).validate().map_err(to_js_error)?;
        to_js(&request)
    }
}

fn parse_field(field: &str) -> Result<Field, JsValue> {
    field.parse::<Field>().map_err(|e| JsValue::from_str(&e))
}

pub(crate) fn parse_target(target: &str) -> Target {
    match target {
        "city-input" => Target::CityInput,
        "city-dropdown" => Target::CityDropdown,
        "area-input" => Target::AreaInput,
        "area-dropdown" => Target::AreaDropdown,
        _ => Target::Elsewhere,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_names() {
        assert_eq!(parse_target("city-dropdown"), Target::CityDropdown);
        assert_eq!(parse_target("area-input"), Target::AreaInput);
        assert_eq!(parse_target("body"), Target::Elsewhere);
    }
}
