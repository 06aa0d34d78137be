#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const FORM: &str = r#"
    <input id="city" type="text">
    <input id="area" type="text">
    <select id="type"><option value="cafe">Cafe</option></select>
    <button id="searchBtn">Search Places</button>
    <div id="loading"></div>
    <div id="results"><div id="resultsContainer"></div></div>
    <div id="error"><span id="errorText"></span></div>
    <p id="elsewhere">footer</p>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn element<T: JsCast>(id: &str) -> T {
    document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} missing"))
        .dyn_into::<T>()
        .unwrap()
}

fn type_into(id: &str, value: &str) {
    let input: HtmlInputElement = element(id);
    input.set_value(value);
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
}

fn list_shown(id: &str) -> bool {
    let list: HtmlElement = element(id);
    list.style().get_property_value("display").unwrap() == "block"
}

#[wasm_bindgen_test]
fn clicks_outside_the_fields_close_their_suggestions() {
    document().body().unwrap().set_inner_html(FORM);
    placefinder_wasm::mount(Some("http://127.0.0.1:9".into())).unwrap();
    assert!(!list_shown("citySuggestions"));
    assert!(!list_shown("areaSuggestions"));

    type_into("city", "Bengaluru");
    type_into("area", "k");
    assert!(list_shown("citySuggestions"));
    assert!(list_shown("areaSuggestions"));
    let area_list: HtmlElement = element("areaSuggestions");
    assert_eq!(area_list.text_content().as_deref(), Some("Koramangala"));

    // A click on the city input keeps its own list and closes the other one.
    element::<HtmlElement>("city").click();
    assert!(list_shown("citySuggestions"));
    assert!(!list_shown("areaSuggestions"));

    element::<HtmlElement>("elsewhere").click();
    assert!(!list_shown("citySuggestions"));
    assert!(!list_shown("areaSuggestions"));
}
