//! Binds the search form on the current page to the core state machine.
//!
//! Expected element ids: `city`, `area`, `type`, `searchBtn`, `loading`,
//! `results`, `resultsContainer`, `error`, `errorText`. The suggestion lists
//! `citySuggestions` / `areaSuggestions` are created next to their inputs
//! when the page does not provide them.

use crate::fetch::{post_search, probe_health, SearchView};
use crate::{catalog, log};
use placefinder_core::autocomplete::{ControllerView, Effect, FieldView};
use placefinder_core::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::result::Result;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlSelectElement, KeyboardEvent, Node,
};

struct Elements {
    city: HtmlInputElement,
    area: HtmlInputElement,
    kind: HtmlSelectElement,
    button: HtmlButtonElement,
    loading: HtmlElement,
    results: HtmlElement,
    results_container: Element,
    error: HtmlElement,
    error_text: Element,
    city_list: HtmlElement,
    area_list: HtmlElement,
}

impl Elements {
    fn lookup(doc: &Document) -> Result<Self, JsValue> {
        let city: HtmlInputElement = by_id(doc, "city")?;
        let area: HtmlInputElement = by_id(doc, "area")?;
        let city_list = suggestion_list(doc, &city, "citySuggestions")?;
        let area_list = suggestion_list(doc, &area, "areaSuggestions")?;
        Ok(Self {
            kind: by_id(doc, "type")?,
            button: by_id(doc, "searchBtn")?,
            loading: by_id(doc, "loading")?,
            results: by_id(doc, "results")?,
            results_container: by_id(doc, "resultsContainer")?,
            error: by_id(doc, "error")?,
            error_text: by_id(doc, "errorText")?,
            city,
            area,
            city_list,
            area_list,
        })
    }

    fn input(&self, field: Field) -> &HtmlInputElement {
        match field {
            Field::City => &self.city,
            Field::Area => &self.area,
        }
    }

    fn list(&self, field: Field) -> &HtmlElement {
        match field {
            Field::City => &self.city_list,
            Field::Area => &self.area_list,
        }
    }
}

struct App {
    document: Document,
    els: Elements,
    controller: AutocompleteController,
    session: SearchSession,
    config: ClientConfig,
}

type Shared = Rc<RefCell<App>>;

/// Wire up the form. `base_url` defaults to `http://localhost:8000`.
#[wasm_bindgen]
pub fn mount(base_url: Option<String>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = base_url
        .map(|u| ClientConfig::new(&u))
        .unwrap_or_default();
    let app = Rc::new(RefCell::new(App {
        els: Elements::lookup(&document)?,
        document: document.clone(),
        controller: AutocompleteController::new(catalog()?.clone()),
        session: SearchSession::new(),
        config: config.clone(),
    }));

    bind_field(&app, Field::City)?;
    bind_field(&app, Field::Area)?;
    bind_search(&app)?;
    bind_outside_clicks(&app, &document)?;

    {
        let a = app.borrow();
        a.render(&a.controller.view());
        a.els.city.focus()?;
    }

    wasm_bindgen_futures::spawn_local(async move {
        probe_health(&config).await;
    });

    log("Place finder initialized");
    Ok(())
}

fn bind_field(app: &Shared, field: Field) -> Result<(), JsValue> {
    let (input, list) = {
        let a = app.borrow();
        (a.els.input(field).clone(), a.els.list(field).clone())
    };

    on(&input, "input", {
        let app = app.clone();
        move |_ev: Event| {
            let mut a = app.borrow_mut();
            let value = a.els.input(field).value();
            let view = a.controller.on_query_changed(field, &value);
            a.render(&view);
        }
    })?;

    on(&input, "keydown", {
        let app = app.clone();
        move |ev: Event| {
            let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            let fx = app
                .borrow_mut()
                .controller
                .on_key_navigate(field, NavKey::from_key_name(&key));
            if fx.consumed {
                ev.prevent_default();
            }
            app.borrow().apply(&fx);
            if !fx.consumed && key == "Enter" {
                start_search(&app);
            }
        }
    })?;

    on(&list, "click", {
        let app = app.clone();
        move |ev: Event| {
            let item = ev
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("li[data-value]").ok().flatten());
            let Some(value) = item.and_then(|li| li.get_attribute("data-value")) else {
                return;
            };
            let fx = app.borrow_mut().controller.on_select(field, &value);
            app.borrow().apply(&fx);
        }
    })?;

    Ok(())
}

fn bind_search(app: &Shared) -> Result<(), JsValue> {
    let (button, kind) = {
        let a = app.borrow();
        (a.els.button.clone(), a.els.kind.clone())
    };

    on(&button, "click", {
        let app = app.clone();
        move |_ev: Event| start_search(&app)
    })?;

    on(&kind, "keydown", {
        let app = app.clone();
        move |ev: Event| {
            if ev.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Enter") {
                start_search(&app);
            }
        }
    })
}

fn bind_outside_clicks(app: &Shared, document: &Document) -> Result<(), JsValue> {
    on(document, "click", {
        let app = app.clone();
        move |ev: Event| {
            let node = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
            let mut a = app.borrow_mut();
            let target = a.classify(node.as_ref());
            let view = a.controller.on_outside_interaction(target);
            a.render(&view);
        }
    })
}

fn start_search(app: &Shared) {
    let request = {
        let mut a = app.borrow_mut();
        let form = SearchForm::new(
            &a.els.city.value(),
            &a.els.area.value(),
            &a.els.kind.value(),
        );
        match a.session.begin(&form) {
            Ok(request) => request,
            Err(PlaceError::Busy) => return,
            Err(e) => {
                a.show_error(&e.to_string());
                return;
            }
        }
    };

    {
        let a = app.borrow();
        a.show_loading();
        a.set_display(&a.els.error, false);
        a.set_display(&a.els.results, false);
    }

    let app = app.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let config = app.borrow().config.clone();
        let outcome = post_search(&config, &request).await;

        let mut a = app.borrow_mut();
        let outcome = a.session.finish_with(outcome);
        a.show_loading();
        let view = SearchView::from_outcome(&outcome, &request.place_type);
        match view.message {
            Some(msg) => a.show_error(msg),
            None => {
                if let Err(e) = a.show_results(&view.cards) {
                    web_sys::console::error_2(&"Rendering results failed:".into(), &e);
                }
            }
        }
    });
}

impl App {
    fn apply(&self, fx: &Effect) {
        self.render(&fx.view);
        if let Some(field) = fx.focus {
            let _ = self.els.input(field).focus();
        }
    }

    fn render(&self, view: &ControllerView) {
        for field in [Field::City, Field::Area] {
            if let Err(e) = self.render_field(field, view.field(field)) {
                web_sys::console::error_2(&"Rendering suggestions failed:".into(), &e);
            }
        }
    }

    fn render_field(&self, field: Field, fv: &FieldView) -> Result<(), JsValue> {
        let input = self.els.input(field);
        if input.value() != fv.value {
            input.set_value(&fv.value);
        }
        input.set_placeholder(&fv.hint);

        let list = self.els.list(field);
        list.set_inner_html("");
        if !fv.dropdown.open {
            self.set_display(list, false);
            return Ok(());
        }

        if let Some(text) = fv.dropdown.placeholder_text() {
            let li = self.element("li", "suggestion-item no-results", text)?;
            list.append_child(&li)?;
        }
        for item in &fv.dropdown.items {
            let class = if item.highlighted {
                "suggestion-item highlighted"
            } else {
                "suggestion-item"
            };
            let li = self.element("li", class, &item.value)?;
            li.set_attribute("data-value", &item.value)?;
            list.append_child(&li)?;
        }
        self.set_display(list, true);
        Ok(())
    }

    fn classify(&self, node: Option<&Node>) -> Target {
        let Some(node) = node else {
            return Target::Elsewhere;
        };
        if contains(&self.els.city, node) {
            Target::CityInput
        } else if contains(&self.els.city_list, node) {
            Target::CityDropdown
        } else if contains(&self.els.area, node) {
            Target::AreaInput
        } else if contains(&self.els.area_list, node) {
            Target::AreaDropdown
        } else {
            Target::Elsewhere
        }
    }

    /// Toggles the loading indicator and the trigger according to the
    /// session state.
    fn show_loading(&self) {
        let busy = self.session.is_busy();
        self.set_display(&self.els.loading, busy);
        self.els.button.set_disabled(busy);
        self.els
            .button
            .set_text_content(Some(self.session.trigger_label()));
    }

    fn show_error(&self, message: &str) {
        self.els.error_text.set_text_content(Some(message));
        self.set_display(&self.els.error, true);
    }

    fn show_results(&self, cards: &[PlaceCard]) -> Result<(), JsValue> {
        self.els.results_container.set_inner_html("");
        for card in cards {
            let node = self.card(card)?;
            self.els.results_container.append_child(&node)?;
        }
        self.set_display(&self.els.results, true);
        Ok(())
    }

    fn card(&self, card: &PlaceCard) -> Result<Element, JsValue> {
        let root = self.element("div", "place-card", "")?;

        let header = self.element("div", "place-header", "")?;
        let titles = self.element("div", "", "")?;
        titles.append_child(&self.element("div", "place-name", &card.name)?.into())?;
        titles.append_child(&self.element("div", "place-type", &card.place_type)?.into())?;
        header.append_child(&titles)?;
        root.append_child(&header)?;

        root.append_child(&self.element("div", "place-address", &card.address)?.into())?;
        if let Some(phone) = &card.phone {
            root.append_child(&self.element("div", "place-phone", phone)?.into())?;
        }

        let actions = self.element("div", "place-actions", "")?;
        let maps = self.element("a", "action-btn maps-btn", "View on Maps")?;
        maps.set_attribute("href", &card.maps_url)?;
        maps.set_attribute("target", "_blank")?;
        maps.set_attribute("rel", "noopener")?;
        actions.append_child(&maps)?;
        if let Some(url) = &card.phone_url {
            let call = self.element("a", "action-btn phone-btn", "Call Now")?;
            call.set_attribute("href", url)?;
            actions.append_child(&call)?;
        }
        root.append_child(&actions)?;
        Ok(root)
    }

    fn element(&self, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        if !text.is_empty() {
            el.set_text_content(Some(text));
        }
        Ok(el)
    }

    fn set_display(&self, el: &HtmlElement, visible: bool) {
        let value = if visible { "block" } else { "none" };
        let _ = el.style().set_property("display", value);
    }
}

fn contains(el: &Node, node: &Node) -> bool {
    el.contains(Some(node))
}

fn by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("#{id} has an unexpected element type")))
}

fn suggestion_list(
    doc: &Document,
    input: &HtmlInputElement,
    id: &str,
) -> Result<HtmlElement, JsValue> {
    if doc.get_element_by_id(id).is_none() {
        let ul = doc.create_element("ul")?;
        ul.set_id(id);
        ul.set_class_name("suggestions");
        input.after_with_node_1(&ul)?;
    }
    by_id(doc, id)
}

fn on<T, F>(target: &T, event: &str, handler: F) -> Result<(), JsValue>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .as_ref()
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
