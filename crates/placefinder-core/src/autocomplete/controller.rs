// crates/placefinder-core/src/autocomplete/controller.rs
use super::dropdown::{Dropdown, DropdownView};
use super::{Field, NavKey, Target, DEFAULT_AREA_HINT, DEFAULT_CITY_HINT};
use crate::catalog::Catalog;
use crate::search::SearchForm;
use serde::{Deserialize, Serialize};

/// Render state of one text field and its dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    pub value: String,
    pub hint: String,
    pub dropdown: DropdownView,
}

/// Render state of both autocompleted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerView {
    pub city: FieldView,
    pub area: FieldView,
}

impl ControllerView {
    pub fn field(&self, field: Field) -> &FieldView {
        match field {
            Field::City => &self.city,
            Field::Area => &self.area,
        }
    }
}

/// Result of a selection or key press.
///
/// `consumed` tells the event binder to suppress the key's default action;
/// an unconsumed Enter is free to submit the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub view: ControllerView,
    pub focus: Option<Field>,
    pub consumed: bool,
}

/// The city and area dropdowns plus the coordination between them.
///
/// The area candidates are always derived from the current city value, and
/// any change of city clears the area value and closes the area dropdown.
#[derive(Debug, Clone)]
pub struct AutocompleteController {
    catalog: Catalog,
    city_value: String,
    area_value: String,
    area_hint: String,
    city: Dropdown,
    area: Dropdown,
}

impl AutocompleteController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            city_value: String::new(),
            area_value: String::new(),
            area_hint: DEFAULT_AREA_HINT.to_string(),
            city: Dropdown::new(),
            area: Dropdown::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::City => &self.city_value,
            Field::Area => &self.area_value,
        }
    }

    pub fn dropdown(&self, field: Field) -> &Dropdown {
        match field {
            Field::City => &self.city,
            Field::Area => &self.area,
        }
    }

    /// Candidate list for `field`. For the area this is the list of the
    /// currently entered city, empty when the city is unknown.
    pub fn candidates(&self, field: Field) -> &[String] {
        match field {
            Field::City => self.catalog.cities(),
            Field::Area => self.catalog.areas_for(&self.city_value),
        }
    }

    /// The input value of `field` changed to `raw_query`.
    pub fn on_query_changed(&mut self, field: Field, raw_query: &str) -> ControllerView {
        match field {
            Field::City => {
                self.city_value = raw_query.to_string();
                self.reset_area();
                self.city.filter(self.catalog.cities(), raw_query);
            }
            Field::Area => {
                self.area_value = raw_query.to_string();
                let candidates = self.catalog.areas_for(&self.city_value);
                self.area.filter(candidates, raw_query);
            }
        }
        tracing::trace!(field = field.as_str(), query = raw_query, "query changed");
        self.view()
    }

    /// `value` was picked from `field`'s dropdown.
    pub fn on_select(&mut self, field: Field, value: &str) -> Effect {
        match field {
            Field::City => {
                self.city_value = value.to_string();
                self.city.close();
                self.reset_area();
                if let Some(first) = self.catalog.areas_for(value).first() {
                    self.area_hint = format!("e.g., {first}");
                }
            }
            Field::Area => {
                self.area_value = value.to_string();
                self.area.close();
            }
        }
        tracing::debug!(field = field.as_str(), value, "suggestion selected");
        Effect {
            view: self.view(),
            focus: Some(field),
            consumed: true,
        }
    }

    /// Keyboard navigation inside `field`'s dropdown.
    ///
    /// Only acts while the dropdown is open with at least one selectable
    /// item; otherwise the key passes through untouched.
    pub fn on_key_navigate(&mut self, field: Field, key: NavKey) -> Effect {
        let dropdown = match field {
            Field::City => &mut self.city,
            Field::Area => &mut self.area,
        };

        if !dropdown.is_navigable() || key == NavKey::Other {
            return self.pass_through();
        }

        match key {
            NavKey::ArrowDown => {
                dropdown.move_down();
            }
            NavKey::ArrowUp => {
                dropdown.move_up();
            }
            NavKey::Enter => {
                if let Some(value) = dropdown.highlighted().map(str::to_string) {
                    return self.on_select(field, &value);
                }
            }
            NavKey::Escape => dropdown.close(),
            NavKey::Other => {}
        }

        Effect {
            view: self.view(),
            focus: None,
            consumed: true,
        }
    }

    /// A pointer interaction landed on `target`; every dropdown not
    /// containing it closes.
    pub fn on_outside_interaction(&mut self, target: Target) -> ControllerView {
        if !target.is_within(Field::City) {
            self.city.close();
        }
        if !target.is_within(Field::Area) {
            self.area.close();
        }
        self.view()
    }

    /// Snapshot of the current field values for submission.
    pub fn form(&self, place_type: &str) -> SearchForm {
        SearchForm::new(&self.city_value, &self.area_value, place_type)
    }

    pub fn view(&self) -> ControllerView {
        ControllerView {
            city: FieldView {
                value: self.city_value.clone(),
                hint: DEFAULT_CITY_HINT.to_string(),
                dropdown: self.city.view(),
            },
            area: FieldView {
                value: self.area_value.clone(),
                hint: self.area_hint.clone(),
                dropdown: self.area.view(),
            },
        }
    }

    fn reset_area(&mut self) {
        self.area_value.clear();
        self.area_hint = DEFAULT_AREA_HINT.to_string();
        self.area.close();
    }

    fn pass_through(&self) -> Effect {
        Effect {
            view: self.view(),
            focus: None,
            consumed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> AutocompleteController {
        AutocompleteController::new(Catalog::load().unwrap())
    }

    #[test]
    fn city_typing_clears_area() {
        let mut ac = controller();
        ac.on_select(Field::City, "Mumbai");
        ac.on_query_changed(Field::Area, "Ba");
        assert!(ac.dropdown(Field::Area).is_open());

        let view = ac.on_query_changed(Field::City, "Mum");
        assert_eq!(view.area.value, "");
        assert!(!view.area.dropdown.open);
        assert_eq!(view.area.hint, DEFAULT_AREA_HINT);
    }

    #[test]
    fn area_candidates_follow_city() {
        let mut ac = controller();
        ac.on_query_changed(Field::City, "  CHENNAI ");
        assert_eq!(ac.candidates(Field::Area).len(), 5);
        ac.on_query_changed(Field::City, "Chennai Central");
        assert!(ac.candidates(Field::Area).is_empty());
    }

    #[test]
    fn selecting_city_primes_area_hint() {
        let mut ac = controller();
        let fx = ac.on_select(Field::City, "Delhi");
        assert_eq!(fx.view.area.hint, "e.g., Connaught Place");
        assert_eq!(fx.focus, Some(Field::City));

        let fx = ac.on_select(Field::City, "Surat");
        assert_eq!(fx.view.area.hint, DEFAULT_AREA_HINT);
    }

    #[test]
    fn other_keys_pass_through() {
        let mut ac = controller();
        ac.on_query_changed(Field::City, "p");
        let fx = ac.on_key_navigate(Field::City, NavKey::Other);
        assert!(!fx.consumed);
        assert!(fx.view.city.dropdown.open);
    }

    #[test]
    fn enter_without_highlight_is_swallowed() {
        let mut ac = controller();
        ac.on_query_changed(Field::City, "b");
        let fx = ac.on_key_navigate(Field::City, NavKey::Enter);
        assert!(fx.consumed);
        assert_eq!(fx.view.city.value, "b");
        assert!(fx.view.city.dropdown.open);
    }

    #[test]
    fn enter_on_closed_dropdown_passes_through() {
        let mut ac = controller();
        let fx = ac.on_key_navigate(Field::City, NavKey::Enter);
        assert!(!fx.consumed);
    }

    #[test]
    fn escape_closes_and_clears_highlight() {
        let mut ac = controller();
        ac.on_query_changed(Field::City, "k");
        ac.on_key_navigate(Field::City, NavKey::ArrowDown);
        let fx = ac.on_key_navigate(Field::City, NavKey::Escape);
        assert!(fx.consumed);
        assert!(!fx.view.city.dropdown.open);
        assert_eq!(ac.dropdown(Field::City).highlight(), None);
        assert_eq!(fx.view.city.value, "k");
    }

    #[test]
    fn outside_click_closes_only_other_fields() {
        let mut ac = controller();
        ac.on_select(Field::City, "Hyderabad");
        ac.on_query_changed(Field::Area, "g");

        let view = ac.on_outside_interaction(Target::AreaDropdown);
        assert!(view.area.dropdown.open);

        let view = ac.on_outside_interaction(Target::CityInput);
        assert!(!view.area.dropdown.open);
        assert_eq!(view.area.value, "g");
    }

    #[test]
    fn outside_click_elsewhere_closes_both() {
        let mut ac = controller();
        ac.on_query_changed(Field::City, "c");
        let view = ac.on_outside_interaction(Target::Elsewhere);
        assert!(!view.city.dropdown.open);
        assert!(!view.area.dropdown.open);
    }

    #[test]
    fn form_snapshots_values() {
        let mut ac = controller();
        ac.on_select(Field::City, "Bengaluru");
        ac.on_select(Field::Area, "Koramangala");
        let form = ac.form("restaurant");
        assert_eq!(form.city, "Bengaluru");
        assert_eq!(form.area, "Koramangala");
        assert_eq!(form.place_type, "restaurant");
    }
}
