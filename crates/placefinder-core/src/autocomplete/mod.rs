// crates/placefinder-core/src/autocomplete/mod.rs

//! # Autocomplete
//!
//! Filter-and-navigate state for the two suggestion dropdowns of the search
//! form. [`Dropdown`] holds one field's state; [`AutocompleteController`]
//! composes the city and area dropdowns and lets a city change reset the
//! area. Every operation is a synchronous state transition that returns the
//! new render state; binding to real input events is left to the caller.

mod controller;
mod dropdown;

pub use controller::{AutocompleteController, ControllerView, Effect, FieldView};
pub use dropdown::{Dropdown, DropdownView, SuggestionItem};

use serde::{Deserialize, Serialize};

/// Maximum number of suggestions rendered per dropdown.
pub const MAX_SUGGESTIONS: usize = 8;

/// Text of the inert entry shown when a non-empty query matches nothing.
pub const NO_MATCHES: &str = "No matches found";

pub const DEFAULT_CITY_HINT: &str = "e.g., Bengaluru";
pub const DEFAULT_AREA_HINT: &str = "e.g., Koramangala";

/// One of the two autocompleted text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    City,
    Area,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::City => "city",
            Field::Area => "area",
        }
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "city" => Ok(Field::City),
            "area" => Ok(Field::Area),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// Keys the dropdown reacts to. Anything else is [`NavKey::Other`] and is
/// left to normal text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => NavKey::ArrowDown,
            "ArrowUp" | "Up" => NavKey::ArrowUp,
            "Enter" => NavKey::Enter,
            "Escape" | "Esc" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

/// Where a pointer interaction landed, relative to the two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    CityInput,
    CityDropdown,
    AreaInput,
    AreaDropdown,
    Elsewhere,
}

impl Target {
    /// Whether the interaction happened inside `field`'s input or dropdown.
    pub fn is_within(self, field: Field) -> bool {
        matches!(
            (self, field),
            (Target::CityInput | Target::CityDropdown, Field::City)
                | (Target::AreaInput | Target::AreaDropdown, Field::Area)
        )
    }
}
