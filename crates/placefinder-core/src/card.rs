// crates/placefinder-core/src/card.rs
use crate::search::Place;
use serde::{Deserialize, Serialize};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// View model of one result card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceCard {
    pub name: String,
    /// The place's own type, or the type that was searched for.
    pub place_type: String,
    pub address: String,
    pub phone: Option<String>,
    pub maps_url: String,
    pub phone_url: Option<String>,
}

impl PlaceCard {
    pub fn new(place: &Place, selected_type: &str) -> Self {
        let query = format!("{} {}", place.name, place.address);
        let phone = place
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        Self {
            name: place.name.clone(),
            place_type: place
                .place_type
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| selected_type.to_string()),
            address: place.address.clone(),
            phone_url: phone.as_ref().map(|p| format!("tel:{p}")),
            phone,
            maps_url: format!("{MAPS_SEARCH_URL}{}", urlencoding::encode(&query)),
        }
    }

    pub fn from_places(places: &[Place], selected_type: &str) -> Vec<Self> {
        places.iter().map(|p| Self::new(p, selected_type)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(phone: Option<&str>, kind: Option<&str>) -> Place {
        Place {
            name: "Truffles".into(),
            address: "St. John's Rd, Koramangala".into(),
            place_type: kind.map(str::to_string),
            phone: phone.map(str::to_string),
            rating: None,
            description: None,
        }
    }

    #[test]
    fn maps_url_is_percent_encoded() {
        let card = PlaceCard::new(&place(None, None), "restaurant");
        assert_eq!(
            card.maps_url,
            "https://www.google.com/maps/search/?api=1&query=Truffles%20St.%20John%27s%20Rd%2C%20Koramangala"
        );
    }

    #[test]
    fn type_falls_back_to_selection() {
        assert_eq!(PlaceCard::new(&place(None, None), "cafe").place_type, "cafe");
        assert_eq!(
            PlaceCard::new(&place(None, Some("bar")), "cafe").place_type,
            "bar"
        );
    }

    #[test]
    fn phone_link_only_with_phone() {
        let card = PlaceCard::new(&place(Some("+91 80 1234"), None), "cafe");
        assert_eq!(card.phone_url.as_deref(), Some("tel:+91 80 1234"));
        let card = PlaceCard::new(&place(Some("  "), None), "cafe");
        assert_eq!(card.phone, None);
        assert_eq!(card.phone_url, None);
    }
}
