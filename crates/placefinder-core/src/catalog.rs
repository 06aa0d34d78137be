// crates/placefinder-core/src/catalog.rs

//! # Candidate Catalog
//!
//! Static reference data used purely for suggestion filtering: the global
//! city list, the per-city area lists and the place types the search backend
//! understands. The catalog is immutable once built.

use crate::error::{PlaceError, Result};
use crate::text::fold_key;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw catalog structure as it comes from JSON.
#[derive(Debug, Deserialize)]
pub struct CatalogRaw {
    pub cities: Vec<String>,
    #[serde(default)]
    pub areas: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub place_types: Vec<String>,
}

/// Simple aggregate statistics for a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub cities: usize,
    pub cities_with_areas: usize,
    pub areas: usize,
    pub place_types: usize,
}

/// The candidate lists backing both autocomplete fields.
///
/// Area lists are keyed by the folded city name, so `"  BENGALURU"` and
/// `"bengaluru"` resolve to the same list. Deserializing goes through
/// [`Catalog::from_raw`], so the folding holds for every construction path.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "CatalogRaw")]
pub struct Catalog {
    cities: Vec<String>,
    areas: HashMap<String, Vec<String>>,
    place_types: Vec<String>,
}

impl TryFrom<CatalogRaw> for Catalog {
    type Error = PlaceError;

    fn try_from(raw: CatalogRaw) -> Result<Self> {
        Self::from_raw(raw)
    }
}

impl Catalog {
    /// Build a catalog from its raw form, folding the area map keys.
    pub fn from_raw(raw: CatalogRaw) -> Result<Self> {
        if raw.cities.is_empty() {
            return Err(PlaceError::InvalidData("catalog has no cities".into()));
        }

        let mut areas: HashMap<String, Vec<String>> = HashMap::with_capacity(raw.areas.len());
        for (city, list) in raw.areas {
            let key = fold_key(&city);
            if key.is_empty() {
                return Err(PlaceError::InvalidData("area list with a blank city key".into()));
            }
            areas.entry(key).or_default().extend(list);
        }

        Ok(Self {
            cities: raw.cities,
            areas,
            place_types: raw.place_types,
        })
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: CatalogRaw = serde_json::from_str(s)?;
        Self::from_raw(raw)
    }

    /// The global city list, in display order.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Area list for `city` (any casing/spacing). Unknown cities yield an
    /// empty slice.
    pub fn areas_for(&self, city: &str) -> &[String] {
        self.areas
            .get(&fold_key(city))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn place_types(&self) -> &[String] {
        &self.place_types
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            cities: self.cities.len(),
            cities_with_areas: self.areas.len(),
            areas: self.areas.values().map(Vec::len).sum(),
            place_types: self.place_types.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_json_str(
            r#"{
                "cities": ["Pune", "Goa"],
                "areas": { " Pune ": ["Baner", "Aundh"], "pune": ["Kothrud"] },
                "place_types": ["cafe"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn area_keys_are_folded_and_merged() {
        let c = sample();
        let areas = c.areas_for("PUNE");
        assert_eq!(areas.len(), 3);
        assert!(areas.iter().any(|a| a == "Kothrud"));
        assert_eq!(c.areas_for("  pune"), c.areas_for("Pune"));
    }

    #[test]
    fn unknown_city_has_no_areas() {
        let c = sample();
        assert!(c.areas_for("Goa").is_empty());
        assert!(c.areas_for("").is_empty());
    }

    #[test]
    fn stats_counts_everything() {
        let s = sample().stats();
        assert_eq!(
            s,
            CatalogStats {
                cities: 2,
                cities_with_areas: 1,
                areas: 3,
                place_types: 1
            }
        );
    }

    #[test]
    fn rejects_empty_city_list() {
        let err = Catalog::from_json_str(r#"{"cities": []}"#).unwrap_err();
        assert!(matches!(err, PlaceError::InvalidData(_)));
    }

    #[test]
    fn direct_deserialize_folds_area_keys() {
        let json = r#"{"cities":["Pune"],"areas":{"Pune":["Baner"]},"place_types":["cafe"]}"#;
        let c: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(c.areas_for("Pune"), ["Baner"]);
        assert_eq!(c.areas_for("pune "), ["Baner"]);

        let again: Catalog = serde_json::from_str(&serde_json::to_string(&c).unwrap()).unwrap();
        assert_eq!(again.areas_for("PUNE"), ["Baner"]);
    }

    #[test]
    fn direct_deserialize_validates() {
        let err = serde_json::from_str::<Catalog>(r#"{"cities":[]}"#).unwrap_err();
        assert!(err.to_string().contains("catalog has no cities"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, PlaceError::Json(_)));
    }
}
