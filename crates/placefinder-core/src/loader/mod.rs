// crates/placefinder-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Handles the physical layer (I/O, decompression) for custom catalogs and
//! caches the embedded default catalog for the life of the process.

use crate::catalog::Catalog;
use crate::error::Result;
use once_cell::sync::OnceCell;
#[cfg(feature = "json")]
use std::path::Path;

#[cfg(feature = "json")]
mod common_io;

/// The catalog shipped with the crate.
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

// Single in-process cache so we only parse once per process.
static CATALOG_CACHE: OnceCell<Catalog> = OnceCell::new();

impl Catalog {
    /// Load the embedded default catalog.
    pub fn load() -> Result<Self> {
        CATALOG_CACHE
            .get_or_try_init(|| Self::from_json_str(EMBEDDED_CATALOG))
            .cloned()
    }

    /// Load a custom catalog from a `.json` or `.json.gz` file.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let raw = serde_json::from_reader(reader)?;
        let catalog = Self::from_raw(raw)?;
        tracing::debug!(path = %path.display(), stats = ?catalog.stats(), "loaded catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaceError;

    #[test]
    fn embedded_catalog_parses() {
        let c = Catalog::load().unwrap();
        assert_eq!(c.cities().len(), 10);
        assert_eq!(c.cities()[0], "Bengaluru");
        assert_eq!(c.areas_for("Hyderabad").len(), 5);
        assert!(c.areas_for("Surat").is_empty());
        assert!(c.place_types().iter().any(|t| t == "restaurant"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_file_is_not_found() {
        let err = Catalog::load_from_path("/definitely/not/here/catalog.json").unwrap_err();
        assert!(matches!(err, PlaceError::NotFound(_)));
    }

    #[cfg(feature = "json")]
    #[test]
    fn loads_plain_json_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "placefinder-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"cities":["Goa"],"areas":{"goa":["Panaji"]}}"#).unwrap();
        let c = Catalog::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(c.areas_for("GOA"), ["Panaji"]);
    }

    #[cfg(all(feature = "json", feature = "compact"))]
    #[test]
    fn loads_gzipped_json_from_disk() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let path = std::env::temp_dir().join(format!(
            "placefinder-catalog-{}.json.gz",
            std::process::id()
        ));
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(br#"{"cities":["Kochi"]}"#).unwrap();
        std::fs::write(&path, enc.finish().unwrap()).unwrap();

        let c = Catalog::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(c.cities(), ["Kochi"]);
    }
}
