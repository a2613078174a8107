// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Static Catalogs
//!
//! Read-only reference tables the form is configured with: the colors
//! offered by the picker and the zip codes used to fill in city and state.
//! Both come from a single JSON asset and are never mutated after loading.

mod color;
mod zipcode;

pub use color::{ColorChoice, ColorTable};
pub use zipcode::{ZipCodeEntry, ZipCodeTable, ZIP_LOOKUP_LEN};

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Embedded catalog data (loaded at compile time).
const CATALOG_JSON: &str = include_str!("catalog.json");

/// Catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Color table is empty")]
    EmptyColorTable,

    #[error("Color '{0}' has a non-string value")]
    InvalidColor(String),
}

/// On-disk shape of the catalog asset.
#[derive(Deserialize)]
struct CatalogData {
    colors: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    zipcode_data: Vec<ZipCodeEntry>,
}

/// Color and zip tables the form is configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    colors: ColorTable,
    zipcodes: ZipCodeTable,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}

impl Catalog {
    /// Creates a catalog from already-built tables.
    pub fn new(colors: ColorTable, zipcodes: ZipCodeTable) -> Self {
        Catalog { colors, zipcodes }
    }

    /// Loads the catalog shipped with the library.
    pub fn bundled() -> Self {
        Self::from_json(CATALOG_JSON).expect("Invalid embedded catalog.json")
    }

    /// Parses a catalog from JSON.
    ///
    /// Colors keep the order they have in the document; the first one is the
    /// picker's default.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        let colors = data
            .colors
            .into_iter()
            .map(|(name, value)| match value {
                serde_json::Value::String(value) => Ok(ColorChoice::new(&name, &value)),
                _ => Err(CatalogError::InvalidColor(name)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog {
            colors: ColorTable::new(colors)?,
            zipcodes: ZipCodeTable::new(data.zipcode_data),
        })
    }

    /// Reads and parses a catalog file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Returns the color table.
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    /// Returns the zip code table.
    pub fn zipcodes(&self) -> &ZipCodeTable {
        &self.zipcodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled();
        assert!(!catalog.colors().is_empty());
        assert!(!catalog.zipcodes().is_empty());
    }

    #[test]
    fn test_colors_keep_document_order() {
        let catalog = Catalog::from_json(
            r##"{"colors": {"Zebra": "#111111", "Apple": "#222222"}, "zipcode_data": []}"##,
        )
        .unwrap();

        assert_eq!(catalog.colors().default_choice().name(), "Zebra");
    }

    #[test]
    fn test_non_string_color_rejected() {
        let result = Catalog::from_json(r#"{"colors": {"Red": 5}}"#);
        assert!(matches!(result, Err(CatalogError::InvalidColor(name)) if name == "Red"));
    }
}
