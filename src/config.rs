//! Catalogue configuration loading from catalogue.toml
//!
//! This module provides functionality to locate and load the product
//! catalogue from a TOML data file. The products defined in catalogue.toml
//! are the entire inventory of the storefront for the session; the file is
//! read once at startup and the resulting [`Catalogue`] is immutable.

use crate::catalogue::{Catalogue, Product};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default location of the catalogue data file
const DEFAULT_CATALOGUE_PATH: &str = "catalogue.toml";

/// File structure representing the entire catalogue.toml file
#[derive(Debug, Deserialize)]
struct CatalogueFile {
    /// List of products, in display order
    products: Vec<Product>,
}

/// Resolves the catalogue file path from the `SHOPHUB_CATALOGUE` environment
/// variable, falling back to `./catalogue.toml`.
pub fn catalogue_path() -> String {
    std::env::var("SHOPHUB_CATALOGUE").unwrap_or_else(|_| DEFAULT_CATALOGUE_PATH.to_string())
}

/// Loads and validates the product catalogue from a TOML file.
///
/// # Arguments
/// * `path` - Path to the catalogue.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
/// - Any product fails catalogue validation (duplicate id, bad price, ...)
pub fn load_catalogue<P: AsRef<Path>>(path: P) -> Result<Catalogue> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read catalogue file: {e}"),
    })?;

    let file: CatalogueFile = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalogue.toml: {e}"),
    })?;

    Catalogue::new(file.products)
}

/// Loads the catalogue from the configured location (env var or default).
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_default_catalogue() -> Result<Catalogue> {
    load_catalogue(catalogue_path())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::catalogue::Category;

    #[test]
    fn test_parse_catalogue_toml() {
        let toml_str = r#"
            [[products]]
            id = 1
            title = "Wireless Noise-Cancelling Headphones"
            price = 79.99
            category = "electronics"
            image_ref = "https://picsum.photos/id/238/300/300"
            rating = 4.5
            description = "Premium sound, 30-hour battery, comfortable fit."

            [[products]]
            id = 4
            title = "Stainless-Steel Water Bottle 1L"
            price = 18.99
            category = "home"
            image_ref = "https://picsum.photos/id/240/300/300"
            rating = 4.7
            description = "Double-wall vacuum insulated, leak-proof."
        "#;

        let file: CatalogueFile = toml::from_str(toml_str).unwrap();
        let catalogue = Catalogue::new(file.products).unwrap();

        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.products()[0].id, 1);
        assert_eq!(catalogue.products()[0].price, 79.99);
        assert_eq!(catalogue.products()[0].category, Category::Electronics);
        assert_eq!(catalogue.products()[1].category, Category::Home);
        assert_eq!(catalogue.products()[1].rating, 4.7);
    }

    #[test]
    fn test_rejects_unknown_category() {
        let toml_str = r#"
            [[products]]
            id = 1
            title = "Mystery Item"
            price = 5.0
            category = "gadgets"
            image_ref = "img"
            rating = 4.0
            description = "?"
        "#;

        assert!(toml::from_str::<CatalogueFile>(toml_str).is_err());
    }

    #[test]
    fn test_load_catalogue_missing_file() {
        let result = load_catalogue("does/not/exist.toml");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
