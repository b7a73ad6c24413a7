//! Product catalogue - Immutable product data and lookup.
//!
//! The catalogue is loaded once at startup and never mutated afterwards.
//! Every other component holds it by shared reference; only construction
//! validates product data, so downstream code can rely on ids being unique,
//! prices being finite and non-negative, and ratings staying within `[0, 5]`.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Product category. A closed set - the storefront's filter checkboxes map
/// directly onto these variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Gadgets, peripherals and other powered goods
    Electronics,
    /// Clothing and accessories
    Fashion,
    /// Household and lifestyle items
    Home,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Electronics => write!(f, "electronics"),
            Self::Fashion => write!(f, "fashion"),
            Self::Home => write!(f, "home"),
        }
    }
}

/// A single purchasable product.
///
/// Products are defined at load time and immutable for the life of the
/// session. `id` is unique across the catalogue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique positive identifier, the key for every affordance
    pub id: u32,
    /// Display title
    pub title: String,
    /// Price in currency units; displayed to 2 decimal places
    pub price: f64,
    /// Category used by the filter checkboxes
    pub category: Category,
    /// Opaque reference to a displayable image resource
    pub image_ref: String,
    /// Average rating in `[0, 5]`
    pub rating: f64,
    /// Longer description shown on the detail page
    pub description: String,
}

/// The fixed, read-only set of purchasable products, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    products: Vec<Product>,
}

impl Catalogue {
    /// Builds a catalogue from a list of products, validating every entry.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Any id is zero or duplicates another product's id
    /// - Any title is empty or whitespace-only
    /// - Any price is negative or not finite (NaN, infinity)
    /// - Any rating falls outside `[0, 5]`
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen_ids = HashSet::new();

        for product in &products {
            if product.id == 0 {
                return Err(Error::Config {
                    message: format!("Product '{}' has id 0; ids start at 1", product.title),
                });
            }
            if !seen_ids.insert(product.id) {
                return Err(Error::Config {
                    message: format!("Duplicate product id: {}", product.id),
                });
            }
            if product.title.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("Product {} has an empty title", product.id),
                });
            }
            if product.price < 0.0 || !product.price.is_finite() {
                return Err(Error::InvalidPrice {
                    price: product.price,
                });
            }
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(Error::InvalidRating {
                    rating: product.rating,
                });
            }
        }

        Ok(Self { products })
    }

    /// Returns all products in catalogue order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by its unique id, returning `None` if absent.
    pub fn product_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products in the catalogue.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalogue holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{sample_catalogue, sample_product};

    #[test]
    fn test_lookup_by_id() {
        let catalogue = sample_catalogue();

        let product = catalogue.product_by_id(1).unwrap();
        assert_eq!(product.title, "Wireless Noise-Cancelling Headphones");
        assert_eq!(product.price, 79.99);
        assert_eq!(product.category, Category::Electronics);

        assert!(catalogue.product_by_id(999).is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut a = sample_product(1, "First", 10.0);
        let b = sample_product(1, "Second", 20.0);
        a.category = Category::Home;

        let result = Catalogue::new(vec![a, b]);
        assert!(matches!(
            result.unwrap_err(),
            Error::Config { message: _ }
        ));
    }

    #[test]
    fn test_rejects_zero_id() {
        let result = Catalogue::new(vec![sample_product(0, "Zero", 10.0)]);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_rejects_empty_title() {
        let result = Catalogue::new(vec![sample_product(1, "   ", 10.0)]);
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_rejects_bad_prices() {
        let result = Catalogue::new(vec![sample_product(1, "Negative", -1.0)]);
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidPrice { price: -1.0 }
        ));

        let result = Catalogue::new(vec![sample_product(1, "NaN", f64::NAN)]);
        assert!(matches!(result.unwrap_err(), Error::InvalidPrice { price: _ }));

        let result = Catalogue::new(vec![sample_product(1, "Inf", f64::INFINITY)]);
        assert!(matches!(result.unwrap_err(), Error::InvalidPrice { price: _ }));
    }

    #[test]
    fn test_rejects_out_of_range_rating() {
        let mut product = sample_product(1, "Overrated", 10.0);
        product.rating = 5.1;

        let result = Catalogue::new(vec![product]);
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidRating { rating: _ }
        ));
    }

    #[test]
    fn test_preserves_declaration_order() {
        let catalogue = sample_catalogue();
        let ids: Vec<u32> = catalogue.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Electronics.to_string(), "electronics");
        assert_eq!(Category::Fashion.to_string(), "fashion");
        assert_eq!(Category::Home.to_string(), "home");
    }
}
