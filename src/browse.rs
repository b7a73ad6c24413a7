//! Browse operations - Catalogue-derived product selections.
//!
//! Every function here is a deterministic pure function of the catalogue and
//! its parameters: no stored state, no transitions. Results always preserve
//! catalogue order, and empty results are ordinary empty lists rather than
//! errors.

use crate::catalogue::{Category, Product};
use std::collections::HashSet;

/// Products strictly below this price qualify for the deals page.
pub const DEALS_PRICE_CEILING: f64 = 40.0;

/// Number of products featured on the home page's trending strip.
pub const TRENDING_COUNT: usize = 4;

/// Keeps only products whose category is in the selected set.
///
/// An empty set means "no filter applied" and returns every product. Multiple
/// selected categories are OR-combined: a product matches if its category is
/// any member of the set.
pub fn filter_by_categories<'a>(
    products: &'a [Product],
    selected: &HashSet<Category>,
) -> Vec<&'a Product> {
    if selected.is_empty() {
        return products.iter().collect();
    }
    products
        .iter()
        .filter(|p| selected.contains(&p.category))
        .collect()
}

/// Case-insensitive substring search against product titles.
///
/// An empty query matches everything. Only `title` is searched; descriptions
/// and categories are not consulted.
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .collect()
}

/// The trending selection: the first [`TRENDING_COUNT`] catalogue entries.
///
/// Fixed curation policy - position in the catalogue is the only signal, not
/// price or rating. Shorter catalogues yield however many products exist.
pub fn trending(products: &[Product]) -> &[Product] {
    &products[..products.len().min(TRENDING_COUNT)]
}

/// The deals selection: every product priced strictly below
/// [`DEALS_PRICE_CEILING`], in catalogue order.
pub fn deals(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.price < DEALS_PRICE_CEILING)
        .collect()
}
