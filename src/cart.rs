//! Cart store - Per-session record of selected products and quantities.
//!
//! The cart is the only mutable state in the storefront. It owns its entries
//! outright and is only ever mutated synchronously from within a single
//! action dispatch, so no locking discipline applies. Entries keep insertion
//! order; repeated adds of the same product increment the existing entry's
//! quantity rather than creating a duplicate line.

use crate::catalogue::{Catalogue, Product};
use crate::errors::{Error, Result};
use tracing::debug;

/// One cart line: a product and how many units of it are selected.
///
/// Invariant: `quantity >= 1`. An entry that would reach quantity 0 is
/// removed from the store, never retained.
#[derive(Clone, Debug, PartialEq)]
pub struct CartEntry {
    /// The selected product (copied out of the catalogue at add time)
    pub product: Product,
    /// Units selected, always at least 1
    pub quantity: u32,
}

/// Mutable per-session cart. Created empty; discarded with the session.
///
/// Invariant: at most one entry per distinct product id.
#[derive(Debug, Default)]
pub struct CartStore {
    entries: Vec<CartEntry>,
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product to the cart.
    ///
    /// If the product is already in the cart its quantity is incremented,
    /// otherwise a new entry with quantity 1 is appended. Callers normally
    /// supply ids taken from rendered projections, so a lookup failure
    /// indicates a caller bug; the cart is left unchanged in that case.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] if the id is not in the catalogue.
    pub fn add(&mut self, catalogue: &Catalogue, product_id: u32) -> Result<()> {
        let product = catalogue
            .product_by_id(product_id)
            .ok_or(Error::ProductNotFound { id: product_id })?;

        if let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == product_id) {
            entry.quantity += 1;
            debug!(product_id, quantity = entry.quantity, "Incremented cart entry");
        } else {
            self.entries.push(CartEntry {
                product: product.clone(),
                quantity: 1,
            });
            debug!(product_id, "Added new cart entry");
        }
        Ok(())
    }

    /// Removes a product's entry from the cart entirely, whatever its
    /// quantity. Silent no-op if the product is not in the cart.
    ///
    /// Removal is deliberately all-or-nothing; there is no decrement path.
    pub fn remove(&mut self, product_id: u32) {
        let before = self.entries.len();
        self.entries.retain(|e| e.product.id != product_id);
        if self.entries.len() < before {
            debug!(product_id, "Removed cart entry");
        }
    }

    /// Total number of units across all entries (the badge value).
    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Sum of `price * quantity` over all entries. Formatted to 2 decimal
    /// places at the projection boundary.
    pub fn total(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.product.price * f64::from(e.quantity))
            .sum()
    }

    /// Cart lines in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
