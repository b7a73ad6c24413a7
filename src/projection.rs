//! View projections - Pure transformations of state into display-ready
//! structured records.
//!
//! Nothing in this module touches markup or any rendering technology. Each
//! projection carries the ids that key its affordances (add-to-cart,
//! view-detail, remove) so a host can wire them to the corresponding core
//! operations, plus preformatted price and star-rating strings so every
//! presentation layer displays them identically.

use crate::cart::CartStore;
use crate::catalogue::Product;

/// Formats a price for display: `$` plus two decimal places.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// The truncated star bar: `floor(rating)` filled-star glyphs.
pub fn star_bar(rating: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = rating.floor().max(0.0) as usize;
    "★".repeat(filled)
}

/// Summary card for the product grid.
///
/// `product_id` keys both the add-to-cart and the view-detail affordances.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    /// Affordance key for add-to-cart and view-detail
    pub product_id: u32,
    /// Display title
    pub title: String,
    /// Filled-star glyphs, `floor(rating)` of them
    pub stars: String,
    /// Numeric rating shown alongside the stars
    pub rating: f64,
    /// Preformatted price, e.g. `$79.99`
    pub price: String,
    /// Image resource reference
    pub image_ref: String,
}

/// Expanded single-product view for the detail page.
///
/// Carries an add-to-cart affordance keyed by `product_id`; the back-to-list
/// affordance is implied by the view itself.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    /// Affordance key for add-to-cart
    pub product_id: u32,
    /// Display title
    pub title: String,
    /// Filled-star glyphs, `floor(rating)` of them
    pub stars: String,
    /// Numeric rating shown alongside the stars
    pub rating: f64,
    /// Preformatted price, e.g. `$79.99`
    pub price: String,
    /// Full product description
    pub description: String,
    /// Image resource reference
    pub image_ref: String,
}

/// One line of the cart panel.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLineView {
    /// Affordance key for the remove button
    pub product_id: u32,
    /// Display title
    pub title: String,
    /// Image resource reference
    pub image_ref: String,
    /// Preformatted `"$NN.NN × q"` line
    pub price_line: String,
}

/// The cart slide-out panel: ordered lines plus the aggregates.
#[derive(Clone, Debug, PartialEq)]
pub struct CartPanelView {
    /// Cart lines in insertion order
    pub lines: Vec<CartLineView>,
    /// Total units across all lines (the badge value)
    pub item_count: u32,
    /// Preformatted grand total, two decimal places
    pub total: String,
}

/// Projects a product into its summary card.
pub fn project_card(product: &Product) -> CardView {
    CardView {
        product_id: product.id,
        title: product.title.clone(),
        stars: star_bar(product.rating),
        rating: product.rating,
        price: format_price(product.price),
        image_ref: product.image_ref.clone(),
    }
}

/// Projects an ordered product selection into cards, preserving input order.
pub fn project_list(products: &[&Product]) -> Vec<CardView> {
    products.iter().map(|p| project_card(p)).collect()
}

/// Projects a product into its expanded detail view.
pub fn project_detail(product: &Product) -> DetailView {
    DetailView {
        product_id: product.id,
        title: product.title.clone(),
        stars: star_bar(product.rating),
        rating: product.rating,
        price: format_price(product.price),
        description: product.description.clone(),
        image_ref: product.image_ref.clone(),
    }
}

/// Projects the cart store into the cart panel, lines in insertion order.
pub fn project_cart_panel(cart: &CartStore) -> CartPanelView {
    let lines = cart
        .entries()
        .iter()
        .map(|entry| CartLineView {
            product_id: entry.product.id,
            title: entry.product.title.clone(),
            image_ref: entry.product.image_ref.clone(),
            price_line: format!(
                "{} × {}",
                format_price(entry.product.price),
                entry.quantity
            ),
        })
        .collect();

    CartPanelView {
        lines,
        item_count: cart.item_count(),
        total: format!("{:.2}", cart.total()),
    }
}
