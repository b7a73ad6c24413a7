//! Session layer - Explicit action dispatch and the rendering-host boundary.
//!
//! A [`Session`] owns the cart, shares the catalogue, and maps inbound user
//! actions onto core operations. Everything outbound goes through the
//! [`ViewHost`] trait: the session hands over structured projections and
//! navigation signals, and the host decides how (and with what technology)
//! to display them. Every dispatch runs synchronously to completion; an
//! action either succeeds or leaves all state untouched.

use crate::browse;
use crate::cart::CartStore;
use crate::catalogue::{Catalogue, Category};
use crate::errors::{Error, Result};
use crate::projection::{
    CardView, CartPanelView, DetailView, project_cart_panel, project_detail, project_list,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Named views of the storefront shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// Landing page with the trending strip
    Home,
    /// Full product grid with filters and search
    Products,
    /// Discounted selection
    Deals,
    /// Static store-information page
    About,
    /// Single-product detail view
    Detail,
    /// Order review page
    Checkout,
}

/// Inbound user actions, one per affordance the projections expose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Navigate to a named page, rendering its content on entry
    ShowPage(Page),
    /// Open the detail view for a product
    ShowDetail(u32),
    /// Add one unit of a product to the cart
    AddToCart(u32),
    /// Remove a product's entry from the cart entirely
    RemoveFromCart(u32),
    /// Re-render the product grid filtered to the selected categories
    FilterCategories(HashSet<Category>),
    /// Re-render the product grid matching a free-text query
    Search(String),
}

/// Outbound rendering contract implemented by the presentation layer.
///
/// The session never constructs markup; it pushes projections through these
/// methods and the host turns them into whatever its display technology
/// needs.
pub trait ViewHost {
    /// Render cards into the main products surface.
    fn render_products(&mut self, cards: &[CardView]);
    /// Render cards into the home page's trending strip.
    fn render_trending(&mut self, cards: &[CardView]);
    /// Render cards into the deals surface.
    fn render_deals(&mut self, cards: &[CardView]);
    /// Render the single-product detail view.
    fn render_detail(&mut self, detail: &DetailView);
    /// Render the cart panel and update the badge from its `item_count`.
    fn render_cart(&mut self, panel: &CartPanelView);
    /// Make the named page the visible one.
    fn show_page(&mut self, page: Page);
    /// Slide the cart drawer open.
    fn open_cart(&mut self);
}

/// One browsing session: shared catalogue plus the session's own cart.
#[derive(Debug)]
pub struct Session {
    catalogue: Arc<Catalogue>,
    cart: CartStore,
}

impl Session {
    /// Creates a session with an empty cart over a shared catalogue.
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self {
            catalogue,
            cart: CartStore::new(),
        }
    }

    /// The catalogue this session browses.
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Read access to the session's cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Dispatches one user action, mutating state and pushing the resulting
    /// projections to the host.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] when `ShowDetail` or `AddToCart`
    /// carries an id absent from the catalogue; all state is left unchanged
    /// in that case.
    pub fn dispatch(&mut self, action: Action, host: &mut dyn ViewHost) -> Result<()> {
        info!(?action, "Dispatching storefront action");
        match action {
            Action::ShowPage(page) => {
                self.enter_page(page, host);
            }
            Action::ShowDetail(id) => {
                let product = self
                    .catalogue
                    .product_by_id(id)
                    .ok_or(Error::ProductNotFound { id })?;
                host.render_detail(&project_detail(product));
                host.show_page(Page::Detail);
            }
            Action::AddToCart(id) => {
                self.cart.add(&self.catalogue, id)?;
                host.render_cart(&project_cart_panel(&self.cart));
                host.open_cart();
            }
            Action::RemoveFromCart(id) => {
                self.cart.remove(id);
                host.render_cart(&project_cart_panel(&self.cart));
            }
            Action::FilterCategories(selected) => {
                let filtered = browse::filter_by_categories(self.catalogue.products(), &selected);
                host.render_products(&project_list(&filtered));
            }
            Action::Search(query) => {
                let matches = browse::search(self.catalogue.products(), &query);
                host.render_products(&project_list(&matches));
                host.show_page(Page::Products);
            }
        }
        Ok(())
    }

    fn enter_page(&self, page: Page, host: &mut dyn ViewHost) {
        match page {
            Page::Home => {
                let picks = browse::trending(self.catalogue.products());
                let refs: Vec<&crate::catalogue::Product> = picks.iter().collect();
                host.render_trending(&project_list(&refs));
            }
            Page::Products => {
                let all: Vec<&crate::catalogue::Product> =
                    self.catalogue.products().iter().collect();
                host.render_products(&project_list(&all));
            }
            Page::Deals => {
                let bargains = browse::deals(self.catalogue.products());
                host.render_deals(&project_list(&bargains));
            }
            // No content to project; the host only switches the visible page
            Page::About | Page::Detail | Page::Checkout => {}
        }
        host.show_page(page);
    }
}

/// Current calendar year, for the storefront footer.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}
