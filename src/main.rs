//! Demo driver: loads the catalogue and walks a scripted browsing session
//! through the storefront core, printing every projection as plain text.
//! The console host below is one possible presentation layer; any other
//! implementation of [`ViewHost`] can be swapped in without touching the
//! core.

use shophub::catalogue::Category;
use shophub::config;
use shophub::errors::Result;
use shophub::projection::{CardView, CartPanelView, DetailView};
use shophub::session::{Action, Page, Session, ViewHost, current_year};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Renders projections as indented plain text on stdout.
struct ConsoleHost;

impl ConsoleHost {
    fn print_cards(&self, heading: &str, cards: &[CardView]) {
        println!("== {heading} ==");
        for card in cards {
            println!(
                "  [{}] {} {} ({}) {}",
                card.product_id, card.title, card.stars, card.rating, card.price
            );
        }
        if cards.is_empty() {
            println!("  (nothing to show)");
        }
    }
}

impl ViewHost for ConsoleHost {
    fn render_products(&mut self, cards: &[CardView]) {
        self.print_cards("Products", cards);
    }

    fn render_trending(&mut self, cards: &[CardView]) {
        self.print_cards("Trending", cards);
    }

    fn render_deals(&mut self, cards: &[CardView]) {
        self.print_cards("Deals under $40", cards);
    }

    fn render_detail(&mut self, detail: &DetailView) {
        println!("== {} ==", detail.title);
        println!("  {} ({})  {}", detail.stars, detail.rating, detail.price);
        println!("  {}", detail.description);
    }

    fn render_cart(&mut self, panel: &CartPanelView) {
        println!("== Cart ({} items) ==", panel.item_count);
        for line in &panel.lines {
            println!("  [{}] {}  {}", line.product_id, line.title, line.price_line);
        }
        println!("  Total: ${}", panel.total);
    }

    fn show_page(&mut self, page: Page) {
        println!("-- now viewing: {page:?} --");
    }

    fn open_cart(&mut self) {
        println!("-- cart drawer opened --");
    }
}

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenvy::dotenv().ok();

    // 3. Load the catalogue (path from SHOPHUB_CATALOGUE or ./catalogue.toml)
    let catalogue = config::load_default_catalogue()
        .inspect(|c| info!("Loaded catalogue with {} products.", c.len()))
        .inspect_err(|e| error!("Failed to load catalogue: {e}"))?;

    let mut session = Session::new(Arc::new(catalogue));
    let mut host = ConsoleHost;

    // 4. Scripted storefront tour
    let tour = [
        Action::ShowPage(Page::Home),
        Action::ShowPage(Page::Deals),
        Action::Search("watch".to_string()),
        Action::FilterCategories(HashSet::from([Category::Home])),
        Action::ShowDetail(1),
        Action::AddToCart(1),
        Action::AddToCart(1),
        Action::AddToCart(4),
        Action::RemoveFromCart(1),
    ];
    for action in tour {
        session.dispatch(action, &mut host)?;
    }

    println!("© {} ShopHub", current_year());
    Ok(())
}
