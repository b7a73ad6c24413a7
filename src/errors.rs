//! Unified error types for the storefront core.

use thiserror::Error;

/// All errors the storefront core can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or catalogue-data error (unreadable file, bad TOML,
    /// invalid product data).
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// A product id was supplied that does not exist in the catalogue.
    ///
    /// Affordance keys originate from rendered projections, so in correct
    /// operation this indicates a caller bug rather than user error.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The id that failed to resolve
        id: u32,
    },

    /// A product price was negative or not finite.
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The offending price value
        price: f64,
    },

    /// A product rating fell outside the `[0, 5]` range.
    #[error("Invalid rating: {rating}")]
    InvalidRating {
        /// The offending rating value
        rating: f64,
    },
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
