//! Shared test utilities for `ShopHub`.
//!
//! This module provides the sample catalogue used across the test suite and
//! helpers for building products with sensible defaults.

use crate::catalogue::{Catalogue, Category, Product};

/// Builds a single product with sensible defaults.
///
/// # Defaults
/// * `category`: `Electronics`
/// * `image_ref`: `"img/test.jpg"`
/// * `rating`: 4.0
/// * `description`: `"Test product"`
pub fn sample_product(id: u32, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        category: Category::Electronics,
        image_ref: "img/test.jpg".to_string(),
        rating: 4.0,
        description: "Test product".to_string(),
    }
}

/// The ten-product demo catalogue, matching `catalogue.toml`.
///
/// Used by most tests so assertions can rely on known ids, prices, and
/// categories (deals are exactly ids 3, 4, 6, 9, 10; electronics are
/// 1, 2, 5, 8).
#[allow(clippy::unwrap_used)]
pub fn sample_catalogue() -> Catalogue {
    let spec: [(u32, &str, f64, Category, &str, f64, &str); 10] = [
        (
            1,
            "Wireless Noise-Cancelling Headphones",
            79.99,
            Category::Electronics,
            "https://picsum.photos/id/238/300/300",
            4.5,
            "Premium sound, 30-hour battery, comfortable fit.",
        ),
        (
            2,
            "Smart Watch Fitness Tracker",
            49.99,
            Category::Electronics,
            "https://picsum.photos/id/111/300/300",
            4.3,
            "Heart-rate, SpO2, sleep & workout tracking.",
        ),
        (
            3,
            "Men's Cotton Crew T-Shirt (Pack of 3)",
            24.99,
            Category::Fashion,
            "https://picsum.photos/id/237/300/300",
            4.6,
            "100% combed cotton, breathable, pre-shrunk.",
        ),
        (
            4,
            "Stainless-Steel Water Bottle 1L",
            18.99,
            Category::Home,
            "https://picsum.photos/id/240/300/300",
            4.7,
            "Double-wall vacuum insulated, leak-proof.",
        ),
        (
            5,
            "4K Webcam with Microphone",
            99.99,
            Category::Electronics,
            "https://picsum.photos/id/249/300/300",
            4.4,
            "Auto-focus, noise-reduction mics, plug & play.",
        ),
        (
            6,
            "Yoga Mat Non-Slip 8 mm",
            29.99,
            Category::Home,
            "https://picsum.photos/id/250/300/300",
            4.8,
            "Extra thick, eco-friendly TPE material.",
        ),
        (
            7,
            "Denim Jacket Women",
            45.00,
            Category::Fashion,
            "https://picsum.photos/id/257/300/300",
            4.5,
            "Classic trucker style, 98% cotton.",
        ),
        (
            8,
            "Mechanical Gaming Keyboard RGB",
            69.99,
            Category::Electronics,
            "https://picsum.photos/id/258/300/300",
            4.6,
            "Hot-swappable switches, per-key RGB.",
        ),
        (
            9,
            "Premium Leather Wallet",
            35.50,
            Category::Fashion,
            "https://picsum.photos/id/260/300/300",
            4.2,
            "Slim profile with RFID blocking technology.",
        ),
        (
            10,
            "Aromatherapy Diffuser",
            39.99,
            Category::Home,
            "https://picsum.photos/id/261/300/300",
            4.5,
            "Ultrasonic operation with color-changing light.",
        ),
    ];

    let products = spec
        .into_iter()
        .map(
            |(id, title, price, category, image_ref, rating, description)| Product {
                id,
                title: title.to_string(),
                price,
                category,
                image_ref: image_ref.to_string(),
                rating,
                description: description.to_string(),
            },
        )
        .collect();

    Catalogue::new(products).unwrap()
}
