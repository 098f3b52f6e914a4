//! Luxe Storefront
//!
//! Backend for a cosmetics storefront SPA.
//!
//! ## Features
//! - Static product catalog with category filters and related products
//! - Checkout cart assembly, coupon codes and order totals
//! - Product reviews
//! - Blog posts with persisted likes
//! - Per-session sign-up status for the discount popup

use thiserror::Error;

pub mod api;
pub mod config;
pub mod domain;
pub mod likes;
pub mod publisher;
pub mod session;

use domain::aggregates::{CheckoutError, ProductError, ReviewError};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Product {0} not found")]
    ProductNotFound(u32),

    #[error("Blog post {0} not found")]
    PostNotFound(u32),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error(transparent)]
    Session(#[from] session::SessionError),

    #[error(transparent)]
    Likes(#[from] likes::LikeError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] ProductError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
