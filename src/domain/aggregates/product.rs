//! Product Aggregate

use serde::Serialize;
use crate::domain::value_objects::Money;

/// A sellable catalog item. Defined at compile time and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub price: Money,
    /// Reference price before markdown; equal to `price` when none applies.
    pub original_price: Money,
    pub rating: f32,
    pub reviews: u32,
    pub image: &'static str,
    #[serde(flatten)]
    pub badges: Badges,
}

/// Independent merchandising badges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badges {
    pub is_best_seller: bool,
    pub is_limited_edition: bool,
}

impl Badges {
    pub const NONE: Badges = Badges { is_best_seller: false, is_limited_edition: false };
    pub const BEST_SELLER: Badges = Badges { is_best_seller: true, is_limited_edition: false };
    pub const LIMITED_EDITION: Badges = Badges { is_best_seller: false, is_limited_edition: true };
}

impl Product {
    /// Whole-number markdown against the original price, if any.
    pub fn markdown_percent(&self) -> Option<u32> {
        let (price, original) = (self.price.amount(), self.original_price.amount());
        if original > price && original > 0.0 {
            Some((((original - price) / original) * 100.0).round() as u32)
        } else {
            None
        }
    }

    pub fn in_category(&self, category: &str) -> bool { self.category.eq_ignore_ascii_case(category) }

    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id == 0 { return Err(ProductError::InvalidId); }
        if self.name.trim().is_empty() { return Err(ProductError::MissingName { id: self.id }); }
        if self.price.amount() < 0.0 { return Err(ProductError::NegativePrice { id: self.id }); }
        if self.original_price < self.price { return Err(ProductError::OriginalBelowPrice { id: self.id }); }
        if !(0.0..=5.0).contains(&self.rating) { return Err(ProductError::RatingOutOfRange { id: self.id }); }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("product id must be positive")]
    InvalidId,
    #[error("product {id} has no name")]
    MissingName { id: u32 },
    #[error("product {id} has a negative price")]
    NegativePrice { id: u32 },
    #[error("product {id} has an original price below its selling price")]
    OriginalBelowPrice { id: u32 },
    #[error("product {id} has a rating outside 0..=5")]
    RatingOutOfRange { id: u32 },
    #[error("product id {id} appears more than once")]
    DuplicateId { id: u32 },
}
