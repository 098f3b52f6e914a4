//! Customer reviews for a product page

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAX_NAME_LEN: u64 = 80;
pub const MAX_COMMENT_LEN: u64 = 2000;
/// Submissions beyond this many reviews on one product are refused.
pub const MAX_REVIEWS_PER_PRODUCT: usize = 500;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Review {
    pub id: u32,
    pub customer: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewReview {
    #[validate(length(max = "MAX_NAME_LEN", message = "reviewer name is too long"))]
    pub name: String,
    pub rating: u8,
    #[validate(length(max = "MAX_COMMENT_LEN", message = "review comment is too long"))]
    pub comment: String,
}

/// Reviews shown on one product page, newest first.
#[derive(Clone, Debug)]
pub struct ReviewBoard {
    reviews: Vec<Review>,
    fallback_rating: f32,
}

fn seed(id: u32, customer: &str, rating: u8, comment: &str, (y, m, d): (i32, u32, u32)) -> Option<Review> {
    Some(Review { id, customer: customer.into(), rating, comment: comment.into(), date: NaiveDate::from_ymd_opt(y, m, d)? })
}

impl ReviewBoard {
    #[cfg(test)]
    pub fn empty(fallback_rating: f32) -> Self { Self { reviews: vec![], fallback_rating } }

    /// Board pre-filled with the sample reviews every product page starts with.
    pub fn seeded(fallback_rating: f32) -> Self {
        let reviews = [
            seed(1, "Sarah Johnson", 5, "Absolutely love this product! The quality is exceptional and it exceeded my expectations. Highly recommend!", (2024, 1, 15)),
            seed(2, "Michael Chen", 4, "Great product with amazing results. The packaging is beautiful and the formula feels luxurious on my skin.", (2024, 1, 10)),
            seed(3, "Emma Davis", 5, "This has become a staple in my beauty routine. The results are visible within days and the texture is perfect.", (2024, 1, 8)),
        ];
        Self { reviews: reviews.into_iter().flatten().collect(), fallback_rating }
    }

    pub fn reviews(&self) -> &[Review] { &self.reviews }
    pub fn len(&self) -> usize { self.reviews.len() }
    pub fn is_empty(&self) -> bool { self.reviews.is_empty() }

    /// Mean rating, or the catalog rating while nobody has reviewed.
    pub fn average_rating(&self) -> f32 {
        if self.reviews.is_empty() { return self.fallback_rating; }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        sum as f32 / self.reviews.len() as f32
    }

    pub fn submit(&mut self, new: NewReview) -> Result<&Review, ReviewError> {
        new.validate()?;
        let name = new.name.trim();
        let comment = new.comment.trim();
        if name.is_empty() { return Err(ReviewError::MissingName); }
        if comment.is_empty() { return Err(ReviewError::MissingComment); }
        if !(1..=5).contains(&new.rating) { return Err(ReviewError::RatingOutOfRange(new.rating)); }
        if self.reviews.len() >= MAX_REVIEWS_PER_PRODUCT { return Err(ReviewError::BoardFull(MAX_REVIEWS_PER_PRODUCT)); }
        let review = Review {
            id: self.reviews.len() as u32 + 1, customer: name.to_string(), rating: new.rating,
            comment: comment.to_string(), date: Utc::now().date_naive(),
        };
        self.reviews.insert(0, review);
        Ok(&self.reviews[0])
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReviewError {
    #[error(transparent)]
    Invalid(#[from] validator::ValidationErrors),
    #[error("reviewer name is required")]
    MissingName,
    #[error("review comment is required")]
    MissingComment,
    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),
    #[error("product already has {0} reviews")]
    BoardFull(usize),
}
