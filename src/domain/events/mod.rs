//! Domain events
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    CheckoutSubmitted { order_id: Uuid, email: String, grand_total: f64 },
    BlogLiked { blog_id: u32, likes: u64 },
    ReviewPosted { product_id: u32, review_id: u32, rating: u8 },
    UserSignedUp { session: String },
}

impl DomainEvent {
    /// Subject the event is published under.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::CheckoutSubmitted { .. } => "storefront.checkout.submitted",
            Self::BlogLiked { .. } => "storefront.blog.liked",
            Self::ReviewPosted { .. } => "storefront.review.posted",
            Self::UserSignedUp { .. } => "storefront.session.signed_up",
        }
    }
}
