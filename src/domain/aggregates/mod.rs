//! Aggregates module
pub mod product;
pub mod catalog;
pub mod cart;
pub mod coupon;
pub mod order;
pub mod review;
pub mod blog;

pub use product::{Badges, Product, ProductError};
pub use catalog::Catalog;
pub use cart::{CartLine, CheckoutNavigation, ResolvedLine};
pub use coupon::{CouponOutcome, CouponState};
pub use order::{CheckoutConfirmation, CheckoutError, CheckoutForm, OrderSummary, DELIVERY_CHARGE};
pub use review::{NewReview, Review, ReviewBoard, ReviewError};
pub use blog::BlogPost;
