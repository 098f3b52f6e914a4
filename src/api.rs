//! JSON HTTP API consumed by the storefront SPA.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::domain::aggregates::{
    blog::{self, BlogPost},
    cart,
    catalog::ALL_CATEGORIES,
    order::{self, compute_totals, SummaryDisplay},
    Catalog, CheckoutConfirmation, CheckoutForm, CheckoutNavigation, CouponOutcome, CouponState, NewReview,
    OrderSummary, Product, ResolvedLine, Review, ReviewBoard, ReviewError, DELIVERY_CHARGE,
};
use crate::domain::events::DomainEvent;
use crate::likes::LikeStore;
use crate::publisher::EventPublisher;
use crate::session::{self, MemorySignups, SessionError, SignupRegistry};
use crate::{Result, StorefrontError};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub likes: LikeStore,
    pub signups: Arc<dyn SignupRegistry>,
    /// Review boards are created on first touch and live for the process.
    pub reviews: Arc<RwLock<HashMap<u32, ReviewBoard>>>,
    pub events: EventPublisher,
}

impl AppState {
    pub fn new(catalog: Catalog, likes: LikeStore, signups: Arc<dyn SignupRegistry>, events: EventPublisher) -> Self {
        Self { catalog, likes, signups, reviews: Arc::default(), events }
    }

    /// No database and no event bus.
    pub fn in_memory() -> Self {
        Self::new(Catalog::builtin(), LikeStore::memory(), Arc::new(MemorySignups::new()), EventPublisher::disabled())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(serde_json::json!({"status": "healthy", "service": "luxe-storefront"})) }))
        .route("/api/v1/products", get(list_products))
        .route("/api/v1/products/:id", get(get_product))
        .route("/api/v1/products/:id/related", get(related_products))
        .route("/api/v1/products/:id/reviews", get(list_reviews).post(submit_review))
        .route("/api/v1/categories", get(list_categories))
        .route("/api/v1/coupons/apply", post(apply_coupon))
        .route("/api/v1/checkout/quote", post(quote_checkout))
        .route("/api/v1/checkout", post(submit_checkout))
        .route("/api/v1/blog", get(list_posts))
        .route("/api/v1/blog/:id", get(get_post))
        .route("/api/v1/blog/:id/likes", post(like_post))
        .route("/api/v1/session/:session/signup", get(signup_status).post(mark_signup))
        .layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()).with_state(state)
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ProductNotFound(_) | Self::PostNotFound(_) => StatusCode::NOT_FOUND,
            Self::Review(ReviewError::BoardFull(_)) => StatusCode::CONFLICT,
            Self::Checkout(_) | Self::Review(_) | Self::Session(SessionError::InvalidId) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Session(SessionError::CapacityReached(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Likes(_) => StatusCode::BAD_GATEWAY,
            Self::Catalog(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Deserialize)] pub struct ProductFilter { pub category: Option<String> }

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView { #[serde(flatten)] pub product: &'static Product, pub markdown_percent: Option<u32> }

fn find_product(s: &AppState, id: u32) -> Result<&'static Product> {
    s.catalog.find(id).ok_or(StorefrontError::ProductNotFound(id))
}

async fn list_products(State(s): State<AppState>, Query(p): Query<ProductFilter>) -> Json<Vec<&'static Product>> {
    Json(s.catalog.by_category(p.category.as_deref().unwrap_or(ALL_CATEGORIES)))
}

async fn get_product(State(s): State<AppState>, Path(id): Path<u32>) -> Result<Json<ProductView>> {
    let product = find_product(&s, id)?;
    Ok(Json(ProductView { product, markdown_percent: product.markdown_percent() }))
}

async fn related_products(State(s): State<AppState>, Path(id): Path<u32>) -> Result<Json<Vec<&'static Product>>> {
    find_product(&s, id)?;
    Ok(Json(s.catalog.related(id)))
}

async fn list_categories(State(s): State<AppState>) -> Json<Vec<&'static str>> { Json(s.catalog.categories()) }

// =============================================================================
// Reviews
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsView { pub average_rating: f32, pub reviews: Vec<Review> }

impl From<&ReviewBoard> for ReviewsView {
    fn from(b: &ReviewBoard) -> Self { Self { average_rating: b.average_rating(), reviews: b.reviews().to_vec() } }
}

async fn list_reviews(State(s): State<AppState>, Path(id): Path<u32>) -> Result<Json<ReviewsView>> {
    let product = find_product(&s, id)?;
    let boards = s.reviews.read().await;
    let view = match boards.get(&id) {
        Some(board) => ReviewsView::from(board),
        None => ReviewsView::from(&ReviewBoard::seeded(product.rating)),
    };
    Ok(Json(view))
}

async fn submit_review(State(s): State<AppState>, Path(id): Path<u32>, Json(r): Json<NewReview>) -> Result<(StatusCode, Json<Review>)> {
    let product = find_product(&s, id)?;
    let review = {
        let mut boards = s.reviews.write().await;
        let board = boards.entry(id).or_insert_with(|| ReviewBoard::seeded(product.rating));
        board.submit(r)?.clone()
    };
    info!(product_id = id, review_id = review.id, rating = review.rating, "review posted");
    s.events.publish(DomainEvent::ReviewPosted { product_id: id, review_id: review.id, rating: review.rating }).await;
    Ok((StatusCode::CREATED, Json(review)))
}

// =============================================================================
// Coupons & Checkout
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ApplyCouponRequest { pub code: String, #[serde(default)] pub current: CouponState }

#[derive(Debug, Serialize)]
pub struct ApplyCouponResponse { #[serde(flatten)] pub outcome: CouponOutcome, pub coupon: CouponState }

async fn apply_coupon(Json(r): Json<ApplyCouponRequest>) -> Json<ApplyCouponResponse> {
    let mut coupon = r.current;
    let outcome = coupon.apply(&r.code);
    Json(ApplyCouponResponse { outcome, coupon })
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)] pub navigation: Option<CheckoutNavigation>,
    #[serde(default)] pub coupon: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Quote { pub lines: Vec<ResolvedLine>, pub coupon: CouponState, pub summary: OrderSummary, pub display: SummaryDisplay }

fn price(lines: Vec<ResolvedLine>, code: Option<&str>) -> Quote {
    let mut coupon = CouponState::default();
    if let Some(code) = code { coupon.apply(code); }
    let summary = compute_totals(&lines, DELIVERY_CHARGE, coupon.percent);
    Quote { lines, coupon, display: summary.display(), summary }
}

/// Preview totals; a "buy now" reference keeps the price it was shown with.
async fn quote_checkout(State(s): State<AppState>, Json(r): Json<QuoteRequest>) -> Json<Quote> {
    Json(price(cart::assemble(&s.catalog, r.navigation.as_ref()), r.coupon.as_deref()))
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest { pub form: CheckoutForm, #[serde(flatten)] pub quote: QuoteRequest }

async fn submit_checkout(State(s): State<AppState>, Json(r): Json<CheckoutRequest>) -> Result<(StatusCode, Json<CheckoutConfirmation>)> {
    order::validate_form(&r.form)?;
    let lines = cart::with_catalog_prices(&s.catalog, cart::assemble(&s.catalog, r.quote.navigation.as_ref()));
    let q = price(lines, r.quote.coupon.as_deref());
    let coupon = q.coupon.is_applied().then(|| q.coupon.applied.clone());
    let confirmation = CheckoutConfirmation::new(q.lines, coupon, q.summary);
    info!(
        order_id = %confirmation.order_id, customer = %r.form.full_name, email = %r.form.email, city = %r.form.city,
        lines = confirmation.lines.len(), grand_total = %confirmation.summary.grand_total, "checkout submitted"
    );
    s.events.publish(DomainEvent::CheckoutSubmitted {
        order_id: confirmation.order_id, email: r.form.email.clone(), grand_total: confirmation.summary.grand_total.amount(),
    }).await;
    Ok((StatusCode::CREATED, Json(confirmation)))
}

// =============================================================================
// Blog
// =============================================================================

#[derive(Debug, Serialize)]
pub struct PostView {
    #[serde(flatten)] pub post: &'static BlogPost,
    /// `None` when the like store could not be read.
    pub likes: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesView { pub blog_id: u32, pub likes: u64 }

async fn list_posts() -> Json<&'static [BlogPost]> { Json(blog::posts()) }

async fn get_post(State(s): State<AppState>, Path(id): Path<u32>) -> Result<Json<PostView>> {
    let post = blog::find_post(id).ok_or(StorefrontError::PostNotFound(id))?;
    let likes = match s.likes.count(id).await {
        Ok(n) => Some(n),
        Err(e) => { warn!(blog_id = id, error = %e, "failed to fetch likes"); None }
    };
    Ok(Json(PostView { post, likes }))
}

async fn like_post(State(s): State<AppState>, Path(id): Path<u32>) -> Result<Json<LikesView>> {
    blog::find_post(id).ok_or(StorefrontError::PostNotFound(id))?;
    let likes = match s.likes.like(id).await {
        Ok(n) => n,
        Err(e) => { warn!(blog_id = id, error = %e, "failed to record like"); return Err(e.into()); }
    };
    s.events.publish(DomainEvent::BlogLiked { blog_id: id, likes }).await;
    Ok(Json(LikesView { blog_id: id, likes }))
}

// =============================================================================
// Session
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupView { pub signed_up: bool, pub show_auth_popup: bool }

fn signup_view(s: &AppState, session: &str) -> SignupView {
    SignupView { signed_up: s.signups.is_signed_up(session), show_auth_popup: s.signups.should_show_auth_popup(session) }
}

async fn signup_status(State(s): State<AppState>, Path(session): Path<String>) -> Result<Json<SignupView>> {
    session::validate_session_id(&session)?;
    Ok(Json(signup_view(&s, &session)))
}

async fn mark_signup(State(s): State<AppState>, Path(session): Path<String>) -> Result<Json<SignupView>> {
    if s.signups.mark_signed_up(&session)? {
        info!(session = %session, "visitor signed up");
        s.events.publish(DomainEvent::UserSignedUp { session: session.clone() }).await;
    }
    Ok(Json(signup_view(&s, &session)))
}
