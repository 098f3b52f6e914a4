//! Coupon codes

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::Percent;

static COUPONS: [(&str, u8); 3] = [("LUXURY20", 20), ("BEAUTY15", 15), ("WELCOME10", 10)];

/// Looks up the fixed code table. Codes are matched case-insensitively;
/// surrounding whitespace is not stripped.
pub fn lookup(code: &str) -> Option<(&'static str, Percent)> {
    let code = code.to_uppercase();
    COUPONS.iter().find(|(c, _)| *c == code).map(|&(c, pct)| (c, Percent::new(pct)))
}

/// The coupon currently applied to a checkout, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponState {
    /// Canonical upper-case code; empty when nothing is applied.
    pub applied: String,
    pub percent: Percent,
}

/// Result of a single "Apply" action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CouponOutcome {
    pub accepted: bool,
    pub percent: Percent,
}

impl CouponState {
    pub fn is_applied(&self) -> bool { !self.applied.is_empty() }

    /// Applies `code`. A miss, including an empty code, revokes any coupon
    /// applied earlier.
    pub fn apply(&mut self, code: &str) -> CouponOutcome {
        match lookup(code) {
            Some((canonical, percent)) => {
                tracing::debug!(code = canonical, percent = percent.value(), "coupon applied");
                self.applied = canonical.to_string();
                self.percent = percent;
                CouponOutcome { accepted: true, percent }
            }
            None => {
                if self.is_applied() { tracing::debug!(previous = %self.applied, "coupon revoked by unknown code"); }
                *self = CouponState::default();
                CouponOutcome { accepted: false, percent: Percent::ZERO }
            }
        }
    }
}
