//! Order summary and checkout submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use super::cart::ResolvedLine;
use crate::domain::value_objects::{Money, Percent};

/// Flat delivery fee charged on every order, including an empty one.
pub const DELIVERY_CHARGE: Money = Money::new(200.0);

/// Derived totals for the checkout sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: Money,
    pub delivery_charge: Money,
    pub discount: Money,
    pub grand_total: Money,
}

/// `grand_total = subtotal + delivery - subtotal * percent / 100`, unrounded.
pub fn compute_totals(lines: &[ResolvedLine], delivery_charge: Money, percent: Percent) -> OrderSummary {
    let subtotal: Money = lines.iter().map(ResolvedLine::line_total).sum();
    let discount = subtotal.percent_of(percent);
    OrderSummary { subtotal, delivery_charge, discount, grand_total: subtotal + delivery_charge - discount }
}

impl OrderSummary {
    /// Rounded strings for display.
    pub fn display(&self) -> SummaryDisplay {
        SummaryDisplay {
            subtotal: self.subtotal.display(),
            delivery_charge: self.delivery_charge.display(),
            discount: self.discount.display(),
            grand_total: self.grand_total.display(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDisplay {
    pub subtotal: String,
    pub delivery_charge: String,
    pub discount: String,
    pub grand_total: String,
}

/// Shipping and contact details collected at checkout.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    #[validate(length(min = 1, message = "full name is required"))]
    pub full_name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "primary phone is required"))]
    pub phone_primary: String,
    #[serde(default)]
    pub phone_secondary: Option<String>,
    #[validate(length(min = 1, message = "street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "postal code is required"))]
    pub postal_code: String,
    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
}

/// Acknowledgement for a submitted checkout. Nothing is charged.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfirmation {
    pub order_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub coupon: Option<String>,
    pub lines: Vec<ResolvedLine>,
    pub summary: OrderSummary,
    pub display: SummaryDisplay,
}

impl CheckoutConfirmation {
    pub fn new(lines: Vec<ResolvedLine>, coupon: Option<String>, summary: OrderSummary) -> Self {
        Self { order_id: Uuid::new_v4(), submitted_at: Utc::now(), coupon, lines, display: summary.display(), summary }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("invalid checkout details: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Validates the form; on success the caller prices and records the order.
pub fn validate_form(form: &CheckoutForm) -> Result<(), CheckoutError> {
    form.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Quantity;

    const EPS: f64 = 1e-9;

    fn line(price: f64, qty: u32) -> ResolvedLine {
        ResolvedLine { id: 1, name: "P".into(), price: Money::new(price), image: String::new(), quantity: Quantity::new(qty).unwrap() }
    }

    fn close(a: Money, b: f64) -> bool { (a.amount() - b).abs() < EPS }

    #[test]
    fn test_empty_cart_still_charges_delivery() {
        let s = compute_totals(&[], DELIVERY_CHARGE, Percent::ZERO);
        assert_eq!(s.subtotal, Money::ZERO);
        assert_eq!(s.discount, Money::ZERO);
        assert_eq!(s.grand_total, Money::new(200.0));
    }

    #[test]
    fn test_luxury20_scenario() {
        let s = compute_totals(&[line(89.99, 2), line(149.99, 1)], DELIVERY_CHARGE, Percent::new(20));
        assert!(close(s.subtotal, 329.97));
        assert!(close(s.discount, 65.994));
        assert!(close(s.grand_total, 463.976));
        assert_eq!(s.display().grand_total, "463.98");
    }

    #[test]
    fn test_no_coupon_scenario() {
        let s = compute_totals(&[line(42.0, 1)], DELIVERY_CHARGE, Percent::ZERO);
        assert_eq!(s.subtotal, Money::new(42.0));
        assert_eq!(s.discount, Money::ZERO);
        assert_eq!(s.grand_total, Money::new(242.0));
    }

    #[test]
    fn test_grand_total_identity() {
        let carts = [vec![line(0.1, 7)], vec![line(79.99, 3), line(34.99, 5), line(249.99, 1)], vec![]];
        for (lines, pct) in carts.iter().zip([10u8, 15, 20]) {
            let s = compute_totals(lines, DELIVERY_CHARGE, Percent::new(pct));
            let expected = s.subtotal.amount() + s.delivery_charge.amount() - s.discount.amount();
            assert!(close(s.grand_total, expected));
        }
    }

    fn form() -> CheckoutForm {
        CheckoutForm {
            full_name: "Ada Lovelace".into(), email: "ada@example.com".into(), phone_primary: "+1 555 123 4567".into(),
            phone_secondary: None, street: "1 Main St".into(), city: "London".into(), postal_code: "N1".into(), country: "UK".into(),
        }
    }

    #[test]
    fn test_form_validation() {
        assert!(validate_form(&form()).is_ok());
        let bad_email = CheckoutForm { email: "not-an-email".into(), ..form() };
        assert!(matches!(validate_form(&bad_email), Err(CheckoutError::Invalid(_))));
        let no_city = CheckoutForm { city: String::new(), ..form() };
        let err = validate_form(&no_city).unwrap_err();
        let CheckoutError::Invalid(errors) = err;
        assert!(errors.field_errors().contains_key("city"));
    }

    #[test]
    fn test_confirmation_carries_display() {
        let summary = compute_totals(&[line(42.0, 1)], DELIVERY_CHARGE, Percent::ZERO);
        let c = CheckoutConfirmation::new(vec![line(42.0, 1)], None, summary);
        assert_eq!(c.display.grand_total, "242.00");
        assert_eq!(c.lines.len(), 1);
    }
}
