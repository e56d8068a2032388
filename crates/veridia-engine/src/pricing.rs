//! Discount application.
//!
//! The single implementation of coupon math; both the review-step price
//! display and the payment dispatch go through [`discounted_amount`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiscountKind {
    /// `value` is a percentage of the base price, 0-100.
    Percentage,
    /// `value` is a dollar amount taken off the base price.
    Fixed,
}

/// A validated coupon, as returned by the discount validation collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Discount {
    pub kind: DiscountKind,
    pub value: i64,
}

/// The final cents amount after applying an optional discount. Never
/// negative.
pub fn discounted_amount(base_cents: i64, discount: Option<&Discount>) -> i64 {
    let Some(discount) = discount else {
        return base_cents.max(0);
    };
    let amount = match discount.kind {
        DiscountKind::Percentage => {
            (base_cents as f64 * (1.0 - discount.value as f64 / 100.0)).round() as i64
        }
        DiscountKind::Fixed => base_cents - discount.value * 100,
    };
    amount.max(0)
}
