//! Sachet pricing
//!
//! The single source of truth for the selling price. Sales revenue is
//! computed here once, at record creation, and stored with the record;
//! changing the constant later must not rewrite history.

use rust_decimal::Decimal;

/// Selling price of one sachet bag, in naira.
pub const UNIT_PRICE: u32 = 400;

/// Revenue for a quantity of bags at the current unit price.
pub fn revenue_for(bags_sold: u32) -> Decimal {
    Decimal::from(bags_sold) * Decimal::from(UNIT_PRICE)
}
