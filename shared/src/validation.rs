//! Validation helpers for record input
//!
//! Plain functions returning `Result<(), &'static str>`; the backend maps
//! failures onto its error type at the store boundary.

use rust_decimal::Decimal;

/// Monetary and quantity fields must be non-negative.
pub fn non_negative(value: Decimal) -> Result<(), &'static str> {
    if value < Decimal::ZERO {
        return Err("must not be negative");
    }
    Ok(())
}

/// Required text fields must contain something other than whitespace.
pub fn require_text(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("is required");
    }
    Ok(())
}
