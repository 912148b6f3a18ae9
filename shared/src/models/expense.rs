//! Expense records

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded business expense. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    /// Calendar day the expense was incurred (no time component)
    pub date: NaiveDate,
    /// Free-form category, e.g. "Fuel", "Maintenance"
    pub category: String,
    pub description: String,
    /// Non-negative naira amount
    pub amount: Decimal,
    pub staff_id: Uuid,
    pub staff_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
