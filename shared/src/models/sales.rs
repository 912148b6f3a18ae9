//! Sales records

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A day's recorded sachet sales.
///
/// `revenue` is computed from `bags_sold` at the unit price in force when
/// the record is created (see [`crate::pricing`]) and stored with the
/// record. It is never recomputed on read, so historical rows keep their
/// point-in-time value if the price constant later changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sales {
    pub id: Uuid,
    /// Calendar day of the sale (no time component)
    pub date: NaiveDate,
    pub bags_sold: u32,
    /// bags_sold x unit price, frozen at creation
    pub revenue: Decimal,
    pub customer_name: Option<String>,
    pub staff_id: Uuid,
    pub staff_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
