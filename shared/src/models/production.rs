//! Production records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A day's recorded sachet production.
///
/// Production is an append-only ledger: records are never mutated or
/// deleted after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Production {
    pub id: Uuid,
    /// Calendar day the bags were produced (no time component)
    pub date: NaiveDate,
    pub bags_produced: u32,
    pub staff_id: Uuid,
    pub staff_name: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
