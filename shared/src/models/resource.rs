//! Consumable resource inventory

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quantity below which a resource counts as low stock.
///
/// "Low stock" is a derived predicate, never a stored flag; see
/// [`Resource::is_low_stock`].
pub const LOW_STOCK_THRESHOLD: u32 = 100;

/// A consumable used in production: sachet film, treatment chemicals,
/// generator fuel. Unlike the ledgers, resources are mutable (restocks
/// and adjustments) and deletable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: Uuid,
    pub name: String,
    pub category: ResourceCategory,
    /// Quantity on hand; non-negative, fractional allowed
    pub quantity: Decimal,
    /// Unit label, e.g. "kg", "litres", "rolls"
    pub unit: String,
    pub cost_per_unit: Decimal,
    pub last_restocked: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    /// Whether the quantity on hand has fallen below the low-stock
    /// threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < Decimal::from(LOW_STOCK_THRESHOLD)
    }
}

/// The closed set of resource categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    /// Sachet film and other packaging material
    Packaging,
    Chemical,
    Fuel,
    Other,
}

impl ResourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Packaging => "packaging",
            ResourceCategory::Chemical => "chemical",
            ResourceCategory::Fuel => "fuel",
            ResourceCategory::Other => "other",
        }
    }
}
