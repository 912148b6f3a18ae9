//! Sales record service

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use shared::{dates::DateRange, models::Sales, pricing};

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::store::Store;

/// Service for the append-only sales ledger
#[derive(Clone)]
pub struct SalesService {
    store: Store,
}

/// Input for recording a day's sales.
///
/// Revenue is not part of the input: it is derived from `bags_sold` at
/// the unit price in force when the record is created.
#[derive(Debug, Deserialize)]
pub struct RecordSalesInput {
    pub date: NaiveDate,
    pub bags_sold: u32,
    pub customer_name: Option<String>,
    pub notes: Option<String>,
}

impl SalesService {
    /// Create a new SalesService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All sales records, newest first.
    pub async fn list(&self) -> AppResult<Vec<Sales>> {
        let mut records = self.store.sales().await;
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Sales records with `start <= date <= end`, newest first.
    pub async fn list_in_range(&self, range: DateRange) -> AppResult<Vec<Sales>> {
        let mut records: Vec<Sales> = self
            .store
            .sales()
            .await
            .into_iter()
            .filter(|record| range.contains(record.date))
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Record a day's sales. The revenue computed here is frozen with
    /// the record; later price changes do not rewrite it.
    pub async fn record(&self, staff: &AuthUser, input: RecordSalesInput) -> AppResult<Sales> {
        let record = Sales {
            id: Uuid::new_v4(),
            date: input.date,
            bags_sold: input.bags_sold,
            revenue: pricing::revenue_for(input.bags_sold),
            customer_name: input.customer_name,
            staff_id: staff.user_id,
            staff_name: Some(staff.full_name.clone()),
            notes: input.notes,
            created_at: Utc::now(),
        };

        self.store.insert_sales(record.clone()).await;

        Ok(record)
    }
}

// Stable sort: records sharing a date keep their insertion order.
fn sort_newest_first(records: &mut [Sales]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
