//! Production record service

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use shared::{dates::DateRange, models::Production};

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::store::Store;

/// Service for the append-only production ledger
#[derive(Clone)]
pub struct ProductionService {
    store: Store,
}

/// Input for recording a day's production
#[derive(Debug, Deserialize)]
pub struct RecordProductionInput {
    pub date: NaiveDate,
    pub bags_produced: u32,
    pub notes: Option<String>,
}

impl ProductionService {
    /// Create a new ProductionService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All production records, newest first.
    pub async fn list(&self) -> AppResult<Vec<Production>> {
        let mut records = self.store.productions().await;
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Production records with `start <= date <= end`, newest first.
    pub async fn list_in_range(&self, range: DateRange) -> AppResult<Vec<Production>> {
        let mut records: Vec<Production> = self
            .store
            .productions()
            .await
            .into_iter()
            .filter(|record| range.contains(record.date))
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Record a day's production, stamped with the recording staff.
    pub async fn record(
        &self,
        staff: &AuthUser,
        input: RecordProductionInput,
    ) -> AppResult<Production> {
        let record = Production {
            id: Uuid::new_v4(),
            date: input.date,
            bags_produced: input.bags_produced,
            staff_id: staff.user_id,
            staff_name: Some(staff.full_name.clone()),
            notes: input.notes,
            created_at: Utc::now(),
        };

        self.store.insert_production(record.clone()).await;

        Ok(record)
    }
}

// Stable sort: records sharing a date keep their insertion order.
fn sort_newest_first(records: &mut [Production]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
