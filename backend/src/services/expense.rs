//! Expense record service

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::{dates::DateRange, models::Expense, validation};

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::store::Store;

/// Service for the append-only expense ledger
#[derive(Clone)]
pub struct ExpenseService {
    store: Store,
}

/// Input for recording an expense
#[derive(Debug, Deserialize)]
pub struct RecordExpenseInput {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
}

impl ExpenseService {
    /// Create a new ExpenseService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All expenses, newest first.
    pub async fn list(&self) -> AppResult<Vec<Expense>> {
        let mut records = self.store.expenses().await;
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Expenses with `start <= date <= end`, newest first.
    pub async fn list_in_range(&self, range: DateRange) -> AppResult<Vec<Expense>> {
        let mut records: Vec<Expense> = self
            .store
            .expenses()
            .await
            .into_iter()
            .filter(|record| range.contains(record.date))
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Record an expense. Validation failures leave no partial record.
    pub async fn record(&self, staff: &AuthUser, input: RecordExpenseInput) -> AppResult<Expense> {
        validation::require_text(&input.category)
            .map_err(|message| AppError::validation("category", message))?;
        validation::require_text(&input.description)
            .map_err(|message| AppError::validation("description", message))?;
        validation::non_negative(input.amount)
            .map_err(|message| AppError::validation("amount", message))?;

        let record = Expense {
            id: Uuid::new_v4(),
            date: input.date,
            category: input.category,
            description: input.description,
            amount: input.amount,
            staff_id: staff.user_id,
            staff_name: Some(staff.full_name.clone()),
            created_at: Utc::now(),
        };

        self.store.insert_expense(record.clone()).await;

        Ok(record)
    }
}

// Stable sort: records sharing a date keep their insertion order.
fn sort_newest_first(records: &mut [Expense]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
