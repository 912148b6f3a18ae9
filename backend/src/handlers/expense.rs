//! HTTP handlers for expense records
//!
//! Expense visibility is split: Admin and Staff record expenses (the
//! same rule as the Sales view they are entered from), while reading the
//! expense book belongs to the Revenue view (Admin and Viewer). The
//! guard therefore lives here rather than on the route group.

use axum::{
    extract::{Query, State},
    Json,
};

use shared::{models::Expense, Route};

use crate::error::AppResult;
use crate::handlers::RangeQuery;
use crate::middleware::{ensure_view, CurrentUser};
use crate::services::expense::{ExpenseService, RecordExpenseInput};
use crate::AppState;

/// List all expenses, newest first
pub async fn list_expenses(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<Expense>>> {
    ensure_view(&user, Route::Revenue)?;

    let service = ExpenseService::new(state.store);
    let records = service.list().await?;
    Ok(Json(records))
}

/// List expenses in an inclusive date range
pub async fn list_expenses_in_range(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<Vec<Expense>>> {
    ensure_view(&user, Route::Revenue)?;

    let service = ExpenseService::new(state.store);
    let records = service.list_in_range(query.range()).await?;
    Ok(Json(records))
}

/// Record an expense
pub async fn record_expense(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<RecordExpenseInput>,
) -> AppResult<Json<Expense>> {
    ensure_view(&user, Route::Sales)?;

    let service = ExpenseService::new(state.store);
    let record = service.record(&user, input).await?;
    Ok(Json(record))
}
