//! HTTP handlers for sales records

use axum::{
    extract::{Query, State},
    Json,
};

use shared::models::Sales;

use crate::error::AppResult;
use crate::handlers::RangeQuery;
use crate::middleware::CurrentUser;
use crate::services::sales::{RecordSalesInput, SalesService};
use crate::AppState;

/// List all sales records, newest first
pub async fn list_sales(State(state): State<AppState>) -> AppResult<Json<Vec<Sales>>> {
    let service = SalesService::new(state.store);
    let records = service.list().await?;
    Ok(Json(records))
}

/// List sales records in an inclusive date range
pub async fn list_sales_in_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<Vec<Sales>>> {
    let service = SalesService::new(state.store);
    let records = service.list_in_range(query.range()).await?;
    Ok(Json(records))
}

/// Record a day's sales; revenue is derived and frozen at creation
pub async fn record_sales(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<RecordSalesInput>,
) -> AppResult<Json<Sales>> {
    let service = SalesService::new(state.store);
    let record = service.record(&user, input).await?;
    Ok(Json(record))
}
