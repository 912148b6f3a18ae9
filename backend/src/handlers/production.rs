//! HTTP handlers for production records

use axum::{
    extract::{Query, State},
    Json,
};

use shared::models::Production;

use crate::error::AppResult;
use crate::handlers::RangeQuery;
use crate::middleware::CurrentUser;
use crate::services::production::{ProductionService, RecordProductionInput};
use crate::AppState;

/// List all production records, newest first
pub async fn list_production(State(state): State<AppState>) -> AppResult<Json<Vec<Production>>> {
    let service = ProductionService::new(state.store);
    let records = service.list().await?;
    Ok(Json(records))
}

/// List production records in an inclusive date range
pub async fn list_production_in_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<Vec<Production>>> {
    let service = ProductionService::new(state.store);
    let records = service.list_in_range(query.range()).await?;
    Ok(Json(records))
}

/// Record a day's production
pub async fn record_production(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<RecordProductionInput>,
) -> AppResult<Json<Production>> {
    let service = ProductionService::new(state.store);
    let record = service.record(&user, input).await?;
    Ok(Json(record))
}
