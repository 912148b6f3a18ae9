//! HTTP handlers for reporting endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::reporting::{DashboardStats, ReportingService, RevenueSummary};
use crate::AppState;

/// Dashboard statistics for today and the current month
pub async fn dashboard_stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let service = ReportingService::new(state.store);
    let stats = service.dashboard_stats().await?;
    Ok(Json(stats))
}

/// Month-to-date revenue summary
pub async fn revenue_summary(State(state): State<AppState>) -> AppResult<Json<RevenueSummary>> {
    let service = ReportingService::new(state.store);
    let summary = service.revenue_summary().await?;
    Ok(Json(summary))
}
