//! HTTP handlers for resource inventory

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::{
    currency::format_naira,
    models::{Resource, ResourceCategory},
};

use crate::error::AppResult;
use crate::services::resource::{AddResourceInput, ResourceService, UpdateResourceInput};
use crate::AppState;

/// Optional category filter for resource listings
#[derive(Debug, Deserialize)]
pub struct ResourceListQuery {
    pub category: Option<ResourceCategory>,
}

/// Low-stock alert payload: the items plus a banner message
#[derive(Debug, Serialize)]
pub struct LowStockAlert {
    pub items: Vec<Resource>,
    pub message: Option<String>,
}

/// List resources, optionally filtered by category
pub async fn list_resources(
    State(state): State<AppState>,
    Query(query): Query<ResourceListQuery>,
) -> AppResult<Json<Vec<Resource>>> {
    let service = ResourceService::new(state.store);
    let resources = match query.category {
        Some(category) => service.list_by_category(category).await?,
        None => service.list().await?,
    };
    Ok(Json(resources))
}

/// Resources below the low-stock threshold, with an alert message
pub async fn low_stock_resources(
    State(state): State<AppState>,
) -> AppResult<Json<LowStockAlert>> {
    let service = ResourceService::new(state.store);
    let items = service.low_stock().await?;

    let message = if items.is_empty() {
        None
    } else {
        let names: Vec<&str> = items.iter().map(|r| r.name.as_str()).collect();
        Some(format!(
            "{} item(s) are running low: {}. Please restock soon to avoid production delays.",
            items.len(),
            names.join(", ")
        ))
    };

    Ok(Json(LowStockAlert { items, message }))
}

/// Add a resource
pub async fn add_resource(
    State(state): State<AppState>,
    Json(input): Json<AddResourceInput>,
) -> AppResult<Json<Resource>> {
    let service = ResourceService::new(state.store);
    let resource = service.add(input).await?;

    tracing::info!(
        "added resource {} at {} per {}",
        resource.name,
        format_naira(resource.cost_per_unit),
        resource.unit
    );

    Ok(Json(resource))
}

/// Update a resource (restock or adjustment)
pub async fn update_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<Uuid>,
    Json(input): Json<UpdateResourceInput>,
) -> AppResult<Json<Resource>> {
    let service = ResourceService::new(state.store);
    let resource = service.update(resource_id, input).await?;
    Ok(Json(resource))
}

/// Delete a resource (idempotent)
pub async fn delete_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = ResourceService::new(state.store);
    service.delete(resource_id).await?;
    Ok(Json(()))
}
