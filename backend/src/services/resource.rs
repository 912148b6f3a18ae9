//! Resource inventory service
//!
//! Unlike the ledgers, resources are mutable: restocks and adjustments
//! update them in place, and obsolete items can be deleted.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::{
    dates,
    metrics,
    models::{Resource, ResourceCategory},
    validation,
};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Service for consumable resource inventory
#[derive(Clone)]
pub struct ResourceService {
    store: Store,
}

/// Input for adding a resource
#[derive(Debug, Deserialize)]
pub struct AddResourceInput {
    pub name: String,
    pub category: ResourceCategory,
    pub quantity: Decimal,
    pub unit: String,
    pub cost_per_unit: Decimal,
    /// Defaults to today when omitted
    pub last_restocked: Option<NaiveDate>,
}

/// Input for updating a resource (restock or adjustment); only the
/// provided fields are merged.
#[derive(Debug, Deserialize)]
pub struct UpdateResourceInput {
    pub name: Option<String>,
    pub category: Option<ResourceCategory>,
    pub quantity: Option<Decimal>,
    pub unit: Option<String>,
    pub cost_per_unit: Option<Decimal>,
    pub last_restocked: Option<NaiveDate>,
}

impl ResourceService {
    /// Create a new ResourceService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// All resources, in insertion order.
    pub async fn list(&self) -> AppResult<Vec<Resource>> {
        Ok(self.store.resources().await)
    }

    /// Resources in one category, in insertion order.
    pub async fn list_by_category(
        &self,
        category: ResourceCategory,
    ) -> AppResult<Vec<Resource>> {
        Ok(self
            .store
            .resources()
            .await
            .into_iter()
            .filter(|resource| resource.category == category)
            .collect())
    }

    /// Resources below the low-stock threshold, in insertion order.
    pub async fn low_stock(&self) -> AppResult<Vec<Resource>> {
        let resources = self.store.resources().await;
        Ok(metrics::low_stock_items(&resources)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Add a resource. Validation failures leave no partial record.
    pub async fn add(&self, input: AddResourceInput) -> AppResult<Resource> {
        validation::require_text(&input.name)
            .map_err(|message| AppError::validation("name", message))?;
        validation::require_text(&input.unit)
            .map_err(|message| AppError::validation("unit", message))?;
        validation::non_negative(input.quantity)
            .map_err(|message| AppError::validation("quantity", message))?;
        validation::non_negative(input.cost_per_unit)
            .map_err(|message| AppError::validation("cost_per_unit", message))?;

        let now = Utc::now();
        let resource = Resource {
            id: Uuid::new_v4(),
            name: input.name,
            category: input.category,
            quantity: input.quantity,
            unit: input.unit,
            cost_per_unit: input.cost_per_unit,
            last_restocked: input.last_restocked.unwrap_or_else(dates::today),
            created_at: now,
            updated_at: now,
        };

        self.store.insert_resource(resource.clone()).await;

        Ok(resource)
    }

    /// Merge the provided fields into an existing resource and refresh
    /// its update timestamp. Fails with `NotFound` for an absent id;
    /// invalid input is rejected before anything is written.
    pub async fn update(&self, id: Uuid, input: UpdateResourceInput) -> AppResult<Resource> {
        if let Some(ref name) = input.name {
            validation::require_text(name)
                .map_err(|message| AppError::validation("name", message))?;
        }
        if let Some(ref unit) = input.unit {
            validation::require_text(unit)
                .map_err(|message| AppError::validation("unit", message))?;
        }
        if let Some(quantity) = input.quantity {
            validation::non_negative(quantity)
                .map_err(|message| AppError::validation("quantity", message))?;
        }
        if let Some(cost_per_unit) = input.cost_per_unit {
            validation::non_negative(cost_per_unit)
                .map_err(|message| AppError::validation("cost_per_unit", message))?;
        }

        self.store
            .update_resource(id, |resource| {
                if let Some(name) = input.name {
                    resource.name = name;
                }
                if let Some(category) = input.category {
                    resource.category = category;
                }
                if let Some(quantity) = input.quantity {
                    resource.quantity = quantity;
                }
                if let Some(unit) = input.unit {
                    resource.unit = unit;
                }
                if let Some(cost_per_unit) = input.cost_per_unit {
                    resource.cost_per_unit = cost_per_unit;
                }
                if let Some(last_restocked) = input.last_restocked {
                    resource.last_restocked = last_restocked;
                }
                resource.updated_at = Utc::now();
            })
            .await
            .ok_or_else(|| AppError::NotFound("Resource".to_string()))
    }

    /// Delete a resource. Idempotent: deleting an absent id is a
    /// success, so a repeated delete leaves the same end state.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.store.remove_resource(id).await {
            tracing::debug!("delete for absent resource {id}");
        }
        Ok(())
    }
}
