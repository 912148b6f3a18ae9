//! Resource inventory tests
//!
//! Resources are the one mutable collection: updates merge partial
//! fields, deletes are idempotent, and low stock is derived on read.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use shared::models::ResourceCategory;
use twm_server::error::AppError;
use twm_server::services::resource::{AddResourceInput, ResourceService, UpdateResourceInput};
use twm_server::store::Store;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn add_input(name: &str, category: ResourceCategory, quantity: &str) -> AddResourceInput {
    AddResourceInput {
        name: name.to_string(),
        category,
        quantity: dec(quantity),
        unit: "kg".to_string(),
        cost_per_unit: dec("150"),
        last_restocked: Some("2024-03-01".parse::<NaiveDate>().unwrap()),
    }
}

fn no_changes() -> UpdateResourceInput {
    UpdateResourceInput {
        name: None,
        category: None,
        quantity: None,
        unit: None,
        cost_per_unit: None,
        last_restocked: None,
    }
}

#[tokio::test]
async fn update_merges_provided_fields_and_refreshes_the_timestamp() {
    let service = ResourceService::new(Store::default());

    let created = service
        .add(add_input("Chlorine", ResourceCategory::Chemical, "50"))
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            UpdateResourceInput {
                quantity: Some(dec("200")),
                cost_per_unit: Some(dec("175")),
                ..no_changes()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Chlorine");
    assert_eq!(updated.quantity, dec("200"));
    assert_eq!(updated.cost_per_unit, dec("175"));
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_of_an_absent_id_fails_with_not_found() {
    let service = ResourceService::new(Store::default());

    let err = service
        .update(Uuid::new_v4(), no_changes())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn invalid_update_input_leaves_the_record_untouched() {
    let service = ResourceService::new(Store::default());

    let created = service
        .add(add_input("Diesel", ResourceCategory::Fuel, "80"))
        .await
        .unwrap();

    let err = service
        .update(
            created.id,
            UpdateResourceInput {
                quantity: Some(dec("-5")),
                ..no_changes()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));

    let resources = service.list().await.unwrap();
    assert_eq!(resources[0].quantity, dec("80"));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let service = ResourceService::new(Store::default());

    let created = service
        .add(add_input("Sachet Film", ResourceCategory::Packaging, "500"))
        .await
        .unwrap();

    service.delete(created.id).await.unwrap();
    assert!(service.list().await.unwrap().is_empty());

    // Second delete: same end state, no error.
    service.delete(created.id).await.unwrap();
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn negative_quantities_are_rejected_at_creation() {
    let service = ResourceService::new(Store::default());

    let err = service
        .add(add_input("Chlorine", ResourceCategory::Chemical, "-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { .. }));
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn low_stock_keeps_insertion_order_and_threshold_is_exclusive() {
    let service = ResourceService::new(Store::default());

    service
        .add(add_input("Chlorine", ResourceCategory::Chemical, "40"))
        .await
        .unwrap();
    service
        .add(add_input("Sachet Film", ResourceCategory::Packaging, "100"))
        .await
        .unwrap();
    service
        .add(add_input("Diesel", ResourceCategory::Fuel, "5"))
        .await
        .unwrap();
    service
        .add(add_input("Caps", ResourceCategory::Other, "250"))
        .await
        .unwrap();

    let low = service.low_stock().await.unwrap();
    let names: Vec<&str> = low.iter().map(|r| r.name.as_str()).collect();

    // Exactly 100 on hand is not low stock.
    assert_eq!(names, vec!["Chlorine", "Diesel"]);
}

#[tokio::test]
async fn listing_by_category_filters_exactly() {
    let service = ResourceService::new(Store::default());

    service
        .add(add_input("Chlorine", ResourceCategory::Chemical, "40"))
        .await
        .unwrap();
    service
        .add(add_input("Alum", ResourceCategory::Chemical, "60"))
        .await
        .unwrap();
    service
        .add(add_input("Diesel", ResourceCategory::Fuel, "500"))
        .await
        .unwrap();

    let chemicals = service
        .list_by_category(ResourceCategory::Chemical)
        .await
        .unwrap();

    assert_eq!(chemicals.len(), 2);
    assert!(chemicals
        .iter()
        .all(|r| r.category == ResourceCategory::Chemical));
}
