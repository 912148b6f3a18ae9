//! In-memory record store
//!
//! The store exclusively owns the record collections; services go through
//! it for every read and mutation, and a mutation is visible to the next
//! read immediately (single process, single writer). It stands in for the
//! future managed backend, which must satisfy the same contract.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use shared::models::{Expense, Production, Resource, Sales};

/// Shared handle to the record collections.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Collections>,
}

#[derive(Default)]
struct Collections {
    productions: RwLock<Vec<Production>>,
    sales: RwLock<Vec<Sales>>,
    expenses: RwLock<Vec<Expense>>,
    resources: RwLock<Vec<Resource>>,
}

impl Store {
    /// Snapshot of all production records, in insertion order.
    pub async fn productions(&self) -> Vec<Production> {
        self.inner.productions.read().await.clone()
    }

    /// Snapshot of all sales records, in insertion order.
    pub async fn sales(&self) -> Vec<Sales> {
        self.inner.sales.read().await.clone()
    }

    /// Snapshot of all expense records, in insertion order.
    pub async fn expenses(&self) -> Vec<Expense> {
        self.inner.expenses.read().await.clone()
    }

    /// Snapshot of all resources, in insertion order.
    pub async fn resources(&self) -> Vec<Resource> {
        self.inner.resources.read().await.clone()
    }

    pub async fn insert_production(&self, record: Production) {
        self.inner.productions.write().await.push(record);
    }

    pub async fn insert_sales(&self, record: Sales) {
        self.inner.sales.write().await.push(record);
    }

    pub async fn insert_expense(&self, record: Expense) {
        self.inner.expenses.write().await.push(record);
    }

    pub async fn insert_resource(&self, record: Resource) {
        self.inner.resources.write().await.push(record);
    }

    /// Apply `apply` to the resource with `id` and return the updated
    /// record, or `None` if no such resource exists.
    pub async fn update_resource<F>(&self, id: Uuid, apply: F) -> Option<Resource>
    where
        F: FnOnce(&mut Resource),
    {
        let mut resources = self.inner.resources.write().await;
        let resource = resources.iter_mut().find(|r| r.id == id)?;
        apply(resource);
        Some(resource.clone())
    }

    /// Remove the resource with `id`. Returns whether a record was
    /// actually removed; removing an absent id is not an error.
    pub async fn remove_resource(&self, id: Uuid) -> bool {
        let mut resources = self.inner.resources.write().await;
        let before = resources.len();
        resources.retain(|r| r.id != id);
        resources.len() != before
    }
}
