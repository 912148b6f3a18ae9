//! Reporting service for the dashboard and revenue views
//!
//! Fetches snapshots from the store and reduces them with the pure
//! aggregation functions in `shared::metrics`. Independent fetches are
//! issued concurrently and awaited jointly; they fill disjoint fields of
//! the result, so completion order does not matter.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use shared::{
    dates::{self, DateRange},
    metrics,
    models::{Expense, Sales},
};

use crate::error::AppResult;
use crate::store::Store;

/// Reporting service
#[derive(Clone)]
pub struct ReportingService {
    store: Store,
}

/// Headline figures for the dashboard view
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_production_today: u64,
    pub total_sales_today: u64,
    pub total_revenue_today: Decimal,
    pub total_expenses_today: Decimal,
    pub net_profit_today: Decimal,
    pub total_production_month: u64,
    pub total_sales_month: u64,
    pub total_revenue_month: Decimal,
}

/// Month-to-date revenue view: totals plus the underlying records
#[derive(Debug, Serialize)]
pub struct RevenueSummary {
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
    pub sales: Vec<Sales>,
    pub expenses: Vec<Expense>,
}

impl ReportingService {
    /// Create a new ReportingService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Dashboard figures for today and the current month.
    pub async fn dashboard_stats(&self) -> AppResult<DashboardStats> {
        self.dashboard_stats_for(dates::today()).await
    }

    /// Dashboard figures for `today` and the month containing it.
    pub async fn dashboard_stats_for(&self, today: NaiveDate) -> AppResult<DashboardStats> {
        let month_start = dates::month_start_of(today);

        let (productions, sales, expenses) = tokio::join!(
            self.store.productions(),
            self.store.sales(),
            self.store.expenses(),
        );

        let total_revenue_today: Decimal =
            metrics::daily_total(&sales, |s| s.date, |s| s.revenue, today);
        let total_expenses_today: Decimal =
            metrics::daily_total(&expenses, |e| e.date, |e| e.amount, today);

        Ok(DashboardStats {
            total_production_today: metrics::daily_total(
                &productions,
                |p| p.date,
                |p| p.bags_produced as u64,
                today,
            ),
            total_sales_today: metrics::daily_total(
                &sales,
                |s| s.date,
                |s| s.bags_sold as u64,
                today,
            ),
            total_revenue_today,
            total_expenses_today,
            net_profit_today: metrics::net_profit(total_revenue_today, total_expenses_today),
            total_production_month: metrics::month_to_date_total(
                &productions,
                |p| p.date,
                |p| p.bags_produced as u64,
                month_start,
            ),
            total_sales_month: metrics::month_to_date_total(
                &sales,
                |s| s.date,
                |s| s.bags_sold as u64,
                month_start,
            ),
            total_revenue_month: metrics::month_to_date_total(
                &sales,
                |s| s.date,
                |s| s.revenue,
                month_start,
            ),
        })
    }

    /// Month-to-date revenue summary.
    pub async fn revenue_summary(&self) -> AppResult<RevenueSummary> {
        self.revenue_summary_for(DateRange::month_to_date()).await
    }

    /// Revenue summary over one range. Both totals cover the same range,
    /// so the net profit they produce is coherent.
    pub async fn revenue_summary_for(&self, range: DateRange) -> AppResult<RevenueSummary> {
        let (all_sales, all_expenses) = tokio::join!(self.store.sales(), self.store.expenses());

        let mut sales: Vec<Sales> = all_sales
            .into_iter()
            .filter(|record| range.contains(record.date))
            .collect();
        sales.sort_by(|a, b| b.date.cmp(&a.date));

        let mut expenses: Vec<Expense> = all_expenses
            .into_iter()
            .filter(|record| range.contains(record.date))
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));

        let total_revenue: Decimal = metrics::total_for(&sales, |_| true, |s| s.revenue);
        let total_expenses: Decimal = metrics::total_for(&expenses, |_| true, |e| e.amount);

        Ok(RevenueSummary {
            total_revenue,
            total_expenses,
            net_profit: metrics::net_profit(total_revenue, total_expenses),
            sales,
            expenses,
        })
    }
}
