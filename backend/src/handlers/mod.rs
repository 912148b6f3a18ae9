//! HTTP handlers for the Table Water Management System

pub mod auth;
pub mod expense;
pub mod health;
pub mod navigation;
pub mod production;
pub mod reporting;
pub mod resource;
pub mod sales;
pub mod settings;

pub use auth::*;
pub use expense::*;
pub use health::*;
pub use navigation::*;
pub use production::*;
pub use reporting::*;
pub use resource::*;
pub use sales::*;
pub use settings::*;

use chrono::NaiveDate;
use serde::Deserialize;

use shared::dates::DateRange;

/// Query parameters for inclusive date-range listings
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RangeQuery {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}
