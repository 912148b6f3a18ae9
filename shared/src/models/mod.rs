//! Domain records for the Table Water Management System

mod expense;
mod production;
mod resource;
mod sales;
mod user;

pub use expense::*;
pub use production::*;
pub use resource::*;
pub use sales::*;
pub use user::*;
