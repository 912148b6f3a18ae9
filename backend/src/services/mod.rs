//! Business logic services for the Table Water Management System

pub mod expense;
pub mod production;
pub mod reporting;
pub mod resource;
pub mod sales;
pub mod session;

pub use expense::ExpenseService;
pub use production::ProductionService;
pub use reporting::ReportingService;
pub use resource::ResourceService;
pub use sales::SalesService;
pub use session::SessionService;
