//! Shared types and domain logic for the Table Water Management System
//!
//! This crate contains the record types, the role/route access table, and
//! the pure aggregation functions the backend is built on. It performs no
//! I/O so every rule in here can be tested in isolation.

pub mod access;
pub mod currency;
pub mod dates;
pub mod metrics;
pub mod models;
pub mod pricing;
pub mod validation;

pub use access::*;
pub use dates::*;
pub use models::*;
