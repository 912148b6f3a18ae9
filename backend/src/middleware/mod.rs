//! Request middleware

pub mod auth;

pub use auth::{auth_middleware, ensure_view, require_view, AuthUser, CurrentUser};
