//! Table Water Management System - Backend Server
//!
//! Business-management backend for a sachet-water producer: records daily
//! production, sales, and expenses, tracks consumable inventory, and
//! serves role-gated summary views to the dashboard client. Storage is an
//! in-memory record store standing in for a future managed backend;
//! identity resolution is delegated to a mock identity backend.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;

use services::session::{MockIdentityBackend, SessionService};
use store::Store;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub sessions: SessionService,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire up the in-memory store and the mock identity backend.
    pub fn new(config: Arc<Config>) -> Self {
        let identity = Arc::new(MockIdentityBackend::with_demo_users());
        let sessions = SessionService::new(
            &config.session.token_secret,
            config.session.token_expiry,
            identity,
        );

        Self {
            store: Store::default(),
            sessions,
            config,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Table Water Management System API v1.0"
}
