//! Route definitions for the Table Water Management System
//!
//! Every protected group is layered with the auth middleware (outermost)
//! and, where a single view owns the whole group, the route guard for
//! that view. A denied combination never reaches its handler.

use axum::{
    extract::Request,
    middleware,
    middleware::Next,
    routing::{get, post, put},
    Router,
};

use shared::Route;

use crate::{
    handlers,
    middleware::{auth_middleware, require_view},
    AppState,
};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes
        .nest("/auth", auth_routes(state.clone()))
        // Protected routes - view-gated record groups
        .nest("/production", production_routes(state.clone()))
        .nest("/sales", sales_routes(state.clone()))
        .nest("/expenses", expense_routes(state.clone()))
        .nest("/resources", resource_routes(state.clone()))
        // Protected routes - reports
        .nest("/reports", report_routes(state.clone()))
        // Protected routes - navigation and settings
        .nest("/navigation", navigation_routes(state.clone()))
        .nest("/settings", settings_routes(state))
}

/// Authentication routes; login is public, the rest need a session
fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(handlers::logout))
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/login", post(handlers::login))
        .merge(protected)
}

/// Production ledger routes (Admin, Staff)
fn production_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_production).post(handlers::record_production),
        )
        .route("/range", get(handlers::list_production_in_range))
        .route_layer(middleware::from_fn(|request: Request, next: Next| {
            require_view(Route::Production, request, next)
        }))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Sales ledger routes (Admin, Staff)
fn sales_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_sales).post(handlers::record_sales))
        .route("/range", get(handlers::list_sales_in_range))
        .route_layer(middleware::from_fn(|request: Request, next: Next| {
            require_view(Route::Sales, request, next)
        }))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Expense routes; read and write visibility differ, so the guard lives
/// in the handlers
fn expense_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_expenses).post(handlers::record_expense),
        )
        .route("/range", get(handlers::list_expenses_in_range))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Resource inventory routes (Admin, Staff)
fn resource_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_resources).post(handlers::add_resource),
        )
        .route("/low-stock", get(handlers::low_stock_resources))
        .route(
            "/:resource_id",
            put(handlers::update_resource).delete(handlers::delete_resource),
        )
        .route_layer(middleware::from_fn(|request: Request, next: Next| {
            require_view(Route::Resources, request, next)
        }))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Reporting routes; each report is gated by the view it backs
fn report_routes(state: AppState) -> Router<AppState> {
    let dashboard = Router::new()
        .route("/dashboard", get(handlers::dashboard_stats))
        .route_layer(middleware::from_fn(|request: Request, next: Next| {
            require_view(Route::Dashboard, request, next)
        }));

    let revenue = Router::new()
        .route("/revenue", get(handlers::revenue_summary))
        .route_layer(middleware::from_fn(|request: Request, next: Next| {
            require_view(Route::Revenue, request, next)
        }));

    dashboard
        .merge(revenue)
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Navigation menu (any authenticated role)
fn navigation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::navigation))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Settings view (all roles, still behind the guard)
fn settings_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::settings))
        .route_layer(middleware::from_fn(|request: Request, next: Next| {
            require_view(Route::Settings, request, next)
        }))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
