//! Navigation menu handler
//!
//! Returns the routes visible to the caller's role, in canonical order.
//! This only shapes the menu; the route guard remains the enforcement
//! point for every view.

use axum::Json;
use serde::Serialize;

use shared::{access, Route};

use crate::middleware::CurrentUser;

#[derive(Debug, Serialize)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub path: &'static str,
}

/// Navigation items for the current role
pub async fn navigation(CurrentUser(user): CurrentUser) -> Json<Vec<NavItem>> {
    let items = access::visible_routes(user.role)
        .into_iter()
        .map(|route| NavItem {
            route,
            label: route.label(),
            path: route.path(),
        })
        .collect();

    Json(items)
}
