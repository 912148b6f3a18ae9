//! Settings view handler

use axum::{extract::State, Json};
use serde::Serialize;

use shared::models::User;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub app_name: &'static str,
    pub version: &'static str,
    pub user: User,
}

/// The settings view: app info plus the caller's profile
pub async fn settings(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<SettingsView>> {
    let profile = state.sessions.profile(user.user_id)?;

    Ok(Json(SettingsView {
        app_name: "Abi wa Ummi Table Water Management System",
        version: env!("CARGO_PKG_VERSION"),
        user: profile,
    }))
}
