//! Authentication handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use shared::models::User;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::session::SessionTokens;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Sign in with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (user, tokens) = state.sessions.sign_in(&input.email, &input.password)?;

    let SessionTokens {
        access_token,
        token_type,
        expires_in,
    } = tokens;

    Ok(Json(LoginResponse {
        user,
        access_token,
        token_type,
        expires_in,
    }))
}

/// Sign out the current session (idempotent)
pub async fn logout(
    State(state): State<AppState>,
    _current_user: CurrentUser,
) -> Json<serde_json::Value> {
    state.sessions.sign_out();
    Json(serde_json::json!({ "status": "signed_out" }))
}

/// Get the current user's profile
pub async fn me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<User>> {
    let profile = state.sessions.profile(user.user_id)?;
    Ok(Json(profile))
}
