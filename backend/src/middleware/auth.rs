//! Authentication middleware
//!
//! Session-token authentication plus the role/route guard. The guard is
//! the enforcement point for route visibility: hiding a navigation item
//! is cosmetic, a denied combination must never reach its handler.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use shared::{access, models::Role, Route};

use crate::error::{AppError, ErrorDetail, ErrorResponse};
use crate::AppState;

/// Authenticated user information extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub full_name: String,
    pub role: Role,
}

/// Authentication middleware that validates session tokens.
///
/// On success the resolved [`AuthUser`] is inserted into the request
/// extensions for handlers and the route guard to read. A missing or
/// invalid token yields 401, which the client treats as "redirect to
/// login".
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return unauthorized_response("Missing or invalid Authorization header");
        }
    };

    let auth_user = match state.sessions.verify_token(token) {
        Ok(user) => user,
        Err(err) => return err.into_response(),
    };

    request.extensions_mut().insert(auth_user);

    next.run(request).await
}

/// Route guard: deny unless the caller's role may view `route`.
///
/// Runs after [`auth_middleware`]; a request that somehow arrives without
/// a resolved user is denied outright (fail closed). Denial is a plain
/// 403 response, never a panic or an internal error.
pub async fn require_view(route: Route, request: Request, next: Next) -> Response {
    let Some(user) = request.extensions().get::<AuthUser>() else {
        return unauthorized_response("Authentication required");
    };

    if !access::is_allowed(user.role, route) {
        return AppError::Forbidden(route.label().to_string()).into_response();
    }

    next.run(request).await
}

/// Handler-level guard for endpoints whose read and write visibility
/// rules differ (expenses).
pub fn ensure_view(user: &AuthUser, route: Route) -> Result<(), AppError> {
    if access::is_allowed(user.role, route) {
        Ok(())
    } else {
        Err(AppError::Forbidden(route.label().to_string()))
    }
}

/// Create unauthorized response
fn unauthorized_response(message: &str) -> Response {
    let error = ErrorResponse {
        error: ErrorDetail {
            code: "AUTHENTICATION_FAILED".to_string(),
            message: message.to_string(),
            field: None,
        },
    };

    (StatusCode::UNAUTHORIZED, Json(error)).into_response()
}

/// Extractor for authenticated user
/// Use this in handlers to get the current user
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                let error = ErrorResponse {
                    error: ErrorDetail {
                        code: "AUTHENTICATION_FAILED".to_string(),
                        message: "Authentication required".to_string(),
                        field: None,
                    },
                };
                (StatusCode::UNAUTHORIZED, Json(error))
            })
    }
}
