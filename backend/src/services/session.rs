//! Session and identity service
//!
//! Identity resolution is delegated to an [`IdentityBackend`], the seam
//! where a real identity provider plugs in. The shipped implementation is
//! a mock resolving a fixed set of demo users. Session state is owned by
//! the [`SessionService`] and mutated only by `sign_in`/`sign_out`;
//! interested parties observe changes through a watch channel rather
//! than a callback registry, so dropping the receiver is the
//! unsubscribe.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

use shared::models::{Role, User};

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;

/// External identity provider seam.
///
/// A real backend resolves credentials against an account directory and
/// fails with `AuthenticationFailed` on a bad credential; callers must
/// not assume success.
pub trait IdentityBackend: Send + Sync {
    /// Resolve credentials to a user profile.
    fn authenticate(&self, email: &str, password: &str) -> AppResult<User>;

    /// Look up a profile by user id.
    fn profile(&self, user_id: Uuid) -> AppResult<User>;
}

/// Demo identity backend with a fixed user directory.
pub struct MockIdentityBackend {
    users: Vec<User>,
}

impl MockIdentityBackend {
    /// The three demo accounts, one per role.
    pub fn with_demo_users() -> Self {
        let now = Utc::now();
        let demo = |email: &str, full_name: &str, role: Role| User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            role,
            created_at: now,
            updated_at: now,
        };

        Self {
            users: vec![
                demo("admin@abiwaumi.com", "Admin User", Role::Admin),
                demo("staff@abiwaumi.com", "Staff Member", Role::Staff),
                demo("viewer@abiwaumi.com", "Viewer User", Role::Viewer),
            ],
        }
    }

    fn admin(&self) -> &User {
        &self.users[0]
    }
}

impl IdentityBackend for MockIdentityBackend {
    // Demo mode - accepts any password. Unknown emails resolve to the
    // admin profile, matching the dashboard's demo behavior.
    fn authenticate(&self, email: &str, _password: &str) -> AppResult<User> {
        Ok(self
            .users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .unwrap_or_else(|| self.admin())
            .clone())
    }

    fn profile(&self, user_id: Uuid) -> AppResult<User> {
        Ok(self
            .users
            .iter()
            .find(|user| user.id == user_id)
            .unwrap_or_else(|| self.admin())
            .clone())
    }
}

/// Session token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub name: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Issued session token
#[derive(Debug, Serialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Session service: sign-in/out, the process-wide current user, and
/// token verification for the auth middleware.
#[derive(Clone)]
pub struct SessionService {
    identity: Arc<dyn IdentityBackend>,
    token_secret: String,
    token_expiry: i64,
    current: Arc<watch::Sender<Option<User>>>,
}

impl SessionService {
    /// Create a new SessionService instance
    pub fn new(token_secret: &str, token_expiry: i64, identity: Arc<dyn IdentityBackend>) -> Self {
        let (current, _) = watch::channel(None);

        Self {
            identity,
            token_secret: token_secret.to_string(),
            token_expiry,
            current: Arc::new(current),
        }
    }

    /// Sign in with email and password. Returns the resolved profile and
    /// a session token, and notifies session-change subscribers.
    pub fn sign_in(&self, email: &str, password: &str) -> AppResult<(User, SessionTokens)> {
        if !validator::validate_email(email) {
            return Err(AppError::validation("email", "is not a valid email address"));
        }

        let user = self.identity.authenticate(email, password)?;
        let tokens = self.issue_tokens(&user)?;

        self.current.send_replace(Some(user.clone()));
        tracing::info!("signed in {} as {}", user.email, user.role);

        Ok((user, tokens))
    }

    /// Sign out. Idempotent: signing out with no session is a no-op that
    /// still leaves subscribers looking at `None`.
    pub fn sign_out(&self) {
        self.current.send_replace(None);
    }

    /// The process-wide current user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    /// Subscribe to session changes. The receiver sees every sign-in and
    /// sign-out; dropping it tears the subscription down.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }

    /// Profile lookup, delegated to the identity backend.
    pub fn profile(&self, user_id: Uuid) -> AppResult<User> {
        self.identity.profile(user_id)
    }

    /// Validate a session token and return the authenticated user info.
    pub fn verify_token(&self, token: &str) -> AppResult<AuthUser> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.token_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|err| AppError::AuthenticationFailed(format!("Invalid token: {err}")))?;

        let claims = data.claims;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthenticationFailed("Invalid user id in token".to_string()))?;
        let role = claims
            .role
            .parse::<Role>()
            .map_err(|_| AppError::AuthenticationFailed("Invalid role in token".to_string()))?;

        Ok(AuthUser {
            user_id,
            full_name: claims.name,
            role,
        })
    }

    fn issue_tokens(&self, user: &User) -> AppResult<SessionTokens> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.token_expiry);

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.full_name.clone(),
            role: user.role.as_str().to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let access_token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.token_secret.as_bytes()),
        )
        .map_err(|err| AppError::Internal(anyhow::anyhow!("Token generation failed: {err}")))?;

        Ok(SessionTokens {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_expiry,
        })
    }
}
