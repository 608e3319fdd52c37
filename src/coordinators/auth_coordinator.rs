use std::sync::Arc;

use crate::app_data::AppData;
use crate::authz::Actor;
use crate::errors::internal::{CredentialError, InternalError};
use crate::services::TokenService;
use crate::stores::{ActivityLogStore, CredentialStore, NewActivity, UserStore, UserWithRole};
use crate::types::internal::auth::{Claims, IssuedToken};
use crate::types::internal::context::RequestContext;

/// Result of a successful login
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: IssuedToken,
    pub user: UserWithRole,
}

/// A request that presented a valid token backed by a live session
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub claims: Claims,
    pub token_hash: String,
    pub user: UserWithRole,
    pub actor: Actor,
}

/// Orchestrates login, bearer authentication and logout
pub struct AuthCoordinator {
    credential_store: Arc<CredentialStore>,
    user_store: Arc<UserStore>,
    activity_store: Arc<ActivityLogStore>,
    token_service: Arc<TokenService>,
}

impl AuthCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            credential_store: app_data.credential_store.clone(),
            user_store: app_data.user_store.clone(),
            activity_store: app_data.activity_store.clone(),
            token_service: app_data.token_service.clone(),
        }
    }

    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_service.access_token_ttl_seconds()
    }

    /// Login workflow
    ///
    /// 1. Verify email and password
    /// 2. Issue a JWT
    /// 3. Store the session fingerprint of its `jti`
    /// 4. Record the login in the activity log
    pub async fn login(
        &self,
        ctx: &RequestContext,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, InternalError> {
        let user = self.credential_store.verify_credentials(email, password).await?;
        let user = self.user_store.get_active_with_role(&user.id).await?;

        let token = self.token_service.generate_jwt(&user.user.id)?;
        let token_hash = self.token_service.session_fingerprint(&token.jti)?;
        self.credential_store
            .create_session(token_hash, user.user.id.clone(), token.expires_at)
            .await?;

        // Opportunistic cleanup, a failure here does not affect the login
        if let Err(e) = self.credential_store.purge_expired_sessions().await {
            tracing::warn!("Failed to purge expired sessions: {}", e);
        }

        self.activity_store
            .record_or_warn(
                NewActivity::new("auth.login")
                    .by(user.user.id.clone())
                    .on("user", user.user.id.clone())
                    .described(format!("{} logged in", user.user.email))
                    .from_ip(ctx.ip_address.clone()),
            )
            .await;

        tracing::info!(user_id = %user.user.id, request_id = %ctx.request_id, "User logged in");

        Ok(LoginOutcome { token, user })
    }

    /// Resolve a bearer token into the acting user
    ///
    /// The JWT must verify, its session row must still exist and be unexpired,
    /// and the user must not be soft-deleted.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedSession, InternalError> {
        let claims = self.token_service.validate_jwt(token)?;
        let token_hash = self.token_service.session_fingerprint(&claims.jti)?;

        let session = self.credential_store.find_active_session(&token_hash).await?;
        // A deleted account behaves like a revoked session
        let user = self
            .user_store
            .get_active_with_role(&session.user_id)
            .await
            .map_err(|e| match e {
                InternalError::Credential(CredentialError::UserNotFound(_)) => {
                    CredentialError::SessionRevoked.into()
                }
                other => other,
            })?;
        let actor = user.actor()?;

        Ok(AuthenticatedSession {
            claims,
            token_hash,
            user,
            actor,
        })
    }

    /// Revoke the session backing the current token
    pub async fn logout(&self, ctx: &RequestContext, session: &AuthenticatedSession) -> Result<(), InternalError> {
        let removed = self.credential_store.delete_session(&session.token_hash).await?;
        if !removed {
            tracing::debug!(user_id = %session.actor.id, "Session already gone at logout");
        }

        self.activity_store
            .record_or_warn(
                NewActivity::new("auth.logout")
                    .by(session.actor.id.clone())
                    .on("user", session.actor.id.clone())
                    .from_ip(ctx.ip_address.clone()),
            )
            .await;

        tracing::info!(user_id = %session.actor.id, request_id = %ctx.request_id, "User logged out");

        Ok(())
    }
}
