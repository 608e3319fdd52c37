use std::sync::Arc;

use poem::Request;
use poem_openapi::{auth::Bearer, payload::Json, OpenApi, SecurityScheme, Tags};

use crate::api::request_context;
use crate::app_data::AppData;
use crate::coordinators::AuthCoordinator;
use crate::errors::AuthError;
use crate::types::dto::auth::{LoginRequest, LoginResponse};
use crate::types::dto::common::UserSummary;

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", key_name = "Authorization", key_in = "header", bearer_format = "JWT")]
pub struct BearerAuth(pub Bearer);

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

/// Unauthenticated login endpoint
pub struct AuthApi {
    auth_coordinator: Arc<AuthCoordinator>,
}

impl AuthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            auth_coordinator: Arc::new(AuthCoordinator::new(app_data)),
        }
    }
}

#[OpenApi]
impl AuthApi {
    /// Exchange email and password for an access token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, req: &Request, body: Json<LoginRequest>) -> Result<Json<LoginResponse>, AuthError> {
        let ctx = request_context(req);

        let outcome = self
            .auth_coordinator
            .login(&ctx, &body.email, &body.password)
            .await?;

        Ok(Json(LoginResponse {
            access_token: outcome.token.token,
            token_type: "Bearer".to_string(),
            expires_in: self.auth_coordinator.token_ttl_seconds(),
            user: UserSummary::from_models(&outcome.user.user, outcome.user.role.as_ref()),
        }))
    }
}
