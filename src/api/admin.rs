use std::sync::Arc;

use poem::Request;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::api::{request_context, BearerAuth};
use crate::app_data::AppData;
use crate::coordinators::{AdminCoordinator, AuthCoordinator, AuthenticatedSession, RegisterUser};
use crate::errors::AdminError;
use crate::types::dto::admin::{
    DashboardResponse, LogoutResponse, MeResponse, RegisterRequest, RegisterResponse, UsersResponse,
};
use crate::types::dto::common::UserSummary;

/// API tags for admin endpoints
#[derive(Tags)]
enum AdminTags {
    /// Authenticated CMS endpoints
    Admin,
}

/// Authenticated CMS endpoints
pub struct AdminApi {
    auth_coordinator: Arc<AuthCoordinator>,
    admin_coordinator: Arc<AdminCoordinator>,
}

impl AdminApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            auth_coordinator: Arc::new(AuthCoordinator::new(app_data.clone())),
            admin_coordinator: Arc::new(AdminCoordinator::new(app_data)),
        }
    }

    async fn session(&self, auth: &BearerAuth) -> Result<AuthenticatedSession, AdminError> {
        Ok(self.auth_coordinator.authenticate(&auth.0.token).await?)
    }
}

#[OpenApi(prefix_path = "/admin")]
impl AdminApi {
    /// The authenticated user with role and permissions
    #[oai(path = "/me", method = "get", tag = "AdminTags::Admin")]
    async fn me(&self, auth: BearerAuth) -> Result<Json<MeResponse>, AdminError> {
        let session = self.session(&auth).await?;

        Ok(Json(MeResponse {
            user: UserSummary::from_models(&session.user.user, session.user.role.as_ref()),
            permissions: session.actor.permissions().to_vec(),
        }))
    }

    /// Revoke the session behind the presented token
    #[oai(path = "/logout", method = "post", tag = "AdminTags::Admin")]
    async fn logout(&self, req: &Request, auth: BearerAuth) -> Result<Json<LogoutResponse>, AdminError> {
        let session = self.session(&auth).await?;
        self.auth_coordinator.logout(&request_context(req), &session).await?;

        Ok(Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }))
    }

    /// Create a user (requires `users.create`)
    #[oai(path = "/register", method = "post", tag = "AdminTags::Admin")]
    async fn register(
        &self,
        req: &Request,
        auth: BearerAuth,
        body: Json<RegisterRequest>,
    ) -> Result<Json<RegisterResponse>, AdminError> {
        let session = self.session(&auth).await?;
        let body = body.0;

        let user = self
            .admin_coordinator
            .register(
                &request_context(req),
                &session.actor,
                RegisterUser {
                    name: body.name,
                    email: body.email,
                    password: body.password,
                    role_slug: body.role,
                    company_id: body.company_id,
                    is_super_admin: body.is_super_admin.unwrap_or(false),
                },
            )
            .await?;

        Ok(Json(RegisterResponse { user }))
    }

    /// List active users (requires `users.view`)
    #[oai(path = "/users", method = "get", tag = "AdminTags::Admin")]
    async fn users(&self, auth: BearerAuth) -> Result<Json<UsersResponse>, AdminError> {
        let session = self.session(&auth).await?;
        let users = self.admin_coordinator.list_users(&session.actor).await?;

        Ok(Json(UsersResponse {
            total: users.len() as u64,
            users,
        }))
    }

    /// Content and activity overview
    #[oai(path = "/dashboard", method = "get", tag = "AdminTags::Admin")]
    async fn dashboard(&self, auth: BearerAuth) -> Result<Json<DashboardResponse>, AdminError> {
        let session = self.session(&auth).await?;
        Ok(Json(self.admin_coordinator.dashboard(&session.actor).await?))
    }
}
