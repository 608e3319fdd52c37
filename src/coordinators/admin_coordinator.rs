use std::sync::Arc;

use crate::app_data::AppData;
use crate::authz::policies::{ActivityLogPolicy, RoleGatedPolicy, UserPolicy};
use crate::authz::Actor;
use crate::errors::internal::{CredentialError, InternalError};
use crate::stores::{ActivityLogStore, CredentialStore, DashboardStore, NewActivity, NewUser, RoleStore, UserStore};
use crate::types::dto::admin::{ActivityEntry, DashboardResponse, HikeStatusCount, TrailStatusCount};
use crate::types::dto::common::UserSummary;
use crate::types::internal::context::RequestContext;

const RECENT_ACTIVITY_LIMIT: u64 = 10;

/// Input for creating a CMS user
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_slug: String,
    pub company_id: Option<String>,
    pub is_super_admin: bool,
}

/// Orchestrates the admin endpoints: policy check first, then store calls
pub struct AdminCoordinator {
    credential_store: Arc<CredentialStore>,
    role_store: Arc<RoleStore>,
    user_store: Arc<UserStore>,
    activity_store: Arc<ActivityLogStore>,
    dashboard_store: Arc<DashboardStore>,
}

impl AdminCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            credential_store: app_data.credential_store.clone(),
            role_store: app_data.role_store.clone(),
            user_store: app_data.user_store.clone(),
            activity_store: app_data.activity_store.clone(),
            dashboard_store: app_data.dashboard_store.clone(),
        }
    }

    /// Create a user account
    ///
    /// Requires `UserPolicy::create`; granting super-admin additionally
    /// requires `UserPolicy::assign_super_admin`.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        actor: &Actor,
        request: RegisterUser,
    ) -> Result<UserSummary, InternalError> {
        UserPolicy::create(actor).authorize()?;
        if request.is_super_admin {
            UserPolicy::assign_super_admin(actor).authorize()?;
        }

        let role = self
            .role_store
            .find_by_slug(&request.role_slug)
            .await?
            .ok_or_else(|| CredentialError::RoleNotFound(request.role_slug.clone()))?;

        let user = self
            .credential_store
            .create_user(NewUser {
                name: request.name,
                email: request.email,
                password: request.password,
                role_id: role.id.clone(),
                company_id: request.company_id,
                is_super_admin: request.is_super_admin,
            })
            .await?;

        self.activity_store
            .record_or_warn(
                NewActivity::new("user.registered")
                    .by(actor.id.clone())
                    .on("user", user.id.clone())
                    .described(format!("Registered {} as {}", user.email, role.slug))
                    .from_ip(ctx.ip_address.clone()),
            )
            .await;

        tracing::info!(user_id = %user.id, by = %actor.id, "User registered");

        Ok(UserSummary::from_models(&user, Some(&role)))
    }

    /// Active users, newest first. Requires `UserPolicy::view_any`.
    pub async fn list_users(&self, actor: &Actor) -> Result<Vec<UserSummary>, InternalError> {
        UserPolicy::view_any(actor).authorize()?;

        let users = self.user_store.list_active().await?;
        Ok(users
            .iter()
            .map(|u| UserSummary::from_models(&u.user, u.role.as_ref()))
            .collect())
    }

    /// Counts for the dashboard; activity only when the actor may see it
    pub async fn dashboard(&self, actor: &Actor) -> Result<DashboardResponse, InternalError> {
        let trails = self
            .dashboard_store
            .trail_counts()
            .await?
            .into_iter()
            .map(|(status, count)| TrailStatusCount { status, count })
            .collect();

        let group_hikes = self
            .dashboard_store
            .hike_counts()
            .await?
            .into_iter()
            .map(|(status, count)| HikeStatusCount { status, count })
            .collect();

        let total_users = self.user_store.count_active().await?;

        let recent_activity = if ActivityLogPolicy::view_any(actor).allowed() {
            self.activity_store
                .recent(RECENT_ACTIVITY_LIMIT)
                .await?
                .into_iter()
                .map(|entry| ActivityEntry {
                    id: entry.id,
                    user_id: entry.user_id,
                    action: entry.action,
                    subject_type: entry.subject_type,
                    subject_id: entry.subject_id,
                    description: entry.description,
                    created_at: entry.created_at,
                })
                .collect()
        } else {
            Vec::new()
        };

        Ok(DashboardResponse {
            trails,
            group_hikes,
            total_users,
            recent_activity,
        })
    }
}
