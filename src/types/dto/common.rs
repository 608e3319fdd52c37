use poem_openapi::Object;

use crate::types::db::{role, user};

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,

    /// `ok` or `unavailable`
    pub database: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Compact view of a user, shared by login and admin responses
#[derive(Object, Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,

    /// Slug of the user's role, when it still exists
    pub role: Option<String>,

    pub company_id: Option<String>,
    pub is_super_admin: bool,

    /// Unix timestamp
    pub created_at: i64,
}

impl UserSummary {
    pub fn from_models(user: &user::Model, role: Option<&role::Model>) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: role.map(|r| r.slug.clone()),
            company_id: user.company_id.clone(),
            is_super_admin: user.is_super_admin,
            created_at: user.created_at,
        }
    }
}
