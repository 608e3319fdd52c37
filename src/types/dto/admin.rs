use poem_openapi::Object;

use crate::types::dto::common::UserSummary;
use crate::types::enums::{HikeStatus, TrailStatus};

/// The authenticated user with the role and permissions policies see
#[derive(Object, Debug)]
pub struct MeResponse {
    pub user: UserSummary,

    /// Permission strings of the user's role, in role order
    pub permissions: Vec<String>,
}

/// Response for logout
#[derive(Object, Debug)]
pub struct LogoutResponse {
    pub message: String,
}

/// Request to create a CMS user
#[derive(Object, Debug)]
pub struct RegisterRequest {
    #[oai(validator(min_length = 1, max_length = 255))]
    pub name: String,

    #[oai(validator(min_length = 3, max_length = 255))]
    pub email: String,

    #[oai(validator(min_length = 8, max_length = 128))]
    pub password: String,

    /// Slug of an existing role
    pub role: String,

    pub company_id: Option<String>,

    /// Only a super-admin may grant this
    pub is_super_admin: Option<bool>,
}

/// Response for register
#[derive(Object, Debug)]
pub struct RegisterResponse {
    pub user: UserSummary,
}

/// Active (not soft-deleted) users, newest first
#[derive(Object, Debug)]
pub struct UsersResponse {
    pub users: Vec<UserSummary>,
    pub total: u64,
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct TrailStatusCount {
    pub status: TrailStatus,
    pub count: u64,
}

#[derive(Object, Debug, Clone, PartialEq)]
pub struct HikeStatusCount {
    pub status: HikeStatus,
    pub count: u64,
}

/// One activity log line
#[derive(Object, Debug, Clone)]
pub struct ActivityEntry {
    pub id: i64,
    pub user_id: Option<String>,
    pub action: String,
    pub subject_type: Option<String>,
    pub subject_id: Option<String>,
    pub description: Option<String>,

    /// Unix timestamp
    pub created_at: i64,
}

/// Dashboard summary
#[derive(Object, Debug)]
pub struct DashboardResponse {
    /// One entry per trail status, zero counts included
    pub trails: Vec<TrailStatusCount>,

    /// One entry per hike status, zero counts included
    pub group_hikes: Vec<HikeStatusCount>,

    pub total_users: u64,

    /// Empty when the caller may not view activity logs
    pub recent_activity: Vec<ActivityEntry>,
}
