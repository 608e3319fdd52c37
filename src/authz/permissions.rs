//! Permission strings and wildcard matching.
//!
//! Permissions are dot-namespaced capability tokens such as `trails.create`.
//! A role may also hold `*` (everything) or `ns.*` (every action in the
//! `ns` namespace).

/// Grants every permission
pub const WILDCARD: &str = "*";

// Users
pub const USERS_VIEW: &str = "users.view";
pub const USERS_CREATE: &str = "users.create";
pub const USERS_UPDATE: &str = "users.update";
pub const USERS_DELETE: &str = "users.delete";
pub const USERS_RESTORE: &str = "users.restore";
pub const USERS_FORCE_DELETE: &str = "users.force_delete";
pub const USERS_MANAGE_ROLES: &str = "users.manage_roles";

// Companies
pub const COMPANIES_VIEW: &str = "companies.view";
pub const COMPANIES_CREATE: &str = "companies.create";
pub const COMPANIES_UPDATE: &str = "companies.update";
pub const COMPANIES_DELETE: &str = "companies.delete";

// Group hikes. The `_all` variants ignore ownership.
pub const GROUP_HIKES_VIEW: &str = "group_hikes.view";
pub const GROUP_HIKES_VIEW_ALL: &str = "group_hikes.view_all";
pub const GROUP_HIKES_CREATE: &str = "group_hikes.create";
pub const GROUP_HIKES_UPDATE: &str = "group_hikes.update";
pub const GROUP_HIKES_UPDATE_ALL: &str = "group_hikes.update_all";
pub const GROUP_HIKES_DELETE: &str = "group_hikes.delete";
pub const GROUP_HIKES_DELETE_ALL: &str = "group_hikes.delete_all";

// Trails
pub const TRAILS_VIEW: &str = "trails.view";
pub const TRAILS_CREATE: &str = "trails.create";
pub const TRAILS_UPDATE: &str = "trails.update";
pub const TRAILS_DELETE: &str = "trails.delete";
pub const TRAILS_UPDATE_STATUS: &str = "trails.update_status";

// Amenities
pub const AMENITIES_VIEW: &str = "amenities.view";
pub const AMENITIES_CREATE: &str = "amenities.create";
pub const AMENITIES_UPDATE: &str = "amenities.update";
pub const AMENITIES_DELETE: &str = "amenities.delete";

// Media
pub const MEDIA_VIEW: &str = "media.view";
pub const MEDIA_CREATE: &str = "media.create";
pub const MEDIA_UPDATE: &str = "media.update";
pub const MEDIA_DELETE: &str = "media.delete";

// Activity log
pub const ACTIVITY_LOGS_VIEW: &str = "activity_logs.view";
pub const ACTIVITY_LOGS_CREATE: &str = "activity_logs.create";
pub const ACTIVITY_LOGS_UPDATE: &str = "activity_logs.update";
pub const ACTIVITY_LOGS_DELETE: &str = "activity_logs.delete";

/// Check whether a single granted permission covers the required one
///
/// - `*` covers anything
/// - `ns.*` covers `ns.<anything>` but not `ns` itself or `nsx.action`
/// - anything else must match exactly
pub fn permission_matches(granted: &str, required: &str) -> bool {
    if granted == WILDCARD {
        return true;
    }

    if let Some(namespace) = granted.strip_suffix(".*") {
        return required
            .strip_prefix(namespace)
            .is_some_and(|rest| rest.len() > 1 && rest.starts_with('.'));
    }

    granted == required
}

/// Ordered, de-duplicated set of permission strings held by a role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    permissions: Vec<String>,
}

impl PermissionSet {
    pub fn new<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for permission in permissions {
            set.insert(permission);
        }
        set
    }

    /// Add a permission, keeping first-seen order
    pub fn insert(&mut self, permission: impl Into<String>) {
        let permission = permission.into();
        let permission = permission.trim();
        if permission.is_empty() || self.permissions.iter().any(|p| p == permission) {
            return;
        }
        self.permissions.push(permission.to_string());
    }

    pub fn has_permission(&self, required: &str) -> bool {
        self.permissions
            .iter()
            .any(|granted| permission_matches(granted, required))
    }

    pub fn has_any_permission(&self, required: &[&str]) -> bool {
        required.iter().any(|p| self.has_permission(p))
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.permissions.clone()
    }
}
