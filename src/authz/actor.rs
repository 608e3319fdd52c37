use crate::authz::permissions::PermissionSet;
use crate::errors::InternalError;
use crate::types::db::{role, user};

/// The authenticated user as seen by policies
///
/// Holds only what authorization needs: identity, company affiliation,
/// the super-admin flag and the role's resolved permissions.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: String,
    pub company_id: Option<String>,
    pub is_super_admin: bool,
    pub role_slug: Option<String>,
    permissions: PermissionSet,
}

impl Actor {
    pub fn new(
        id: impl Into<String>,
        company_id: Option<String>,
        is_super_admin: bool,
        permissions: PermissionSet,
    ) -> Self {
        Self {
            id: id.into(),
            company_id,
            is_super_admin,
            role_slug: None,
            permissions,
        }
    }

    /// Build an actor from a user row and its role row
    ///
    /// A missing role yields an actor with no permissions.
    pub fn from_user(user: &user::Model, role: Option<&role::Model>) -> Result<Self, InternalError> {
        let (permissions, role_slug) = match role {
            Some(role) => {
                let strings = role
                    .permission_strings()
                    .map_err(|e| InternalError::parse("role permissions", e.to_string()))?;
                (PermissionSet::new(strings), Some(role.slug.clone()))
            }
            None => (PermissionSet::default(), None),
        };

        Ok(Self {
            id: user.id.clone(),
            company_id: user.company_id.clone(),
            is_super_admin: user.is_super_admin,
            role_slug,
            permissions,
        })
    }

    /// Super-admins hold every permission
    pub fn has_permission(&self, permission: &str) -> bool {
        self.is_super_admin || self.permissions.has_permission(permission)
    }

    pub fn has_any_permission(&self, permissions: &[&str]) -> bool {
        self.is_super_admin || self.permissions.has_any_permission(permissions)
    }

    /// True when both sides have a company and it is the same one
    pub fn shares_company(&self, company_id: Option<&str>) -> bool {
        match (self.company_id.as_deref(), company_id) {
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => false,
        }
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }
}
