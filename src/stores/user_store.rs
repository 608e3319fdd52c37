use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::authz::Actor;
use crate::errors::internal::{CredentialError, InternalError};
use crate::types::db::role;
use crate::types::db::user::{self, Entity as User};

/// A user row with its role, as loaded for request handling
#[derive(Debug, Clone)]
pub struct UserWithRole {
    pub user: user::Model,
    pub role: Option<role::Model>,
}

impl UserWithRole {
    pub fn actor(&self) -> Result<Actor, InternalError> {
        Actor::from_user(&self.user, self.role.as_ref())
    }
}

/// Read access to user accounts
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Load an active user with its role
    ///
    /// Soft-deleted and unknown users both yield `CredentialError::UserNotFound`.
    pub async fn get_active_with_role(&self, user_id: &str) -> Result<UserWithRole, InternalError> {
        let (user, role) = User::find_by_id(user_id.to_string())
            .filter(user::Column::DeletedAt.is_null())
            .find_also_related(role::Entity)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_user_with_role", e))?
            .ok_or_else(|| CredentialError::UserNotFound(user_id.to_string()))?;

        Ok(UserWithRole { user, role })
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, InternalError> {
        User::find()
            .filter(user::Column::Email.eq(email.trim().to_lowercase()))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_email", e))
    }

    /// Active users with their roles, newest first
    pub async fn list_active(&self) -> Result<Vec<UserWithRole>, InternalError> {
        let rows = User::find()
            .filter(user::Column::DeletedAt.is_null())
            .find_also_related(role::Entity)
            .order_by_desc(user::Column::CreatedAt)
            .order_by_asc(user::Column::Email)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_users", e))?;

        Ok(rows
            .into_iter()
            .map(|(user, role)| UserWithRole { user, role })
            .collect())
    }

    pub async fn count_active(&self) -> Result<u64, InternalError> {
        User::find()
            .filter(user::Column::DeletedAt.is_null())
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_users", e))
    }
}
