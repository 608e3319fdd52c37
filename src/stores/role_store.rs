use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::db::role::{self, Entity as Role};

/// Data access for roles and their permission lists
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<role::Model>, InternalError> {
        Role::find()
            .filter(role::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_role_by_slug", e))
    }

    /// Insert a role, or replace name/permissions of the one with this slug
    pub async fn upsert_role(
        &self,
        name: &str,
        slug: &str,
        permissions: &[&str],
        is_system: bool,
    ) -> Result<role::Model, InternalError> {
        let permissions_json = serde_json::to_string(permissions)
            .map_err(|e| InternalError::parse("role permissions", e.to_string()))?;
        let now = Utc::now().timestamp();

        match self.find_by_slug(slug).await? {
            Some(existing) => {
                let mut active: role::ActiveModel = existing.into();
                active.name = Set(name.to_string());
                active.permissions = Set(permissions_json);
                active.is_system = Set(is_system);
                active.updated_at = Set(now);
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| InternalError::database("update_role", e))
            }
            None => role::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                name: Set(name.to_string()),
                slug: Set(slug.to_string()),
                permissions: Set(permissions_json),
                is_system: Set(is_system),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_role", e)),
        }
    }
}
