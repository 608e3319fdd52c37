use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, QuerySelect, Set};

use crate::errors::InternalError;
use crate::types::db::activity_log::{self, Entity as ActivityLog};

/// One entry to append to the activity log
#[derive(Debug, Clone, Default)]
pub struct NewActivity {
    pub user_id: Option<String>,
    pub action: String,
    pub subject_type: Option<String>,
    pub subject_id: Option<String>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
}

impl NewActivity {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Default::default()
        }
    }

    pub fn by(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn on(mut self, subject_type: impl Into<String>, subject_id: impl Into<String>) -> Self {
        self.subject_type = Some(subject_type.into());
        self.subject_id = Some(subject_id.into());
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn from_ip(mut self, ip_address: Option<String>) -> Self {
        self.ip_address = ip_address;
        self
    }
}

/// Append-only activity log
pub struct ActivityLogStore {
    db: DatabaseConnection,
}

impl ActivityLogStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record(&self, entry: NewActivity) -> Result<i64, InternalError> {
        let model = activity_log::ActiveModel {
            id: NotSet,
            user_id: Set(entry.user_id),
            action: Set(entry.action),
            subject_type: Set(entry.subject_type),
            subject_id: Set(entry.subject_id),
            description: Set(entry.description),
            ip_address: Set(entry.ip_address),
            created_at: Set(Utc::now().timestamp()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| InternalError::database("insert_activity", e))?;

        Ok(model.id)
    }

    /// Record an entry, downgrading any failure to a warning
    pub async fn record_or_warn(&self, entry: NewActivity) {
        let action = entry.action.clone();
        if let Err(e) = self.record(entry).await {
            tracing::warn!(action = %action, "Failed to record activity: {}", e);
        }
    }

    /// Most recent entries first
    pub async fn recent(&self, limit: u64) -> Result<Vec<activity_log::Model>, InternalError> {
        ActivityLog::find()
            .order_by_desc(activity_log::Column::CreatedAt)
            .order_by_desc(activity_log::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("recent_activity", e))
    }
}
