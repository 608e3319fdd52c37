use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use sea_orm::Iterable;

use crate::errors::InternalError;
use crate::types::db::{group_hike, trail};
use crate::types::enums::{HikeStatus, TrailStatus};

/// Aggregate counts for the admin dashboard
pub struct DashboardStore {
    db: DatabaseConnection,
}

impl DashboardStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Trail count per status, every status present
    pub async fn trail_counts(&self) -> Result<Vec<(TrailStatus, u64)>, InternalError> {
        let mut counts = Vec::new();
        for status in TrailStatus::iter() {
            let count = trail::Entity::find()
                .filter(trail::Column::Status.eq(status))
                .count(&self.db)
                .await
                .map_err(|e| InternalError::database("count_trails", e))?;
            counts.push((status, count));
        }
        Ok(counts)
    }

    /// Group hike count per status, every status present
    pub async fn hike_counts(&self) -> Result<Vec<(HikeStatus, u64)>, InternalError> {
        let mut counts = Vec::new();
        for status in HikeStatus::iter() {
            let count = group_hike::Entity::find()
                .filter(group_hike::Column::Status.eq(status))
                .count(&self.db)
                .await
                .map_err(|e| InternalError::database("count_group_hikes", e))?;
            counts.push((status, count));
        }
        Ok(counts)
    }
}
