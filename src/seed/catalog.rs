use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::internal::{InternalError, SeedError};
use crate::seed::data::{AMENITIES, REGIONS, TRAILS};
use crate::seed::identity::SEED_ADMIN_EMAIL;
use crate::seed::{Seeder, StepReport};
use crate::types::db::{amenity, region, trail, trail_amenity};

impl Seeder {
    pub(super) async fn seed_regions(&self) -> Result<StepReport, InternalError> {
        let mut report = StepReport::default();

        for seed in REGIONS {
            if self.find_region(seed.slug).await?.is_some() {
                report.existing += 1;
                continue;
            }

            region::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                name: Set(seed.name.to_string()),
                slug: Set(seed.slug.to_string()),
                description: Set(Some(seed.description.to_string())),
                latitude: Set(Some(seed.latitude)),
                longitude: Set(Some(seed.longitude)),
                sort_order: Set(seed.sort_order),
                created_at: Set(Utc::now().timestamp()),
            }
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_region", e))?;

            report.created += 1;
        }

        Ok(report)
    }

    pub(super) async fn seed_amenities(&self) -> Result<StepReport, InternalError> {
        let mut report = StepReport::default();

        for (name, slug) in AMENITIES {
            if self.find_amenity(slug).await?.is_some() {
                report.existing += 1;
                continue;
            }

            amenity::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                name: Set(name.to_string()),
                slug: Set(slug.to_string()),
                created_at: Set(Utc::now().timestamp()),
            }
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_amenity", e))?;

            report.created += 1;
        }

        Ok(report)
    }

    pub(super) async fn seed_trails(&self) -> Result<StepReport, InternalError> {
        let mut report = StepReport::default();
        let created_by = self.user_store.find_by_email(SEED_ADMIN_EMAIL).await?.map(|u| u.id);

        for seed in TRAILS {
            if let Some(existing) = self.find_trail(seed.slug).await? {
                self.link_amenities(&existing.id, seed.slug, seed.amenity_slugs).await?;
                report.existing += 1;
                continue;
            }

            let Some(region) = self.find_region(seed.region_slug).await? else {
                tracing::warn!("Skipping trail {}: {}", seed.slug, SeedError::missing("region", seed.region_slug));
                report.skipped += 1;
                continue;
            };

            let now = Utc::now().timestamp();
            let trail = trail::ActiveModel {
                id: Set(Uuid::new_v4().to_string()),
                name: Set(seed.name.to_string()),
                slug: Set(seed.slug.to_string()),
                description: Set(Some(seed.description.to_string())),
                region_id: Set(Some(region.id)),
                status: Set(seed.status),
                difficulty: Set(seed.difficulty),
                length_km: Set(Some(seed.length_km)),
                elevation_gain_m: Set(Some(seed.elevation_gain_m)),
                featured_media_id: Set(None),
                created_by: Set(created_by.clone()),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_trail", e))?;

            self.link_amenities(&trail.id, seed.slug, seed.amenity_slugs).await?;
            report.created += 1;
        }

        Ok(report)
    }

    /// Attach amenities to a trail, skipping unknown slugs and existing links
    async fn link_amenities(&self, trail_id: &str, trail_slug: &str, amenity_slugs: &[&str]) -> Result<(), InternalError> {
        for slug in amenity_slugs {
            let Some(amenity) = self.find_amenity(slug).await? else {
                tracing::warn!("Trail {}: {}", trail_slug, SeedError::missing("amenity", *slug));
                continue;
            };

            let linked = trail_amenity::Entity::find_by_id((trail_id.to_string(), amenity.id.clone()))
                .one(&self.db)
                .await
                .map_err(|e| InternalError::database("find_trail_amenity", e))?
                .is_some();
            if linked {
                continue;
            }

            trail_amenity::ActiveModel {
                trail_id: Set(trail_id.to_string()),
                amenity_id: Set(amenity.id),
            }
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_trail_amenity", e))?;
        }

        Ok(())
    }

    async fn find_region(&self, slug: &str) -> Result<Option<region::Model>, InternalError> {
        region::Entity::find()
            .filter(region::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_region", e))
    }

    async fn find_amenity(&self, slug: &str) -> Result<Option<amenity::Model>, InternalError> {
        amenity::Entity::find()
            .filter(amenity::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_amenity", e))
    }

    pub(super) async fn find_trail(&self, slug: &str) -> Result<Option<trail::Model>, InternalError> {
        trail::Entity::find()
            .filter(trail::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_trail", e))
    }
}
