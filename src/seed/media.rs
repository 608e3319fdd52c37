use std::path::Path;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::internal::{InternalError, SeedError};
use crate::seed::data::{ImageSeed, TRAIL_IMAGES};
use crate::seed::fetcher::{fetch_with_retry, FetchedImage};
use crate::seed::identity::SEED_ADMIN_EMAIL;
use crate::seed::{Seeder, StepReport, DOWNLOAD_RETRIES};
use crate::types::db::{media, trail, trail_image};
use crate::types::enums::TrailImageType;

/// Subdirectory of the media root holding trail images
const TRAIL_MEDIA_DIR: &str = "trails";

impl Seeder {
    /// Download trail images, store them under the media root and attach them
    ///
    /// Downloads are sequential with a fixed pause between them. A download
    /// that still fails after retries is skipped.
    pub(super) async fn seed_media(&self) -> Result<StepReport, InternalError> {
        let mut report = StepReport::default();
        let uploaded_by = self.user_store.find_by_email(SEED_ADMIN_EMAIL).await?.map(|u| u.id);
        let mut downloads = 0usize;

        for entry in TRAIL_IMAGES {
            let Some(trail) = self.find_trail(entry.trail_slug).await? else {
                tracing::warn!(
                    "Skipping images for {}: {}",
                    entry.trail_slug,
                    SeedError::missing("trail", entry.trail_slug)
                );
                report.skipped += entry.images.len();
                continue;
            };

            for (index, image) in entry.images.iter().enumerate() {
                let sort_order = index as i32;
                if self.has_trail_image(&trail.id, sort_order).await? {
                    report.existing += 1;
                    continue;
                }

                if downloads > 0 && !self.download_delay.is_zero() {
                    tokio::time::sleep(self.download_delay).await;
                }
                downloads += 1;

                let fetched = match fetch_with_retry(
                    self.fetcher.as_ref(),
                    image.url,
                    DOWNLOAD_RETRIES,
                    self.retry_backoff,
                )
                .await
                {
                    Ok(fetched) => fetched,
                    Err(e) => {
                        tracing::warn!("Skipping image for {}: {}", entry.trail_slug, e);
                        report.skipped += 1;
                        continue;
                    }
                };

                let file_name = format!(
                    "{}-{}.{}",
                    entry.trail_slug,
                    index + 1,
                    extension_for(&fetched.mime_type)
                );
                let relative_path = format!("{}/{}", TRAIL_MEDIA_DIR, file_name);

                if let Err(e) = write_media_file(&self.media_dir, &relative_path, &fetched).await {
                    tracing::warn!("Skipping image for {}: {}", entry.trail_slug, e);
                    report.skipped += 1;
                    continue;
                }

                self.attach_image(&trail, image, sort_order, file_name, relative_path, &fetched, uploaded_by.clone())
                    .await?;
                report.created += 1;
            }
        }

        Ok(report)
    }

    async fn has_trail_image(&self, trail_id: &str, sort_order: i32) -> Result<bool, InternalError> {
        let found = trail_image::Entity::find()
            .filter(trail_image::Column::TrailId.eq(trail_id))
            .filter(trail_image::Column::SortOrder.eq(sort_order))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_trail_image", e))?;

        Ok(found.is_some())
    }

    #[allow(clippy::too_many_arguments)]
    async fn attach_image(
        &self,
        trail: &trail::Model,
        image: &ImageSeed,
        sort_order: i32,
        file_name: String,
        path: String,
        fetched: &FetchedImage,
        uploaded_by: Option<String>,
    ) -> Result<(), InternalError> {
        let now = Utc::now().timestamp();

        let media = media::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            file_name: Set(file_name),
            path: Set(path),
            mime_type: Set(fetched.mime_type.clone()),
            size_bytes: Set(fetched.bytes.len() as i64),
            uploaded_by: Set(uploaded_by),
            created_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| InternalError::database("insert_media", e))?;

        trail_image::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            trail_id: Set(trail.id.clone()),
            media_id: Set(media.id.clone()),
            image_type: Set(image.image_type),
            caption: Set(Some(image.caption.to_string())),
            sort_order: Set(sort_order),
            created_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| InternalError::database("insert_trail_image", e))?;

        if image.image_type == TrailImageType::Featured {
            let mut active: trail::ActiveModel = trail.clone().into();
            active.featured_media_id = Set(Some(media.id));
            active.updated_at = Set(now);
            active
                .update(&self.db)
                .await
                .map_err(|e| InternalError::database("set_featured_media", e))?;
        }

        Ok(())
    }
}

async fn write_media_file(media_root: &Path, relative_path: &str, image: &FetchedImage) -> Result<(), SeedError> {
    let full_path = media_root.join(relative_path);
    let storage_error = |source| SeedError::Storage {
        path: full_path.display().to_string(),
        source,
    };

    if let Some(parent) = full_path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(storage_error)?;
    }
    tokio::fs::write(&full_path, &image.bytes).await.map_err(storage_error)?;

    Ok(())
}

fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "jpg",
    }
}
