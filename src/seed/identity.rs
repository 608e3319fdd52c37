use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::internal::{InternalError, SeedError};
use crate::seed::data::{ROLES, SUPER_ADMIN_ROLE};
use crate::seed::{SeededCredential, Seeder, StepReport};
use crate::services::crypto::generate_secure_password;
use crate::stores::NewUser;
use crate::types::db::company;

pub const SEED_COMPANY_SLUG: &str = "trailhub-guides";
pub const SEED_ADMIN_EMAIL: &str = "admin@trailhub.local";

struct UserSeed {
    name: &'static str,
    email: &'static str,
    role_slug: &'static str,
    in_company: bool,
    is_super_admin: bool,
}

const USERS: &[UserSeed] = &[
    UserSeed {
        name: "Trailhub Admin",
        email: SEED_ADMIN_EMAIL,
        role_slug: SUPER_ADMIN_ROLE,
        in_company: false,
        is_super_admin: true,
    },
    UserSeed {
        name: "Content Editor",
        email: "editor@trailhub.local",
        role_slug: "editor",
        in_company: false,
        is_super_admin: false,
    },
    UserSeed {
        name: "Guide Organizer",
        email: "organizer@trailhub.local",
        role_slug: "organizer",
        in_company: true,
        is_super_admin: false,
    },
];

impl Seeder {
    pub(super) async fn seed_roles(&self) -> Result<StepReport, InternalError> {
        let mut report = StepReport::default();

        for seed in ROLES {
            let existed = self.role_store.find_by_slug(seed.slug).await?.is_some();
            self.role_store
                .upsert_role(seed.name, seed.slug, seed.permissions, true)
                .await?;

            if existed {
                report.existing += 1;
            } else {
                report.created += 1;
            }
        }

        Ok(report)
    }

    pub(super) async fn seed_users(&self) -> Result<StepReport, InternalError> {
        let mut report = StepReport::default();
        let company_id = self.ensure_company().await?;

        for seed in USERS {
            if self.user_store.find_by_email(seed.email).await?.is_some() {
                report.existing += 1;
                continue;
            }

            let Some(role) = self.role_store.find_by_slug(seed.role_slug).await? else {
                tracing::warn!("Skipping user {}: {}", seed.email, SeedError::missing("role", seed.role_slug));
                report.skipped += 1;
                continue;
            };

            let password = generate_secure_password();
            self.credential_store
                .create_user(NewUser {
                    name: seed.name.to_string(),
                    email: seed.email.to_string(),
                    password: password.clone(),
                    role_id: role.id,
                    company_id: seed.in_company.then(|| company_id.clone()),
                    is_super_admin: seed.is_super_admin,
                })
                .await?;

            report.created += 1;
            report.credentials.push(SeededCredential {
                email: seed.email.to_string(),
                password,
                role: seed.role_slug.to_string(),
            });
        }

        Ok(report)
    }

    async fn ensure_company(&self) -> Result<String, InternalError> {
        let existing = company::Entity::find()
            .filter(company::Column::Slug.eq(SEED_COMPANY_SLUG))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_company", e))?;

        if let Some(company) = existing {
            return Ok(company.id);
        }

        let now = Utc::now().timestamp();
        let company = company::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set("Trailhub Guides".to_string()),
            slug: Set(SEED_COMPANY_SLUG.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| InternalError::database("insert_company", e))?;

        Ok(company.id)
    }
}
