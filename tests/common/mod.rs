// Common test utilities for integration tests
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use trailhub_backend::config::{AppSettings, StaticEnvironment};
use trailhub_backend::stores::NewUser;
use trailhub_backend::types::db::user;
use trailhub_backend::AppData;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub fn test_environment(media_dir: &Path) -> StaticEnvironment {
    StaticEnvironment::empty().with_vars(&[
        ("JWT_SECRET", "test-jwt-secret-minimum-32-characters-long"),
        ("SESSION_SECRET", "test-session-secret-minimum-32-chars!"),
        ("PASSWORD_PEPPER", "test-pepper-for-unit-tests-32-chars-min"),
        ("CMS_URL", "https://cms.trailhub.test"),
        ("SEED_DOWNLOAD_DELAY_MS", "0"),
        ("MEDIA_DIR", &media_dir.display().to_string()),
    ])
}

/// AppData over a fresh in-memory database
pub async fn setup_app_data() -> Arc<AppData> {
    setup_app_data_with_media(Path::new("target/test-media")).await
}

pub async fn setup_app_data_with_media(media_dir: &Path) -> Arc<AppData> {
    let settings = AppSettings::from_env_provider(&test_environment(media_dir))
        .expect("Failed to load test settings");
    Arc::new(AppData::init(setup_test_db().await, settings))
}

/// Create a role and a user holding it
pub async fn create_user(
    app_data: &AppData,
    email: &str,
    role_slug: &str,
    permissions: &[&str],
    is_super_admin: bool,
) -> user::Model {
    let role = app_data
        .role_store
        .upsert_role(role_slug, role_slug, permissions, false)
        .await
        .expect("Failed to create role");

    app_data
        .credential_store
        .create_user(NewUser {
            name: email.to_string(),
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
            role_id: role.id,
            company_id: None,
            is_super_admin,
        })
        .await
        .expect("Failed to create user")
}
