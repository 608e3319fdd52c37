//! Out-of-band population of a fresh environment.
//!
//! Every step is idempotent: rows are looked up by slug (or email) and only
//! created when missing. Records whose prerequisites are absent are logged
//! and skipped; database failures abort the run.

mod catalog;
pub mod data;
pub mod fetcher;
mod identity;
mod media;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::ValueEnum;
use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::stores::{CredentialStore, RoleStore, UserStore};

pub use fetcher::{fetch_with_retry, FetchedImage, HttpImageFetcher, ImageFetcher};

const DOWNLOAD_RETRIES: u32 = 2;
const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Which part of the dataset to seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedSet {
    Roles,
    Regions,
    Amenities,
    Users,
    Trails,
    Media,
    All,
}

impl SeedSet {
    /// Concrete steps in dependency order
    pub fn steps(self) -> Vec<SeedSet> {
        match self {
            SeedSet::All => vec![
                SeedSet::Roles,
                SeedSet::Regions,
                SeedSet::Amenities,
                SeedSet::Users,
                SeedSet::Trails,
                SeedSet::Media,
            ],
            step => vec![step],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeedSet::Roles => "roles",
            SeedSet::Regions => "regions",
            SeedSet::Amenities => "amenities",
            SeedSet::Users => "users",
            SeedSet::Trails => "trails",
            SeedSet::Media => "media",
            SeedSet::All => "all",
        }
    }
}

impl fmt::Display for SeedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials generated for a seeded account, shown once
#[derive(Debug, Clone)]
pub struct SeededCredential {
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Outcome of one seed step
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    pub created: usize,
    pub existing: usize,
    pub skipped: usize,
    pub credentials: Vec<SeededCredential>,
}

pub struct Seeder {
    db: DatabaseConnection,
    role_store: Arc<RoleStore>,
    credential_store: Arc<CredentialStore>,
    user_store: Arc<UserStore>,
    fetcher: Arc<dyn ImageFetcher>,
    media_dir: PathBuf,
    download_delay: Duration,
    retry_backoff: Duration,
}

impl Seeder {
    pub fn new(app_data: Arc<AppData>, fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self {
            db: app_data.db.clone(),
            role_store: app_data.role_store.clone(),
            credential_store: app_data.credential_store.clone(),
            user_store: app_data.user_store.clone(),
            fetcher,
            media_dir: app_data.settings.media_dir.clone(),
            download_delay: Duration::from_millis(app_data.settings.seed_download_delay_ms),
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Run the requested set, returning one report per executed step
    pub async fn run(&self, set: SeedSet) -> Result<Vec<(SeedSet, StepReport)>, InternalError> {
        let mut reports = Vec::new();

        for step in set.steps() {
            tracing::info!("Seeding {}...", step);
            let report = match step {
                SeedSet::Roles => self.seed_roles().await?,
                SeedSet::Regions => self.seed_regions().await?,
                SeedSet::Amenities => self.seed_amenities().await?,
                SeedSet::Users => self.seed_users().await?,
                SeedSet::Trails => self.seed_trails().await?,
                SeedSet::Media => self.seed_media().await?,
                SeedSet::All => continue,
            };
            tracing::info!(
                created = report.created,
                existing = report.existing,
                skipped = report.skipped,
                "Seeded {}",
                step
            );
            reports.push((step, report));
        }

        Ok(reports)
    }
}
