use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppSettings;
use crate::services::TokenService;
use crate::stores::{ActivityLogStore, CredentialStore, DashboardStore, RoleStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once at startup and shared across coordinators.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(db, settings)
///   ├─ credential_store (Arc<CredentialStore>)
///   ├─ role_store       (Arc<RoleStore>)
///   ├─ user_store       (Arc<UserStore>)
///   ├─ activity_store   (Arc<ActivityLogStore>)
///   ├─ dashboard_store  (Arc<DashboardStore>)
///   └─ token_service    (Arc<TokenService>)
///   ↓ wrapped in Arc<AppData>
///   ├─ AuthCoordinator::new(app_data)
///   └─ AdminCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub settings: AppSettings,
    pub credential_store: Arc<CredentialStore>,
    pub role_store: Arc<RoleStore>,
    pub user_store: Arc<UserStore>,
    pub activity_store: Arc<ActivityLogStore>,
    pub dashboard_store: Arc<DashboardStore>,
    pub token_service: Arc<TokenService>,
}

impl AppData {
    /// Build all stores over an already migrated connection
    pub fn init(db: DatabaseConnection, settings: AppSettings) -> Self {
        tracing::debug!("Creating stores...");

        let secrets = &settings.secrets;
        let credential_store = Arc::new(CredentialStore::new(
            db.clone(),
            secrets.password_pepper().to_string(),
        ));
        let token_service = Arc::new(TokenService::new(
            secrets.jwt_secret().to_string(),
            secrets.session_secret().to_string(),
            settings.access_token_ttl_minutes,
        ));

        let app_data = Self {
            credential_store,
            role_store: Arc::new(RoleStore::new(db.clone())),
            user_store: Arc::new(UserStore::new(db.clone())),
            activity_store: Arc::new(ActivityLogStore::new(db.clone())),
            dashboard_store: Arc::new(DashboardStore::new(db.clone())),
            token_service,
            db,
            settings,
        };

        tracing::info!("AppData initialization complete");
        app_data
    }
}
