use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::app_data::AppData;
use crate::types::dto::common::HealthResponse;

/// Liveness plus a database round-trip
pub struct HealthApi {
    app_data: Arc<AppData>,
}

impl HealthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

#[derive(Tags)]
enum ApiTags {
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Service status
    ///
    /// `status` is `degraded` when the database does not answer a ping.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let database = match self.app_data.db.ping().await {
            Ok(()) => "ok",
            Err(e) => {
                tracing::warn!(error = %e, "Database ping failed");
                "unavailable"
            }
        };

        Json(HealthResponse {
            status: if database == "ok" { "healthy" } else { "degraded" }.to_string(),
            database: database.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
