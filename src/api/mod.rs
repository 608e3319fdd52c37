// API layer - HTTP endpoints
pub mod admin;
pub mod auth;
pub mod health;

use std::net::IpAddr;
use std::sync::Arc;

use poem::middleware::Cors;
use poem::{EndpointExt, Request, Route};
use poem_openapi::OpenApiService;

pub use admin::AdminApi;
pub use auth::{AuthApi, BearerAuth};
pub use health::HealthApi;

use crate::app_data::AppData;
use crate::types::internal::context::RequestContext;

/// Best-effort client IP: proxy headers first, then the socket address
pub fn extract_ip_address(req: &Request) -> Option<IpAddr> {
    if let Some(forwarded) = req.header("X-Forwarded-For") {
        if let Some(ip) = forwarded.split(',').next() {
            return ip.trim().parse().ok();
        }
    }

    if let Some(real_ip) = req.header("X-Real-IP") {
        return real_ip.trim().parse().ok();
    }

    req.remote_addr().as_socket_addr().map(|addr| addr.ip())
}

pub fn request_context(req: &Request) -> RequestContext {
    match extract_ip_address(req) {
        Some(ip) => RequestContext::new().with_ip_address(ip.to_string()),
        None => RequestContext::new(),
    }
}

/// Build the full HTTP application: OpenAPI services under `/api`,
/// Swagger UI at `/swagger` and CORS for the configured origins.
///
/// `/api/public` is reserved for unauthenticated content endpoints.
pub fn build_routes(app_data: Arc<AppData>, server_url: &str) -> impl poem::Endpoint + use<> {
    let api_service = OpenApiService::new(
        (
            HealthApi::new(app_data.clone()),
            AuthApi::new(app_data.clone()),
            AdminApi::new(app_data.clone()),
        ),
        "Trailhub CMS API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", server_url));

    let swagger = api_service.swagger_ui();

    let cors = app_data
        .settings
        .cors_origins()
        .into_iter()
        .fold(Cors::new(), |cors, origin| cors.allow_origin(origin))
        .allow_credentials(true);

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", swagger)
        .with(cors)
}
