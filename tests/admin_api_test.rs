mod common;

use common::{create_user, setup_app_data, TEST_PASSWORD};
use poem::http::StatusCode;
use poem::test::TestClient;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::json;
use trailhub_backend::api::build_routes;
use trailhub_backend::types::db::user;

async fn login(cli: &TestClient<impl poem::Endpoint>, email: &str) -> String {
    let resp = cli
        .post("/api/login")
        .body_json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .send()
        .await;
    resp.assert_status_is_ok();

    resp.json().await.value().object().get("access_token").string().to_string()
}

#[tokio::test]
async fn test_health() {
    let app_data = setup_app_data().await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));

    let resp = cli.get("/api/health").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    body.value().object().get("status").assert_string("healthy");
    body.value().object().get("database").assert_string("ok");
}

#[tokio::test]
async fn test_health_reports_closed_database() {
    let app_data = setup_app_data().await;
    app_data.db.clone().close().await.unwrap();
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));

    let resp = cli.get("/api/health").send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    body.value().object().get("status").assert_string("degraded");
    body.value().object().get("database").assert_string("unavailable");
}

#[tokio::test]
async fn test_login_rejects_bad_password() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "admin@example.com", "admin", &["users.*"], false).await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));

    let resp = cli
        .post("/api/login")
        .body_json(&json!({ "email": "admin@example.com", "password": "nope" }))
        .send()
        .await;

    resp.assert_status(StatusCode::UNAUTHORIZED);
    let body = resp.json().await;
    body.value().object().get("message").assert_string("Invalid email or password");
}

#[tokio::test]
async fn test_me_returns_role_permissions() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "editor@example.com", "editor", &["trails.view", "media.*"], false).await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));
    let token = login(&cli, "editor@example.com").await;

    let resp = cli
        .get("/api/admin/me")
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await;
    resp.assert_status_is_ok();

    let body = resp.json().await;
    let object = body.value().object();
    object.get("user").object().get("email").assert_string("editor@example.com");
    object.get("user").object().get("role").assert_string("editor");
    object
        .get("permissions")
        .array()
        .assert_len(2);
}

#[tokio::test]
async fn test_admin_endpoints_require_token() {
    let app_data = setup_app_data().await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));

    cli.get("/api/admin/me").send().await.assert_status(StatusCode::UNAUTHORIZED);

    cli.get("/api/admin/dashboard")
        .header("Authorization", "Bearer not-a-token")
        .send()
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_then_token_is_rejected() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "viewer@example.com", "viewer", &["trails.view"], false).await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));
    let token = login(&cli, "viewer@example.com").await;
    let bearer = format!("Bearer {}", token);

    cli.post("/api/admin/logout")
        .header("Authorization", bearer.clone())
        .send()
        .await
        .assert_status_is_ok();

    let resp = cli.get("/api/admin/me").header("Authorization", bearer).send().await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
    resp.json().await.value().object().get("message").assert_string("Session has ended");
}

#[tokio::test]
async fn test_deleted_user_token_is_unauthorized() {
    let app_data = setup_app_data().await;
    let created = create_user(&app_data, "leaver@example.com", "viewer", &["trails.view"], false).await;
    let cli = TestClient::new(build_routes(app_data.clone(), "http://localhost:3000"));
    let bearer = format!("Bearer {}", login(&cli, "leaver@example.com").await);

    let mut active: user::ActiveModel = created.into();
    active.deleted_at = Set(Some(chrono::Utc::now().timestamp()));
    active.update(&app_data.db).await.unwrap();

    let resp = cli.get("/api/admin/me").header("Authorization", bearer).send().await;
    resp.assert_status(StatusCode::UNAUTHORIZED);
    resp.json().await.value().object().get("message").assert_string("Session has ended");
}

#[tokio::test]
async fn test_register_requires_users_create() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "viewer@example.com", "viewer", &["users.view"], false).await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));
    let token = login(&cli, "viewer@example.com").await;

    let resp = cli
        .post("/api/admin/register")
        .header("Authorization", format!("Bearer {}", token))
        .body_json(&json!({
            "name": "New Hiker",
            "email": "new@example.com",
            "password": "long-enough-password",
            "role": "viewer",
        }))
        .send()
        .await;

    resp.assert_status(StatusCode::FORBIDDEN);
    resp.json()
        .await
        .value()
        .object()
        .get("message")
        .assert_string("You do not have permission to create users.");
}

#[tokio::test]
async fn test_register_and_list_users() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "admin@example.com", "admin", &["users.*"], false).await;
    create_user(&app_data, "hiker@example.com", "viewer", &["trails.view"], false).await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));
    let bearer = format!("Bearer {}", login(&cli, "admin@example.com").await);

    let resp = cli
        .post("/api/admin/register")
        .header("Authorization", bearer.clone())
        .body_json(&json!({
            "name": "New Hiker",
            "email": "New@Example.com",
            "password": "long-enough-password",
            "role": "viewer",
        }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let user = body.value().object().get("user").object();
    user.get("email").assert_string("new@example.com");
    user.get("role").assert_string("viewer");
    user.get("is_super_admin").assert_bool(false);

    let resp = cli.get("/api/admin/users").header("Authorization", bearer).send().await;
    resp.assert_status_is_ok();
    resp.json().await.value().object().get("total").assert_i64(3);
}

#[tokio::test]
async fn test_register_rejects_duplicate_and_unknown_role() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "admin@example.com", "admin", &["users.create"], false).await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));
    let bearer = format!("Bearer {}", login(&cli, "admin@example.com").await);

    cli.post("/api/admin/register")
        .header("Authorization", bearer.clone())
        .body_json(&json!({
            "name": "Dup",
            "email": "admin@example.com",
            "password": "long-enough-password",
            "role": "admin",
        }))
        .send()
        .await
        .assert_status(StatusCode::CONFLICT);

    cli.post("/api/admin/register")
        .header("Authorization", bearer)
        .body_json(&json!({
            "name": "Ghost",
            "email": "ghost@example.com",
            "password": "long-enough-password",
            "role": "does-not-exist",
        }))
        .send()
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_only_super_admin_grants_super_admin() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "admin@example.com", "admin", &["users.*"], false).await;
    create_user(&app_data, "root@example.com", "root", &[], true).await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));
    let payload = |email: &str| {
        json!({
            "name": "Promoted",
            "email": email,
            "password": "long-enough-password",
            "role": "admin",
            "is_super_admin": true,
        })
    };

    let admin = format!("Bearer {}", login(&cli, "admin@example.com").await);
    cli.post("/api/admin/register")
        .header("Authorization", admin)
        .body_json(&payload("one@example.com"))
        .send()
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let root = format!("Bearer {}", login(&cli, "root@example.com").await);
    cli.post("/api/admin/register")
        .header("Authorization", root)
        .body_json(&payload("two@example.com"))
        .send()
        .await
        .assert_status_is_ok();
}

#[tokio::test]
async fn test_register_validates_password_length() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "admin@example.com", "admin", &["users.*"], false).await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));
    let bearer = format!("Bearer {}", login(&cli, "admin@example.com").await);

    cli.post("/api/admin/register")
        .header("Authorization", bearer)
        .body_json(&json!({
            "name": "Short",
            "email": "short@example.com",
            "password": "short",
            "role": "admin",
        }))
        .send()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_hides_activity_without_permission() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "viewer@example.com", "viewer", &["trails.view"], false).await;
    create_user(&app_data, "auditor@example.com", "auditor", &["activity_logs.view"], false).await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));

    let viewer = format!("Bearer {}", login(&cli, "viewer@example.com").await);
    let resp = cli.get("/api/admin/dashboard").header("Authorization", viewer).send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    let object = body.value().object();
    object.get("total_users").assert_i64(2);
    object.get("recent_activity").array().assert_is_empty();
    object.get("trails").array().assert_len(3);
    object.get("group_hikes").array().assert_len(4);

    let auditor = format!("Bearer {}", login(&cli, "auditor@example.com").await);
    let resp = cli.get("/api/admin/dashboard").header("Authorization", auditor).send().await;
    resp.assert_status_is_ok();
    let body = resp.json().await;
    // Both logins are in the log
    body.value().object().get("recent_activity").array().assert_len(2);
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let app_data = setup_app_data().await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));

    let resp = cli
        .get("/api/health")
        .header("Origin", "https://cms.trailhub.test")
        .send()
        .await;

    resp.assert_status_is_ok();
    resp.assert_header("Access-Control-Allow-Origin", "https://cms.trailhub.test");
    resp.assert_header("Access-Control-Allow-Credentials", "true");
}

#[tokio::test]
async fn test_cors_preflight_allows_every_method() {
    let app_data = setup_app_data().await;
    let cli = TestClient::new(build_routes(app_data, "http://localhost:3000"));

    let resp = cli
        .options("/api/health")
        .header("Origin", "https://cms.trailhub.test")
        .header("Access-Control-Request-Method", "HEAD")
        .header("Access-Control-Request-Headers", "Authorization")
        .send()
        .await;

    resp.assert_status_is_ok();
    resp.assert_header("Access-Control-Allow-Origin", "https://cms.trailhub.test");
    resp.assert_header_csv(
        "Access-Control-Allow-Methods",
        ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS", "CONNECT", "PATCH", "TRACE"],
    );
    resp.assert_header("Access-Control-Allow-Headers", "Authorization");
}
