mod common;

use common::{create_user, setup_app_data, TEST_PASSWORD};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use trailhub_backend::coordinators::AuthCoordinator;
use trailhub_backend::errors::internal::{CredentialError, InternalError};
use trailhub_backend::types::db::{activity_log, user};
use trailhub_backend::types::internal::context::RequestContext;

#[tokio::test]
async fn test_login_then_authenticate() {
    let app_data = setup_app_data().await;
    let created = create_user(&app_data, "editor@example.com", "editor", &["trails.*"], false).await;
    let coordinator = AuthCoordinator::new(app_data.clone());
    let ctx = RequestContext::new().with_ip_address("203.0.113.7");

    let outcome = coordinator
        .login(&ctx, "Editor@Example.com", TEST_PASSWORD)
        .await
        .unwrap();
    assert_eq!(outcome.user.user.id, created.id);

    let session = coordinator.authenticate(&outcome.token.token).await.unwrap();
    assert_eq!(session.actor.id, created.id);
    assert_eq!(session.actor.role_slug.as_deref(), Some("editor"));
    assert!(session.actor.has_permission("trails.update_status"));
    assert!(!session.actor.has_permission("users.view"));
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "editor@example.com", "editor", &["trails.*"], false).await;
    let coordinator = AuthCoordinator::new(app_data);

    let err = coordinator
        .login(&RequestContext::new(), "editor@example.com", "wrong-password")
        .await
        .unwrap_err();

    assert!(matches!(err, InternalError::Credential(CredentialError::InvalidCredentials)));
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "viewer@example.com", "viewer", &["trails.view"], false).await;
    let coordinator = AuthCoordinator::new(app_data);
    let ctx = RequestContext::new();

    let outcome = coordinator.login(&ctx, "viewer@example.com", TEST_PASSWORD).await.unwrap();
    let session = coordinator.authenticate(&outcome.token.token).await.unwrap();

    coordinator.logout(&ctx, &session).await.unwrap();

    let err = coordinator.authenticate(&outcome.token.token).await.unwrap_err();
    assert!(matches!(err, InternalError::Credential(CredentialError::SessionRevoked)));
}

#[tokio::test]
async fn test_logout_leaves_other_sessions_alone() {
    let app_data = setup_app_data().await;
    create_user(&app_data, "viewer@example.com", "viewer", &["trails.view"], false).await;
    let coordinator = AuthCoordinator::new(app_data);
    let ctx = RequestContext::new();

    let first = coordinator.login(&ctx, "viewer@example.com", TEST_PASSWORD).await.unwrap();
    let second = coordinator.login(&ctx, "viewer@example.com", TEST_PASSWORD).await.unwrap();

    let session = coordinator.authenticate(&first.token.token).await.unwrap();
    coordinator.logout(&ctx, &session).await.unwrap();

    assert!(coordinator.authenticate(&second.token.token).await.is_ok());
}

#[tokio::test]
async fn test_soft_deleted_user_loses_access() {
    let app_data = setup_app_data().await;
    let created = create_user(&app_data, "leaver@example.com", "viewer", &["trails.view"], false).await;
    let coordinator = AuthCoordinator::new(app_data.clone());

    let outcome = coordinator
        .login(&RequestContext::new(), "leaver@example.com", TEST_PASSWORD)
        .await
        .unwrap();

    let mut active: user::ActiveModel = created.into();
    active.deleted_at = Set(Some(chrono::Utc::now().timestamp()));
    active.update(&app_data.db).await.unwrap();

    let err = coordinator.authenticate(&outcome.token.token).await.unwrap_err();
    assert!(matches!(err, InternalError::Credential(CredentialError::SessionRevoked)));

    let err = coordinator
        .login(&RequestContext::new(), "leaver@example.com", TEST_PASSWORD)
        .await
        .unwrap_err();
    assert!(matches!(err, InternalError::Credential(CredentialError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_and_logout_are_recorded() {
    let app_data = setup_app_data().await;
    let created = create_user(&app_data, "audit@example.com", "viewer", &["trails.view"], false).await;
    let coordinator = AuthCoordinator::new(app_data.clone());
    let ctx = RequestContext::new().with_ip_address("198.51.100.4");

    let outcome = coordinator.login(&ctx, "audit@example.com", TEST_PASSWORD).await.unwrap();
    let session = coordinator.authenticate(&outcome.token.token).await.unwrap();
    coordinator.logout(&ctx, &session).await.unwrap();

    let entries = activity_log::Entity::find().all(&app_data.db).await.unwrap();
    let actions: Vec<_> = entries.iter().map(|e| e.action.as_str()).collect();
    assert_eq!(actions, vec!["auth.login", "auth.logout"]);
    assert!(entries.iter().all(|e| e.user_id.as_deref() == Some(created.id.as_str())));
    assert_eq!(entries[0].ip_address.as_deref(), Some("198.51.100.4"));
}
