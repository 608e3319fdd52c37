use argon2::{password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::internal::{CredentialError, InternalError};
use crate::types::db::auth_session;
use crate::types::db::user::{self, Entity as User};

/// Everything needed to create a user account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role_id: String,
    pub company_id: Option<String>,
    pub is_super_admin: bool,
}

/// CredentialStore manages password hashes and login sessions
pub struct CredentialStore {
    db: DatabaseConnection,
    password_pepper: String,
}

impl CredentialStore {
    /// Create a new CredentialStore
    ///
    /// # Arguments
    /// * `db` - The database connection
    /// * `password_pepper` - Secret mixed into every Argon2 hash
    pub fn new(db: DatabaseConnection, password_pepper: String) -> Self {
        Self { db, password_pepper }
    }

    fn argon2(&self) -> Result<Argon2<'_>, InternalError> {
        Argon2::new_with_secret(
            self.password_pepper.as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
        .map_err(|e| InternalError::crypto("argon2_init", e.to_string()))
    }

    /// Hash a password with Argon2id and the configured pepper
    pub fn hash_password(&self, password: &str) -> Result<String, InternalError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);
        let hash = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredentialError::PasswordHashingFailed(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    /// Add a new user
    ///
    /// Emails are stored trimmed and lowercased.
    ///
    /// # Returns
    /// * `Ok(user::Model)` - The inserted row
    /// * `Err(CredentialError::DuplicateEmail)` - Email already registered (soft-deleted users included)
    pub async fn create_user(&self, new_user: NewUser) -> Result<user::Model, InternalError> {
        let email = normalize_email(&new_user.email);

        let existing = User::find()
            .filter(user::Column::Email.eq(&email))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_by_email", e))?;

        if existing.is_some() {
            return Err(CredentialError::DuplicateEmail(email).into());
        }

        let password_hash = self.hash_password(&new_user.password)?;
        let now = Utc::now().timestamp();

        let model = user::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(new_user.name),
            email: Set(email.clone()),
            password_hash: Set(password_hash),
            company_id: Set(new_user.company_id),
            role_id: Set(new_user.role_id),
            is_super_admin: Set(new_user.is_super_admin),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        model.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                CredentialError::DuplicateEmail(email).into()
            } else {
                InternalError::database("insert_user", e)
            }
        })
    }

    /// Verify credentials and return the user row on success
    ///
    /// Unknown email, soft-deleted account and wrong password all yield
    /// `CredentialError::InvalidCredentials`.
    pub async fn verify_credentials(&self, email: &str, password: &str) -> Result<user::Model, InternalError> {
        let user = User::find()
            .filter(user::Column::Email.eq(normalize_email(email)))
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_user_for_login", e))?
            .ok_or(CredentialError::InvalidCredentials)?;

        let parsed_hash =
            PasswordHash::new(&user.password_hash).map_err(|_| CredentialError::InvalidCredentials)?;

        self.argon2()?
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| CredentialError::InvalidCredentials)?;

        Ok(user)
    }

    /// Record a session for a freshly issued access token
    pub async fn create_session(&self, token_hash: String, user_id: String, expires_at: i64) -> Result<(), InternalError> {
        let session = auth_session::ActiveModel {
            token_hash: Set(token_hash),
            user_id: Set(user_id),
            expires_at: Set(expires_at),
            created_at: Set(Utc::now().timestamp()),
        };

        session
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_session", e))?;

        Ok(())
    }

    /// Look up a live session
    ///
    /// # Returns
    /// * `Err(CredentialError::SessionRevoked)` - No row (logged out or never issued)
    /// * `Err(CredentialError::ExpiredToken)` - Row exists but has expired
    pub async fn find_active_session(&self, token_hash: &str) -> Result<auth_session::Model, InternalError> {
        let session = auth_session::Entity::find_by_id(token_hash.to_string())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_session", e))?
            .ok_or(CredentialError::SessionRevoked)?;

        if session.expires_at <= Utc::now().timestamp() {
            return Err(CredentialError::ExpiredToken.into());
        }

        Ok(session)
    }

    /// Delete a session. Returns whether a row was removed.
    pub async fn delete_session(&self, token_hash: &str) -> Result<bool, InternalError> {
        let result = auth_session::Entity::delete_by_id(token_hash.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_session", e))?;

        Ok(result.rows_affected > 0)
    }

    /// Remove sessions whose expiry has passed
    pub async fn purge_expired_sessions(&self) -> Result<u64, InternalError> {
        let result = auth_session::Entity::delete_many()
            .filter(auth_session::Column::ExpiresAt.lte(Utc::now().timestamp()))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("purge_sessions", e))?;

        Ok(result.rows_affected)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("db", &"<connection>")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::RoleStore;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup_test_db() -> (DatabaseConnection, CredentialStore, String) {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let role = RoleStore::new(db.clone())
            .upsert_role("Editor", "editor", &["trails.*"], true)
            .await
            .expect("Failed to create role");

        let store = CredentialStore::new(db.clone(), "test-pepper-for-unit-tests".to_string());
        (db, store, role.id)
    }

    fn new_user(email: &str, role_id: &str) -> NewUser {
        NewUser {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            role_id: role_id.to_string(),
            company_id: None,
            is_super_admin: false,
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let (_db, store, role_id) = setup_test_db().await;

        let user = store.create_user(new_user("Hiker@Example.com ", &role_id)).await.unwrap();

        assert_eq!(user.email, "hiker@example.com");
        assert!(user.password_hash.starts_with("$argon2id"));
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_email() {
        let (_db, store, role_id) = setup_test_db().await;
        store.create_user(new_user("dup@example.com", &role_id)).await.unwrap();

        let err = store
            .create_user(new_user("DUP@example.com", &role_id))
            .await
            .unwrap_err();

        assert!(matches!(err, InternalError::Credential(CredentialError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_verify_credentials() {
        let (_db, store, role_id) = setup_test_db().await;
        let created = store.create_user(new_user("login@example.com", &role_id)).await.unwrap();

        let user = store.verify_credentials("login@example.com", "password123").await.unwrap();
        assert_eq!(user.id, created.id);

        let wrong = store.verify_credentials("login@example.com", "nope").await.unwrap_err();
        assert!(matches!(wrong, InternalError::Credential(CredentialError::InvalidCredentials)));

        let unknown = store.verify_credentials("ghost@example.com", "password123").await.unwrap_err();
        assert!(matches!(unknown, InternalError::Credential(CredentialError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_pepper_is_required_to_verify() {
        let (db, store, role_id) = setup_test_db().await;
        store.create_user(new_user("pepper@example.com", &role_id)).await.unwrap();

        let other = CredentialStore::new(db, "a-different-pepper-value".to_string());
        assert!(other.verify_credentials("pepper@example.com", "password123").await.is_err());
    }

    #[tokio::test]
    async fn test_soft_deleted_user_cannot_log_in() {
        let (db, store, role_id) = setup_test_db().await;
        let created = store.create_user(new_user("gone@example.com", &role_id)).await.unwrap();

        let mut active: user::ActiveModel = created.into();
        active.deleted_at = Set(Some(Utc::now().timestamp()));
        active.update(&db).await.unwrap();

        let err = store.verify_credentials("gone@example.com", "password123").await.unwrap_err();
        assert!(matches!(err, InternalError::Credential(CredentialError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let (_db, store, role_id) = setup_test_db().await;
        let user = store.create_user(new_user("session@example.com", &role_id)).await.unwrap();
        let expires_at = Utc::now().timestamp() + 3600;

        store.create_session("hash-1".to_string(), user.id.clone(), expires_at).await.unwrap();
        let session = store.find_active_session("hash-1").await.unwrap();
        assert_eq!(session.user_id, user.id);

        assert!(store.delete_session("hash-1").await.unwrap());
        assert!(!store.delete_session("hash-1").await.unwrap());

        let err = store.find_active_session("hash-1").await.unwrap_err();
        assert!(matches!(err, InternalError::Credential(CredentialError::SessionRevoked)));
    }

    #[tokio::test]
    async fn test_expired_session() {
        let (_db, store, role_id) = setup_test_db().await;
        let user = store.create_user(new_user("expired@example.com", &role_id)).await.unwrap();

        store
            .create_session("old".to_string(), user.id.clone(), Utc::now().timestamp() - 10)
            .await
            .unwrap();
        store
            .create_session("new".to_string(), user.id, Utc::now().timestamp() + 3600)
            .await
            .unwrap();

        let err = store.find_active_session("old").await.unwrap_err();
        assert!(matches!(err, InternalError::Credential(CredentialError::ExpiredToken)));

        assert_eq!(store.purge_expired_sessions().await.unwrap(), 1);
        assert!(store.find_active_session("new").await.is_ok());
    }
}
