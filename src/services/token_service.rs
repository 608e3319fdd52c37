use std::fmt;

use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::errors::internal::{CredentialError, InternalError};
use crate::services::crypto;
use crate::types::internal::auth::{Claims, IssuedToken};

/// Issues and validates access tokens
pub struct TokenService {
    jwt_secret: String,
    session_secret: String,
    access_token_ttl_minutes: i64,
}

impl TokenService {
    pub fn new(jwt_secret: String, session_secret: String, access_token_ttl_minutes: i64) -> Self {
        Self {
            jwt_secret,
            session_secret,
            access_token_ttl_minutes,
        }
    }

    /// Generate a signed HS256 JWT for the given user
    pub fn generate_jwt(&self, user_id: &str) -> Result<IssuedToken, InternalError> {
        let now = Utc::now().timestamp();
        let expires_at = self
            .access_token_ttl_minutes
            .checked_mul(60)
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or_else(|| InternalError::crypto("jwt_encode", "token lifetime out of range"))?;

        let claims = Claims {
            sub: user_id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now,
            exp: expires_at,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| InternalError::crypto("jwt_encode", e.to_string()))?;

        Ok(IssuedToken {
            token,
            jti: claims.jti,
            expires_at,
        })
    }

    /// Validate signature and expiry, returning the claims
    pub fn validate_jwt(&self, token: &str) -> Result<Claims, InternalError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => CredentialError::ExpiredToken,
            _ => CredentialError::invalid_token(e.to_string()),
        })?;

        Ok(token_data.claims)
    }

    /// Fingerprint of a token id as stored in `auth_sessions`
    pub fn session_fingerprint(&self, jti: &str) -> Result<String, InternalError> {
        crypto::hmac_sha256_token(&self.session_secret, jti)
    }

    pub fn access_token_ttl_seconds(&self) -> i64 {
        self.access_token_ttl_minutes.saturating_mul(60)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("session_secret", &"<redacted>")
            .field("access_token_ttl_minutes", &self.access_token_ttl_minutes)
            .finish()
    }
}
