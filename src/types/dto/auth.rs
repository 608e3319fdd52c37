use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::dto::common::UserSummary;

/// Request model for user login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email
    #[oai(validator(max_length = 255))]
    pub email: String,

    pub password: String,
}

/// Successful login
#[derive(Object, Debug)]
pub struct LoginResponse {
    /// JWT access token for the admin API
    pub access_token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Number of seconds until the access token expires
    pub expires_in: i64,

    pub user: UserSummary,
}
