use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

use crate::errors::InternalError;

type HmacSha256 = Hmac<Sha256>;

/// Compute HMAC-SHA256 of `token` and return it as lowercase hex
pub fn hmac_sha256_token(key: &str, token: &str) -> Result<String, InternalError> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| InternalError::crypto("hmac_init", e.to_string()))?;
    mac.update(token.as_bytes());
    Ok(format!("{:x}", mac.finalize().into_bytes()))
}

/// Generate a cryptographically secure random password
///
/// 20 characters drawn from upper/lower case letters, digits and symbols.
/// Used for the seeded administrator account.
pub fn generate_secure_password() -> String {
    const PASSWORD_LENGTH: usize = 20;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789\
                             !@#$%^&*()_+-=[]{}|;:,.<>?";

    let mut rng = rand::rng();
    (0..PASSWORD_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_is_deterministic_per_key() {
        let a = hmac_sha256_token("key-one", "jti-123").unwrap();
        let b = hmac_sha256_token("key-one", "jti-123").unwrap();
        let c = hmac_sha256_token("key-two", "jti-123").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generate_secure_password() {
        let password = generate_secure_password();
        assert_eq!(password.len(), 20);
        assert!(password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c)));
        assert_ne!(password, generate_secure_password());
    }
}
