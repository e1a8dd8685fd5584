use argon2::password_hash::rand_core::OsRng;
use argon2::{
    password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};

use crate::errors::auth::AuthError;

/// Hash a plaintext password with Argon2id and a fresh random salt.
///
/// The salt is randomized per call, so hashing the same password twice yields
/// different strings; callers must never compare hashes directly.
pub fn hash_password(raw: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(raw.as_bytes(), &salt)
        .map_err(|e| AuthError::internal_error(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored hash.
///
/// Returns `Ok(false)` on mismatch; errors only when the stored hash itself
/// is malformed.
pub fn verify_password(raw: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| AuthError::internal_error(format!("Malformed password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(raw.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_succeeds() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("hunter2").unwrap();
        assert!(!verify_password("hunter3", &hash).unwrap());
        // single-character difference is still a mismatch
        assert!(!verify_password("Hunter2", &hash).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = hash_password("demo").unwrap();
        let second = hash_password("demo").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("demo", &first).unwrap());
        assert!(verify_password("demo", &second).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(verify_password("demo", "not-a-phc-string").is_err());
    }
}
