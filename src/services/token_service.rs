use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use std::fmt;

use crate::errors::auth::AuthError;
use crate::types::internal::auth::Claims;

/// Manages JWT issuance and verification.
///
/// Tokens are stateless: validity is signature plus expiry, nothing else.
/// The signing secret is injected at construction, never read from ambient
/// state.
pub struct TokenService {
    jwt_secret: String,
    expiration_hours: i64,
}

impl TokenService {
    /// Create a new TokenService with the given signing secret and expiry window
    pub fn new(jwt_secret: String, expiration_hours: i64) -> Self {
        Self {
            jwt_secret,
            expiration_hours,
        }
    }

    /// Number of seconds an issued token remains valid
    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration_hours * 60 * 60
    }

    /// Issue a signed token embedding the user's identity
    pub fn issue(&self, user_id: &str, email: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.expires_in_seconds(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::internal_error(format!("Failed to generate JWT: {}", e)))?;

        Ok(token)
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// Expiry is checked against the clock at verification time.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::expired_token(),
            _ => AuthError::invalid_token(),
        })?;

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}
