use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::services::TokenService;
use crate::stores::CredentialStore;

/// The resolved identity of a caller, built fresh for one request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub permissions: HashSet<String>,
}

impl AuthenticatedUser {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

/// Per-request authorization guard.
///
/// Verifies the bearer token, then loads the caller's role and permission
/// set from the store. The set is never cached across requests, so a role
/// change takes effect on the very next call.
pub struct AccessControl {
    credential_store: Arc<CredentialStore>,
    token_service: Arc<TokenService>,
}

impl AccessControl {
    pub fn new(credential_store: Arc<CredentialStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            credential_store,
            token_service,
        }
    }

    /// Establish the caller's identity from a bearer token.
    ///
    /// Fails with a 401-class error when the token is invalid or expired,
    /// or when its subject no longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let claims = self.token_service.verify(token)?;

        let access = self
            .credential_store
            .find_by_id_with_access(&claims.sub)
            .await
            .map_err(|_| AuthError::internal_error("Failed to load user for authorization"))?
            .ok_or_else(AuthError::invalid_token)?;

        Ok(AuthenticatedUser {
            user_id: access.user.id,
            email: access.user.email,
            role: access.role.name,
            permissions: access.permissions.into_iter().map(|p| p.name).collect(),
        })
    }

    /// Authenticate and check the endpoint's required permission.
    ///
    /// A valid identity lacking the permission gets 403, never 401.
    pub async fn require(
        &self,
        token: &str,
        permission: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        let caller = self.authenticate(token).await?;

        if !caller.has_permission(permission) {
            tracing::debug!(
                user_id = %caller.user_id,
                role = %caller.role,
                permission,
                "permission denied"
            );
            return Err(AuthError::forbidden(permission));
        }

        Ok(caller)
    }
}
