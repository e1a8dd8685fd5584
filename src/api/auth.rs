use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::BearerAuth;
use crate::errors::auth::AuthError;
use crate::services::{AccessControl, TokenService};
use crate::stores::CredentialStore;
use crate::types::dto::auth::{LoginRequest, TokenResponse, WhoAmIResponse};

/// Authentication API endpoints
pub struct AuthApi {
    credential_store: Arc<CredentialStore>,
    token_service: Arc<TokenService>,
    access_control: Arc<AccessControl>,
}

impl AuthApi {
    pub fn new(
        credential_store: Arc<CredentialStore>,
        token_service: Arc<TokenService>,
        access_control: Arc<AccessControl>,
    ) -> Self {
        Self {
            credential_store,
            token_service,
            access_control,
        }
    }
}

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Login with email and password to receive an access token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<TokenResponse>, AuthError> {
        let user = self
            .credential_store
            .verify_credentials(&body.email, &body.password)
            .await?;

        let access_token = self.token_service.issue(&user.id, &user.email)?;

        Ok(Json(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_service.expires_in_seconds(),
        }))
    }

    /// Verify the bearer token and return the caller's identity, role and permissions
    #[oai(path = "/whoami", method = "get", tag = "AuthTags::Authentication")]
    async fn whoami(&self, auth: BearerAuth) -> Result<Json<WhoAmIResponse>, AuthError> {
        let caller = self.access_control.authenticate(&auth.0.token).await?;

        let mut permissions: Vec<String> = caller.permissions.into_iter().collect();
        permissions.sort();

        Ok(Json(WhoAmIResponse {
            user_id: caller.user_id,
            email: caller.email,
            role: caller.role,
            permissions,
        }))
    }
}
