use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::BearerAuth;
use crate::errors::user::UserError;
use crate::services::AccessControl;
use crate::stores::{CredentialStore, RoleStore};
use crate::types::dto::common::MessageResponse;
use crate::types::dto::user::{RegisterRequest, RoleResponse, UpdateRoleRequest, UserResponse};
use crate::types::internal::auth::{permissions, roles};

/// User and role management API endpoints
pub struct UsersApi {
    credential_store: Arc<CredentialStore>,
    role_store: Arc<RoleStore>,
    access_control: Arc<AccessControl>,
}

impl UsersApi {
    pub fn new(
        credential_store: Arc<CredentialStore>,
        role_store: Arc<RoleStore>,
        access_control: Arc<AccessControl>,
    ) -> Self {
        Self {
            credential_store,
            role_store,
            access_control,
        }
    }
}

/// API tags for user management endpoints
#[derive(Tags)]
enum UserTags {
    /// User account endpoints
    Users,
    /// Role management endpoints
    Roles,
}

#[OpenApi]
impl UsersApi {
    /// Register a new account.
    ///
    /// Open endpoint; every new account starts with the "guest" role.
    #[oai(path = "/users/register", method = "post", tag = "UserTags::Users")]
    async fn register(&self, body: Json<RegisterRequest>) -> Result<Json<UserResponse>, UserError> {
        let created = self
            .credential_store
            .create_user(&body.email, &body.password, None)
            .await?;

        Ok(Json(UserResponse {
            id: created.id,
            email: created.email,
            role: roles::GUEST.to_string(),
        }))
    }

    /// Replace a user's role assignment
    #[oai(path = "/users/:user_id/role", method = "patch", tag = "UserTags::Users")]
    async fn update_role(
        &self,
        auth: BearerAuth,
        user_id: Path<String>,
        body: Json<UpdateRoleRequest>,
    ) -> Result<Json<UserResponse>, UserError> {
        self.access_control
            .require(&auth.0.token, permissions::USERS_MANAGE)
            .await?;

        let updated = self
            .credential_store
            .update_role(&user_id.0, &body.role_name)
            .await?;

        Ok(Json(UserResponse {
            id: updated.id,
            email: updated.email,
            role: body.role_name.clone(),
        }))
    }

    /// Delete a user account
    #[oai(path = "/users/:user_id", method = "delete", tag = "UserTags::Users")]
    async fn delete_user(
        &self,
        auth: BearerAuth,
        user_id: Path<String>,
    ) -> Result<Json<MessageResponse>, UserError> {
        self.access_control
            .require(&auth.0.token, permissions::USERS_MANAGE)
            .await?;

        self.credential_store.delete_user(&user_id.0).await?;

        Ok(Json(MessageResponse {
            message: format!("User '{}' deleted", user_id.0),
        }))
    }

    /// List every role with its permission set
    #[oai(path = "/roles", method = "get", tag = "UserTags::Roles")]
    async fn list_roles(&self, auth: BearerAuth) -> Result<Json<Vec<RoleResponse>>, UserError> {
        self.access_control
            .require(&auth.0.token, permissions::USERS_MANAGE)
            .await?;

        let listed = self.role_store.list_roles().await?;

        Ok(Json(
            listed
                .into_iter()
                .map(|(role, perms)| RoleResponse {
                    name: role.name,
                    permissions: perms.into_iter().map(|p| p.name).collect(),
                })
                .collect(),
        ))
    }

    /// Delete a role.
    ///
    /// Fails while any user still references the role.
    #[oai(path = "/roles/:name", method = "delete", tag = "UserTags::Roles")]
    async fn delete_role(
        &self,
        auth: BearerAuth,
        name: Path<String>,
    ) -> Result<Json<MessageResponse>, UserError> {
        self.access_control
            .require(&auth.0.token, permissions::USERS_MANAGE)
            .await?;

        self.role_store.delete_role(&name.0).await?;

        Ok(Json(MessageResponse {
            message: format!("Role '{}' deleted", name.0),
        }))
    }
}
