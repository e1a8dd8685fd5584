use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    SqlErr,
};
use uuid::Uuid;

use crate::errors::auth::AuthError;
use crate::errors::user::UserError;
use crate::services::password;
use crate::types::db::{permission, role, user};
use crate::types::internal::auth::roles;

/// A user together with its resolved role and permission set.
///
/// Loaded in one consistent read so authorization decisions never see a
/// half-updated role assignment.
pub struct UserWithAccess {
    pub user: user::Model,
    pub role: role::Model,
    pub permissions: Vec<permission::Model>,
}

/// CredentialStore manages user records and credential verification.
pub struct CredentialStore {
    db: DatabaseConnection,
}

impl CredentialStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Look up a user by email; a miss is not an error
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, UserError> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))
    }

    /// Look up a user by id; a miss is not an error
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<user::Model>, UserError> {
        user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))
    }

    /// Look up a user by id with its role and permission set resolved.
    ///
    /// The user and role come back from one joined query, so the role can
    /// never be read against a different user snapshot. The permission set
    /// is loaded fresh on every call so role changes bind on the very next
    /// request.
    pub async fn find_by_id_with_access(
        &self,
        user_id: &str,
    ) -> Result<Option<UserWithAccess>, UserError> {
        let Some((found, role)) = user::Entity::find_by_id(user_id)
            .find_also_related(role::Entity)
            .one(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))?
        else {
            return Ok(None);
        };

        let role = role.ok_or_else(|| UserError::internal("User references a missing role"))?;

        let permissions = role
            .find_related(permission::Entity)
            .all(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))?;

        Ok(Some(UserWithAccess {
            user: found,
            role,
            permissions,
        }))
    }

    /// Create a new user.
    ///
    /// The password is hashed before anything touches the database. When no
    /// role is named the default "guest" role is assigned; user creation
    /// fails with `RoleNotFound` if that role has not been seeded. Email
    /// uniqueness is enforced by the unique index, so concurrent
    /// registrations of the same address cannot both succeed.
    pub async fn create_user(
        &self,
        email: &str,
        raw_password: &str,
        role_name: Option<&str>,
    ) -> Result<user::Model, UserError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(UserError::validation("Invalid email format"));
        }
        if raw_password.is_empty() {
            return Err(UserError::validation("Password cannot be empty"));
        }

        let password_hash = password::hash_password(raw_password)
            .map_err(|_| UserError::internal("Failed to hash password"))?;

        let role_name = role_name.unwrap_or(roles::GUEST);
        let role = self
            .find_role_by_name(role_name)
            .await?
            .ok_or_else(|| UserError::role_not_found(role_name))?;

        let now = Utc::now().timestamp();
        let created = user::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            email: Set(email.clone()),
            password_hash: Set(password_hash),
            role_id: Set(role.id),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => UserError::duplicate_email(),
            _ => UserError::internal(format!("Database error: {}", e)),
        })?;

        tracing::debug!(user_id = %created.id, role = role_name, "user created");
        Ok(created)
    }

    /// Replace a user's single role reference.
    ///
    /// Not additive: the previous role reference is dropped. On any failure
    /// the existing assignment stands.
    pub async fn update_role(
        &self,
        user_id: &str,
        role_name: &str,
    ) -> Result<user::Model, UserError> {
        let found = self
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UserError::user_not_found(user_id))?;

        let role = self
            .find_role_by_name(role_name)
            .await?
            .ok_or_else(|| UserError::role_not_found(role_name))?;

        let mut active: user::ActiveModel = found.into();
        active.role_id = Set(role.id);
        active.updated_at = Set(Utc::now().timestamp());

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))?;

        tracing::info!(user_id = %updated.id, role = role_name, "user role updated");
        Ok(updated)
    }

    /// Verify login credentials, returning the user on success.
    ///
    /// Unknown email and wrong password produce the same error so callers
    /// cannot probe for registered addresses.
    pub async fn verify_credentials(
        &self,
        email: &str,
        raw_password: &str,
    ) -> Result<user::Model, AuthError> {
        let found = self
            .find_by_email(&email.trim().to_lowercase())
            .await
            .map_err(|_| AuthError::internal_error("Database error during login"))?
            .ok_or_else(AuthError::invalid_credentials)?;

        if !password::verify_password(raw_password, &found.password_hash)? {
            return Err(AuthError::invalid_credentials());
        }

        Ok(found)
    }

    /// Delete a user record. Roles are shared and survive user deletion.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), UserError> {
        let result = user::Entity::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))?;

        if result.rows_affected == 0 {
            return Err(UserError::user_not_found(user_id));
        }

        tracing::info!(user_id, "user deleted");
        Ok(())
    }

    async fn find_role_by_name(&self, name: &str) -> Result<Option<role::Model>, UserError> {
        role::Entity::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))
    }
}
