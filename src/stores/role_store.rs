use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, Set,
};
use uuid::Uuid;

use crate::errors::user::UserError;
use crate::types::db::{permission, role, role_permission, user};
use crate::types::internal::auth::{permissions, roles};

/// RoleStore manages roles, permissions and their join rows.
///
/// Roles exist independently of users; the default "guest" role must be
/// seeded before user creation can succeed.
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Idempotently seed the built-in permissions and roles.
    ///
    /// "admin" receives every permission, "guest" the read-only subset.
    /// Safe to call on every startup.
    pub async fn seed_defaults(&self) -> Result<(), UserError> {
        for name in permissions::ALL {
            self.ensure_permission(name).await?;
        }

        let admin_id = self.ensure_role(roles::ADMIN).await?;
        let guest_id = self.ensure_role(roles::GUEST).await?;

        for name in permissions::ALL {
            self.ensure_grant(&admin_id, name).await?;
        }
        for name in permissions::GUEST {
            self.ensure_grant(&guest_id, name).await?;
        }

        Ok(())
    }

    /// Look up a role by name; a miss is not an error
    pub async fn find_by_name(&self, name: &str) -> Result<Option<role::Model>, UserError> {
        role::Entity::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))
    }

    /// Load the permission set of a role through the join table.
    ///
    /// Always resolves, possibly to an empty set.
    pub async fn permissions_for_role(
        &self,
        role: &role::Model,
    ) -> Result<Vec<permission::Model>, UserError> {
        role.find_related(permission::Entity)
            .all(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))
    }

    /// List every role together with its permission set
    pub async fn list_roles(
        &self,
    ) -> Result<Vec<(role::Model, Vec<permission::Model>)>, UserError> {
        role::Entity::find()
            .find_with_related(permission::Entity)
            .all(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))
    }

    /// Delete a role by name.
    ///
    /// Fails with `RoleNotFound` for unknown names and with a validation
    /// error while any user still references the role.
    pub async fn delete_role(&self, name: &str) -> Result<(), UserError> {
        let role = self
            .find_by_name(name)
            .await?
            .ok_or_else(|| UserError::role_not_found(name))?;

        let referencing_users = user::Entity::find()
            .filter(user::Column::RoleId.eq(role.id.clone()))
            .count(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))?;

        if referencing_users > 0 {
            return Err(UserError::validation(format!(
                "Role '{}' is still assigned to {} user(s)",
                name, referencing_users
            )));
        }

        role_permission::Entity::delete_many()
            .filter(role_permission::Column::RoleId.eq(role.id.clone()))
            .exec(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))?;

        role::Entity::delete_by_id(role.id)
            .exec(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))?;

        tracing::info!(role = name, "role deleted");
        Ok(())
    }

    async fn ensure_permission(&self, name: &str) -> Result<String, UserError> {
        let existing = permission::Entity::find()
            .filter(permission::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))?;

        if let Some(found) = existing {
            return Ok(found.id);
        }

        let id = Uuid::new_v4().to_string();
        permission::ActiveModel {
            id: Set(id.clone()),
            name: Set(name.to_string()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| UserError::internal(format!("Database error: {}", e)))?;

        Ok(id)
    }

    async fn ensure_role(&self, name: &str) -> Result<String, UserError> {
        if let Some(found) = self.find_by_name(name).await? {
            return Ok(found.id);
        }

        let id = Uuid::new_v4().to_string();
        role::ActiveModel {
            id: Set(id.clone()),
            name: Set(name.to_string()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| UserError::internal(format!("Database error: {}", e)))?;

        Ok(id)
    }

    async fn ensure_grant(&self, role_id: &str, permission_name: &str) -> Result<(), UserError> {
        let permission = permission::Entity::find()
            .filter(permission::Column::Name.eq(permission_name))
            .one(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))?
            .ok_or_else(|| UserError::internal("Permission missing during seeding"))?;

        let existing = role_permission::Entity::find_by_id((
            role_id.to_string(),
            permission.id.clone(),
        ))
        .one(&self.db)
        .await
        .map_err(|e| UserError::internal(format!("Database error: {}", e)))?;

        if existing.is_none() {
            role_permission::ActiveModel {
                role_id: Set(role_id.to_string()),
                permission_id: Set(permission.id),
            }
            .insert(&self.db)
            .await
            .map_err(|e| UserError::internal(format!("Database error: {}", e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup() -> RoleStore {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        RoleStore::new(db)
    }

    #[tokio::test]
    async fn seeding_creates_admin_and_guest() {
        let store = setup().await;
        store.seed_defaults().await.unwrap();

        let admin = store.find_by_name("admin").await.unwrap().unwrap();
        let admin_perms = store.permissions_for_role(&admin).await.unwrap();
        assert_eq!(admin_perms.len(), permissions::ALL.len());

        let guest = store.find_by_name("guest").await.unwrap().unwrap();
        let guest_perms = store.permissions_for_role(&guest).await.unwrap();
        assert_eq!(guest_perms.len(), permissions::GUEST.len());
        assert!(guest_perms.iter().all(|p| permissions::GUEST.contains(&p.name.as_str())));
    }

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let store = setup().await;
        store.seed_defaults().await.unwrap();
        store.seed_defaults().await.unwrap();

        let listed = store.list_roles().await.unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn deleting_unreferenced_role_succeeds() {
        let store = setup().await;
        store.seed_defaults().await.unwrap();

        store.delete_role("guest").await.unwrap();
        assert!(store.find_by_name("guest").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_unknown_role_fails() {
        let store = setup().await;
        store.seed_defaults().await.unwrap();

        let result = store.delete_role("superuser").await;
        assert!(matches!(result, Err(UserError::RoleNotFound(_))));
    }
}
