use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel};

use crate::errors::api::ApiError;
use crate::types::db::agent;

/// AgentStore reads agent reference data keyed by agent code.
pub struct AgentStore {
    db: DatabaseConnection,
}

impl AgentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<agent::Model>, ApiError> {
        agent::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    pub async fn find(&self, agent_code: &str) -> Result<Option<agent::Model>, ApiError> {
        agent::Entity::find_by_id(agent_code)
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }

    /// Insert an agent record; used by seeding and tests.
    pub async fn create(&self, record: agent::Model) -> Result<agent::Model, ApiError> {
        if self.find(&record.agent_code).await?.is_some() {
            return Err(ApiError::validation(format!(
                "Agent '{}' already exists",
                record.agent_code
            )));
        }

        record
            .into_active_model()
            .insert(&self.db)
            .await
            .map_err(|e| ApiError::internal(format!("Database error: {}", e)))
    }
}
