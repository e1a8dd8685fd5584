use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::BearerAuth;
use crate::errors::api::ApiError;
use crate::services::AccessControl;
use crate::stores::AgentStore;
use crate::types::db::agent;
use crate::types::dto::agent::AgentDto;
use crate::types::internal::auth::permissions;

/// Agent API endpoints.
///
/// Agents are reference data; the HTTP surface is read-only.
pub struct AgentsApi {
    agent_store: Arc<AgentStore>,
    access_control: Arc<AccessControl>,
}

impl AgentsApi {
    pub fn new(agent_store: Arc<AgentStore>, access_control: Arc<AccessControl>) -> Self {
        Self {
            agent_store,
            access_control,
        }
    }
}

/// API tags for agent endpoints
#[derive(Tags)]
enum AgentTags {
    /// Agent endpoints
    Agents,
}

fn to_dto(record: agent::Model) -> AgentDto {
    AgentDto {
        agent_code: record.agent_code,
        agent_name: record.agent_name,
        working_area: record.working_area,
        commission: record.commission,
        phone_no: record.phone_no,
        country: record.country,
    }
}

#[OpenApi(prefix_path = "/agents")]
impl AgentsApi {
    /// List every agent
    #[oai(path = "/", method = "get", tag = "AgentTags::Agents")]
    async fn list(&self, auth: BearerAuth) -> Result<Json<Vec<AgentDto>>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::AGENTS_READ)
            .await?;

        let listed = self.agent_store.list().await?;
        Ok(Json(listed.into_iter().map(to_dto).collect()))
    }

    /// Fetch one agent by code
    #[oai(path = "/:agent_code", method = "get", tag = "AgentTags::Agents")]
    async fn get(
        &self,
        auth: BearerAuth,
        agent_code: Path<String>,
    ) -> Result<Json<AgentDto>, ApiError> {
        self.access_control
            .require(&auth.0.token, permissions::AGENTS_READ)
            .await?;

        let found = self
            .agent_store
            .find(&agent_code.0)
            .await?
            .ok_or_else(|| ApiError::not_found("agent", &agent_code.0))?;
        Ok(Json(to_dto(found)))
    }
}
