use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Agent as returned by the API
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AgentDto {
    /// Agent code (natural key, e.g. "A001")
    pub agent_code: String,

    /// Agent name
    pub agent_name: String,

    /// Working area
    pub working_area: Option<String>,

    /// Commission rate
    pub commission: Option<String>,

    /// Phone number
    pub phone_no: Option<String>,

    /// Country
    pub country: Option<String>,
}
