use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to score one project/talent pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "talentId")]
    pub talent_id: String,
}

/// Request to rank candidates for a project or openings for a talent
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "projectId")]
    pub project_id: Option<String>,
    #[validate(length(min = 1))]
    #[serde(rename = "talentId")]
    pub talent_id: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    10
}
