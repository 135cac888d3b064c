use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{MatchResult, MatchSuggestion, RequirementSummary};

/// Identity and timestamp shared by every report the CLI prints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportHeader {
    #[serde(rename = "reportId")]
    pub report_id: Uuid,
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
}

impl ReportHeader {
    pub fn new() -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
        }
    }
}

impl Default for ReportHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Response for the score command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub header: ReportHeader,
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "talentId")]
    pub talent_id: String,
    pub result: MatchResult,
    pub requirements: RequirementSummary,
}

/// Response for the suggest command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    #[serde(flatten)]
    pub header: ReportHeader,
    pub suggestions: Vec<MatchSuggestion>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the catalog search commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse<T> {
    pub total: usize,
    pub items: Vec<T>,
}
