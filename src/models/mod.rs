// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, Catalog, CheckRequirement, ExperienceLevel, MatchResult, MatchSuggestion, Project,
    ProjectStatus, RequirementCategory, RequirementCheck, RequirementPriority, RequirementStatus,
    RequirementSummary, Talent, WorkStyle,
};
pub use requests::{ScoreRequest, SuggestRequest};
pub use responses::{ReportHeader, ScoreResponse, SearchResponse, SuggestResponse};
