// Core algorithm exports
pub mod evaluator;
pub mod filters;
pub mod matcher;
pub mod requirements;
pub mod scoring;

pub use evaluator::MatchEvaluator;
pub use filters::{filter_projects, filter_talents, ProjectFilter, TalentFilter};
pub use matcher::{Matcher, SuggestionResult};
pub use requirements::{evaluate_requirements, LiteralJudge, RequirementJudge};
pub use scoring::calculate_match_score;
