//! Talent Match - compatibility scoring for a talent-staffing marketplace
//!
//! This library scores how well a talent fits a project, checks free-text
//! screening requirements against a talent profile, and ranks candidates.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, evaluate_requirements, LiteralJudge, MatchEvaluator, Matcher, RequirementJudge};
pub use crate::error::{AppError, EvaluationError};
pub use crate::models::{CheckRequirement, MatchResult, MatchSuggestion, Project, RequirementCheck, RequirementSummary, Talent};
