use std::sync::Arc;

use validator::Validate;

use crate::core::requirements::{evaluate_requirements_with, summarize_checks, LiteralJudge, RequirementJudge};
use crate::core::scoring::calculate_match_score;
use crate::error::EvaluationError;
use crate::models::{CheckRequirement, MatchResult, Project, RequirementCheck, RequirementSummary, Talent};

/// Stateless compatibility assessment between projects and talents
///
/// Holds only the requirement judge, so clones are cheap and calls are reentrant.
#[derive(Clone)]
pub struct MatchEvaluator {
    judge: Arc<dyn RequirementJudge>,
}

impl MatchEvaluator {
    pub fn new() -> Self {
        Self {
            judge: Arc::new(LiteralJudge),
        }
    }

    /// Swap the requirement judge, e.g. for a model-backed one
    pub fn with_judge(judge: Arc<dyn RequirementJudge>) -> Self {
        Self { judge }
    }

    pub fn judge_name(&self) -> &'static str {
        self.judge.name()
    }

    pub fn compute_match_score(&self, project: &Project, talent: &Talent) -> MatchResult {
        calculate_match_score(project, talent)
    }

    /// Same as `compute_match_score`, but rejects inputs that break the record contract
    pub fn try_compute_match_score(&self, project: &Project, talent: &Talent) -> Result<MatchResult, EvaluationError> {
        validate_project(project)?;
        validate_talent(talent)?;
        Ok(self.compute_match_score(project, talent))
    }

    /// One check per requirement, in input order
    pub fn evaluate_requirements(&self, requirements: &[CheckRequirement], talent: &Talent) -> Vec<RequirementCheck> {
        evaluate_requirements_with(self.judge.as_ref(), requirements, talent)
    }

    /// Evaluate requirements and fold them into a priority-weighted summary
    pub fn summarize_requirements(&self, requirements: &[CheckRequirement], talent: &Talent) -> RequirementSummary {
        summarize_checks(requirements, self.evaluate_requirements(requirements, talent))
    }
}

impl Default for MatchEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MatchEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEvaluator")
            .field("judge", &self.judge.name())
            .finish()
    }
}

pub fn validate_project(project: &Project) -> Result<(), EvaluationError> {
    if !project.budget.is_finite() {
        return Err(EvaluationError::NonFinite {
            record: format!("project {}", project.id),
            field: "budget",
        });
    }
    project.validate()?;
    for requirement in &project.check_requirements {
        requirement.validate()?;
    }
    Ok(())
}

pub fn validate_talent(talent: &Talent) -> Result<(), EvaluationError> {
    if !talent.hourly_rate.is_finite() {
        return Err(EvaluationError::NonFinite {
            record: format!("talent {}", talent.id),
            field: "hourlyRate",
        });
    }
    talent.validate()?;
    Ok(())
}
