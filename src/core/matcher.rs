use std::cmp::Ordering;

use crate::core::{
    evaluator::MatchEvaluator,
    filters::{is_open_project, is_staffable},
    scoring::{matching_preferred_skills, SENIOR_EXPERIENCE_YEARS},
};
use crate::models::{
    Availability, MatchResult, MatchSuggestion, Project, RequirementSummary, Talent,
};

/// Default minimum match score for a pairing to be suggested
pub const DEFAULT_MIN_SCORE: u8 = 30;

/// Result of the ranking process
#[derive(Debug)]
pub struct SuggestionResult {
    pub suggestions: Vec<MatchSuggestion>,
    pub total_candidates: usize,
}

/// Ranking orchestrator - implements the multi-stage suggestion pipeline
///
/// # Pipeline Stages
/// 1. Eligibility filter (talent availability or project status)
/// 2. Match scoring
/// 3. Minimum score cut-off
/// 4. Requirement checks, reasons and concerns
/// 5. Ranking and truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    evaluator: MatchEvaluator,
    min_score: u8,
}

impl Matcher {
    pub fn new(evaluator: MatchEvaluator, min_score: u8) -> Self {
        Self { evaluator, min_score }
    }

    pub fn with_default_evaluator() -> Self {
        Self::new(MatchEvaluator::new(), DEFAULT_MIN_SCORE)
    }

    pub fn evaluator(&self) -> &MatchEvaluator {
        &self.evaluator
    }

    /// Rank talents for a project
    ///
    /// # Arguments
    /// * `project` - The project to staff
    /// * `talents` - All candidate talents
    /// * `limit` - Maximum number of suggestions to return
    ///
    /// # Returns
    /// SuggestionResult sorted by score, then hourly rate (cheapest first), then id
    pub fn suggest_talents(&self, project: &Project, talents: &[Talent], limit: usize) -> SuggestionResult {
        let total_candidates = talents.len();

        let mut scored: Vec<(MatchSuggestion, f64)> = talents
            .iter()
            // Stage 1: Eligibility
            .filter(|talent| is_staffable(talent))
            // Stage 2-4: Score and explain
            .filter_map(|talent| {
                self.build_suggestion(project, talent)
                    .map(|suggestion| (suggestion, talent.hourly_rate))
            })
            .collect();

        // Stage 5: Rank
        scored.sort_by(|(a, a_rate), (b, b_rate)| {
            b.match_score
                .cmp(&a.match_score)
                .then_with(|| a_rate.partial_cmp(b_rate).unwrap_or(Ordering::Equal))
                .then_with(|| a.talent_id.cmp(&b.talent_id))
        });
        scored.truncate(limit);

        tracing::debug!(
            project_id = %project.id,
            total_candidates,
            suggested = scored.len(),
            "Ranked talents for project"
        );

        SuggestionResult {
            suggestions: scored.into_iter().map(|(suggestion, _)| suggestion).collect(),
            total_candidates,
        }
    }

    /// Rank open projects for a talent
    ///
    /// Sorted by score, then budget (largest first), then id.
    pub fn suggest_projects(&self, talent: &Talent, projects: &[Project], limit: usize) -> SuggestionResult {
        let total_candidates = projects.len();

        let mut scored: Vec<(MatchSuggestion, f64)> = projects
            .iter()
            .filter(|project| is_open_project(project))
            .filter_map(|project| {
                self.build_suggestion(project, talent)
                    .map(|suggestion| (suggestion, project.budget))
            })
            .collect();

        scored.sort_by(|(a, a_budget), (b, b_budget)| {
            b.match_score
                .cmp(&a.match_score)
                .then_with(|| b_budget.partial_cmp(a_budget).unwrap_or(Ordering::Equal))
                .then_with(|| a.project_id.cmp(&b.project_id))
        });
        scored.truncate(limit);

        tracing::debug!(
            talent_id = %talent.id,
            total_candidates,
            suggested = scored.len(),
            "Ranked projects for talent"
        );

        SuggestionResult {
            suggestions: scored.into_iter().map(|(suggestion, _)| suggestion).collect(),
            total_candidates,
        }
    }

    /// Score one pairing and explain it, or `None` when it falls under the cut-off
    pub fn build_suggestion(&self, project: &Project, talent: &Talent) -> Option<MatchSuggestion> {
        let result = self.evaluator.compute_match_score(project, talent);
        if result.match_score < self.min_score {
            tracing::trace!(
                project_id = %project.id,
                talent_id = %talent.id,
                score = result.match_score,
                "Pairing below minimum score"
            );
            return None;
        }

        let requirements = if project.check_requirements.is_empty() {
            None
        } else {
            Some(
                self.evaluator
                    .summarize_requirements(&project.check_requirements, talent),
            )
        };

        let reasons = collect_reasons(project, talent, &result);
        let concerns = collect_concerns(project, talent, &result, requirements.as_ref());

        Some(MatchSuggestion {
            project_id: project.id.clone(),
            talent_id: talent.id.clone(),
            match_score: result.match_score,
            reasons,
            skill_matches: result.matched_skills,
            concerns,
            requirement_checks: requirements.map(|summary| summary.checks),
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_evaluator()
    }
}

fn collect_reasons(project: &Project, talent: &Talent, result: &MatchResult) -> Vec<String> {
    let mut reasons = Vec::new();
    let required = result.matched_skills.len() + result.missing_skills.len();

    if required == 0 {
        reasons.push("Project lists no required skills".to_string());
    } else if !result.matched_skills.is_empty() {
        reasons.push(format!(
            "Covers {} of {} required skills: {}",
            result.matched_skills.len(),
            required,
            result.matched_skills.join(", ")
        ));
    }

    let preferred = matching_preferred_skills(project, talent);
    if !preferred.is_empty() {
        reasons.push(format!("Also brings preferred skills: {}", preferred.join(", ")));
    }

    if talent.experience >= SENIOR_EXPERIENCE_YEARS {
        reasons.push(format!("{} years of experience", talent.experience));
    }

    if talent.work_style == project.work_style {
        reasons.push(format!("Work style matches ({})", project.work_style));
    }

    if talent.availability == Availability::Available {
        reasons.push("Available now".to_string());
    }

    reasons
}

fn collect_concerns(
    project: &Project,
    talent: &Talent,
    result: &MatchResult,
    requirements: Option<&RequirementSummary>,
) -> Vec<String> {
    let mut concerns = Vec::new();

    if !result.missing_skills.is_empty() {
        concerns.push(format!("Missing required skills: {}", result.missing_skills.join(", ")));
    }

    let expected_years = project.experience_level.expected_years();
    if talent.experience < SENIOR_EXPERIENCE_YEARS {
        concerns.push(format!("Only {} years of experience", talent.experience));
    } else if talent.experience < expected_years {
        concerns.push(format!(
            "{} years of experience is below the {} expected for a {} role",
            talent.experience, expected_years, project.experience_level
        ));
    }

    if talent.work_style != project.work_style {
        concerns.push(format!(
            "Work style differs: project is {}, talent prefers {}",
            project.work_style, talent.work_style
        ));
    }

    if talent.availability == Availability::Busy {
        concerns.push("Talent is currently busy".to_string());
    }

    let monthly_cost = talent.monthly_cost();
    if monthly_cost > project.budget {
        concerns.push(format!(
            "Estimated monthly cost {:.0} exceeds the budget of {:.0}",
            monthly_cost, project.budget
        ));
    }

    if let Some(summary) = requirements {
        if !summary.must_failures.is_empty() {
            concerns.push(format!("Fails must-have requirements: {}", summary.must_failures.join(", ")));
        }
    }

    concerns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CheckRequirement, ExperienceLevel, ProjectStatus, RequirementCategory, RequirementPriority, WorkStyle,
    };

    fn create_project(id: &str, status: ProjectStatus, budget: f64) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {}", id),
            company: "Acme".to_string(),
            description: String::new(),
            required_skills: vec!["React".to_string(), "TypeScript".to_string()],
            preferred_skills: vec!["GraphQL".to_string()],
            work_style: WorkStyle::Remote,
            experience_level: ExperienceLevel::Senior,
            budget,
            currency: None,
            status,
            check_requirements: vec![],
        }
    }

    fn create_candidate(
        id: &str,
        skills: &[&str],
        experience: u32,
        availability: Availability,
        hourly_rate: f64,
    ) -> Talent {
        Talent {
            id: id.to_string(),
            name: format!("Talent {}", id),
            title: "Engineer".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience,
            work_style: WorkStyle::Remote,
            hourly_rate,
            availability,
            bio: String::new(),
        }
    }

    #[test]
    fn test_suggest_talents_basic() {
        let matcher = Matcher::with_default_evaluator();
        let project = create_project("p1", ProjectStatus::Active, 1_000_000.0);

        let talents = vec![
            create_candidate("1", &["React", "TypeScript"], 5, Availability::Available, 5000.0),
            create_candidate("2", &["React"], 5, Availability::Unavailable, 5000.0), // Unavailable
            create_candidate("3", &["React"], 1, Availability::Busy, 5000.0),
        ];

        let result = matcher.suggest_talents(&project, &talents, 10);

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.suggestions.len(), 2);
        assert_eq!(result.suggestions[0].talent_id, "1");
        assert_eq!(result.suggestions[0].match_score, 100);
        assert!(result.suggestions[1].concerns.contains(&"Talent is currently busy".to_string()));
    }

    #[test]
    fn test_ties_broken_by_rate_then_id() {
        let matcher = Matcher::with_default_evaluator();
        let project = create_project("p1", ProjectStatus::Active, 1_000_000.0);

        let talents = vec![
            create_candidate("b", &["React", "TypeScript"], 5, Availability::Available, 4000.0),
            create_candidate("c", &["React", "TypeScript"], 5, Availability::Available, 6000.0),
            create_candidate("a", &["React", "TypeScript"], 5, Availability::Available, 4000.0),
        ];

        let result = matcher.suggest_talents(&project, &talents, 10);
        let ids: Vec<&str> = result.suggestions.iter().map(|s| s.talent_id.as_str()).collect();

        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_respects_limit_and_min_score() {
        let matcher = Matcher::new(MatchEvaluator::new(), 50);
        let project = create_project("p1", ProjectStatus::Active, 1_000_000.0);

        let mut talents: Vec<Talent> = (0..10)
            .map(|i| create_candidate(&i.to_string(), &["React"], 5, Availability::Available, 5000.0))
            .collect();
        // 0 skills, 1 year: 10 + 10 = 20 < 50
        talents.push(create_candidate("low", &[], 1, Availability::Available, 5000.0));

        let result = matcher.suggest_talents(&project, &talents, 5);

        assert_eq!(result.suggestions.len(), 5);
        assert!(result.suggestions.iter().all(|s| s.talent_id != "low"));
    }

    #[test]
    fn test_suggest_projects_only_active() {
        let matcher = Matcher::with_default_evaluator();
        let talent = create_candidate("t", &["React", "TypeScript"], 5, Availability::Available, 5000.0);

        let projects = vec![
            create_project("small", ProjectStatus::Active, 900_000.0),
            create_project("draft", ProjectStatus::Draft, 2_000_000.0),
            create_project("big", ProjectStatus::Active, 1_500_000.0),
        ];

        let result = matcher.suggest_projects(&talent, &projects, 10);
        let ids: Vec<&str> = result.suggestions.iter().map(|s| s.project_id.as_str()).collect();

        assert_eq!(ids, vec!["big", "small"]);
    }

    #[test]
    fn test_concerns_and_reasons() {
        let matcher = Matcher::with_default_evaluator();
        let mut project = create_project("p1", ProjectStatus::Active, 500_000.0);
        project.check_requirements = vec![CheckRequirement {
            id: "go".to_string(),
            category: RequirementCategory::Skill,
            title: "Go".to_string(),
            description: String::new(),
            priority: RequirementPriority::Must,
            criteria: "Golang microservices".to_string(),
        }];
        let talent = create_candidate("t", &["React", "GraphQL"], 4, Availability::Available, 5000.0);

        let suggestion = matcher.build_suggestion(&project, &talent).unwrap();

        assert!(suggestion.reasons.iter().any(|r| r.contains("Covers 1 of 2")));
        assert!(suggestion.reasons.iter().any(|r| r.contains("GraphQL")));
        assert!(suggestion.concerns.iter().any(|c| c.contains("TypeScript")));
        assert!(suggestion.concerns.iter().any(|c| c.contains("expected for a senior role")));
        assert!(suggestion.concerns.iter().any(|c| c.contains("exceeds the budget")));
        assert!(suggestion.concerns.iter().any(|c| c.contains("must-have requirements: go")));
        assert_eq!(suggestion.requirement_checks.as_ref().map(Vec::len), Some(1));
    }
}
