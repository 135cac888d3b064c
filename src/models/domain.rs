use serde::{Deserialize, Serialize};
use validator::Validate;

/// How a project expects to be staffed, or how a talent prefers to work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WorkStyle {
    Remote,
    Onsite,
    Hybrid,
}

impl std::fmt::Display for WorkStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WorkStyle::Remote => "remote",
            WorkStyle::Onsite => "onsite",
            WorkStyle::Hybrid => "hybrid",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Expert,
}

impl ExperienceLevel {
    /// Years of experience a talent is expected to bring at this level
    pub fn expected_years(self) -> u32 {
        match self {
            ExperienceLevel::Junior => 0,
            ExperienceLevel::Mid => 3,
            ExperienceLevel::Senior => 5,
            ExperienceLevel::Expert => 8,
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Expert => "expert",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Draft,
    #[default]
    Active,
    Paused,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementCategory {
    Skill,
    Experience,
    Certification,
    Language,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementPriority {
    Must,
    Should,
    Nice,
}

impl RequirementPriority {
    /// Relative weight of a requirement in the aggregate score
    pub fn weight(self) -> u32 {
        match self {
            RequirementPriority::Must => 3,
            RequirementPriority::Should => 2,
            RequirementPriority::Nice => 1,
        }
    }
}

/// Screening criterion attached to a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckRequirement {
    #[validate(length(min = 1))]
    pub id: String,
    pub category: RequirementCategory,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: RequirementPriority,
    #[serde(default)]
    pub criteria: String,
}

/// Staffing project looking for talent
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Project {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    #[serde(rename = "preferredSkills", default)]
    pub preferred_skills: Vec<String>,
    #[serde(rename = "workStyle")]
    pub work_style: WorkStyle,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevel,
    /// Monthly budget
    #[validate(range(min = 0.0))]
    pub budget: f64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(rename = "checkRequirements", default)]
    pub check_requirements: Vec<CheckRequirement>,
}

/// Candidate profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Talent {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Years of professional experience
    pub experience: u32,
    #[serde(rename = "workStyle")]
    pub work_style: WorkStyle,
    #[serde(rename = "hourlyRate")]
    #[validate(range(min = 0.0))]
    pub hourly_rate: f64,
    pub availability: Availability,
    #[serde(default)]
    pub bio: String,
}

impl Talent {
    /// Estimated monthly cost at 160 billable hours
    pub fn monthly_cost(&self) -> f64 {
        self.hourly_rate * 160.0
    }
}

/// In-memory snapshot of everything the dashboard shows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub talents: Vec<Talent>,
}

impl Catalog {
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn talent(&self, id: &str) -> Option<&Talent> {
        self.talents.iter().find(|t| t.id == id)
    }
}

/// Compatibility breakdown between one project and one talent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
    #[serde(rename = "skillScore")]
    pub skill_score: f64,
    #[serde(rename = "experienceScore")]
    pub experience_score: u8,
    #[serde(rename = "workStyleScore")]
    pub work_style_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementStatus {
    Pass,
    Fail,
    Partial,
    Unknown,
}

/// Verdict for a single check requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementCheck {
    #[serde(rename = "requirementId")]
    pub requirement_id: String,
    pub status: RequirementStatus,
    pub score: u8,
    pub reasoning: String,
    pub evidence: Vec<String>,
}

/// All verdicts for a talent plus their priority-weighted aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementSummary {
    pub checks: Vec<RequirementCheck>,
    #[serde(rename = "aggregateScore")]
    pub aggregate_score: u8,
    #[serde(rename = "mustFailures")]
    pub must_failures: Vec<String>,
}

/// Ranked candidate pairing with the reasons behind its score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSuggestion {
    #[serde(rename = "projectId")]
    pub project_id: String,
    #[serde(rename = "talentId")]
    pub talent_id: String,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub reasons: Vec<String>,
    #[serde(rename = "skillMatches")]
    pub skill_matches: Vec<String>,
    pub concerns: Vec<String>,
    #[serde(rename = "requirementChecks", skip_serializing_if = "Option::is_none")]
    pub requirement_checks: Option<Vec<RequirementCheck>>,
}
