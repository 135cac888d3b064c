use crate::models::{MatchResult, Project, Talent};

/// Share of the final score carried by required-skill coverage
pub const SKILL_WEIGHT: f64 = 0.7;

/// Years of experience needed for the upper experience tier
pub const SENIOR_EXPERIENCE_YEARS: u32 = 3;
pub const SENIOR_EXPERIENCE_SCORE: u8 = 20;
pub const JUNIOR_EXPERIENCE_SCORE: u8 = 10;

pub const WORK_STYLE_MATCH_SCORE: u8 = 10;
pub const WORK_STYLE_MISMATCH_SCORE: u8 = 5;

/// Calculate a match score (0-100) between a project and a talent
///
/// Scoring formula:
/// score = min(100, round(
///     skill_score * 0.7 +          # Share of required skills covered, 0-100
///     experience_score +           # 20 at 3+ years, otherwise 10
///     work_style_score             # 10 when work styles agree, otherwise 5
/// ))
///
/// An empty required-skill list counts as fully covered.
pub fn calculate_match_score(project: &Project, talent: &Talent) -> MatchResult {
    // Stage 1: Skill overlap
    let (matched_skills, missing_skills) = partition_required_skills(project, talent);
    let required = matched_skills.len() + missing_skills.len();
    let skill_score = calculate_skill_score(matched_skills.len(), required);

    // Stage 2: Experience tier
    let experience_score = calculate_experience_score(talent.experience);

    // Stage 3: Work style agreement
    let work_style_score = if talent.work_style == project.work_style {
        WORK_STYLE_MATCH_SCORE
    } else {
        WORK_STYLE_MISMATCH_SCORE
    };

    let total = skill_score * SKILL_WEIGHT
        + f64::from(experience_score)
        + f64::from(work_style_score);

    MatchResult {
        match_score: total.round().clamp(0.0, 100.0) as u8,
        matched_skills,
        missing_skills,
        skill_score,
        experience_score,
        work_style_score,
    }
}

/// Split the project's required skills into those the talent has and those it lacks
///
/// Duplicates in the required list are counted once; output keeps the project's order.
pub fn partition_required_skills(project: &Project, talent: &Talent) -> (Vec<String>, Vec<String>) {
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in &project.required_skills {
        if matched.contains(skill) || missing.contains(skill) {
            continue;
        }
        if talent.skills.contains(skill) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    (matched, missing)
}

/// Preferred skills the talent also brings
pub fn matching_preferred_skills(project: &Project, talent: &Talent) -> Vec<String> {
    let mut shared: Vec<String> = Vec::new();
    for skill in &project.preferred_skills {
        if talent.skills.contains(skill) && !shared.contains(skill) {
            shared.push(skill.clone());
        }
    }
    shared
}

/// Calculate skill score (0-100)
#[inline]
fn calculate_skill_score(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 100.0;
    }
    matched as f64 / required as f64 * 100.0
}

#[inline]
fn calculate_experience_score(years: u32) -> u8 {
    if years >= SENIOR_EXPERIENCE_YEARS {
        SENIOR_EXPERIENCE_SCORE
    } else {
        JUNIOR_EXPERIENCE_SCORE
    }
}
