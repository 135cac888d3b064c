use std::collections::HashSet;

use crate::models::{
    CheckRequirement, RequirementCategory, RequirementCheck, RequirementPriority, RequirementStatus,
    RequirementSummary, Talent,
};

/// Score reported when a requirement cannot be checked mechanically
pub const UNKNOWN_SCORE: u8 = 50;

/// Words that carry no checkable meaning in free-text criteria
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "or", "the", "of", "in", "on", "at", "to", "for", "with", "by", "as", "is",
    "are", "be", "must", "should", "have", "has", "having", "can", "able", "ability", "least",
    "more", "than", "over", "plus", "year", "years", "yrs", "experience", "experienced", "skill",
    "skills", "knowledge", "required", "requirement", "preferred", "nice", "level", "strong",
    "good", "solid", "basic", "advanced", "practical", "hands", "proficient", "proficiency",
    "familiar", "familiarity", "understanding", "work", "working", "development", "developing",
    "using", "use", "etc", "such", "like", "any", "some", "other", "candidate", "holds", "hold",
    "certified", "certification", "language", "business", "fluent", "native", "professional",
    "production",
];

/// Words that mark the number before them as a year count
const YEAR_MARKERS: &[&str] = &["year", "yr", "年"];

/// Judges a single check requirement against a talent profile
///
/// Implementations must be deterministic and must return a check whose
/// `requirement_id` is the requirement's id. `evaluate_requirements_with`
/// guarantees one output per input, in input order.
pub trait RequirementJudge: Send + Sync {
    fn judge(&self, requirement: &CheckRequirement, talent: &Talent) -> RequirementCheck;

    /// Backend name, reported for transparency
    fn name(&self) -> &'static str;
}

/// Literal keyword judge. Fast, deterministic, no model call.
///
/// Algorithm:
/// 1. Extract keywords from the criteria, or from the title when the criteria have none
/// 2. Look each keyword up in the talent's skills, bio and title. A keyword that does not
///    match a token exactly still hits a skill whose name appears inside it, which covers
///    unspaced text such as "プロフィールにReactの実務経験"
/// 3. Decide the status per category:
///    - skill: all keywords in skills → pass, some evidence → partial, none → fail
///    - experience: a year count (criteria first, then title) is compared to `talent.experience`;
///      otherwise keywords anywhere in the profile decide pass/partial/fail
///    - certification, language: no structured data, so missing evidence → unknown
///    - other: evidence is at best partial, missing evidence → unknown
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralJudge;

impl RequirementJudge for LiteralJudge {
    fn judge(&self, requirement: &CheckRequirement, talent: &Talent) -> RequirementCheck {
        let index = ProfileIndex::new(talent);
        let keywords = extract_keywords(requirement);

        let verdict = match requirement.category {
            RequirementCategory::Skill => judge_skill(&keywords, &index),
            RequirementCategory::Experience => judge_experience(requirement, &keywords, &index, talent),
            RequirementCategory::Certification | RequirementCategory::Language => {
                judge_unstructured(requirement.category, &keywords, &index)
            }
            RequirementCategory::Other => judge_other(&keywords, &index),
        };

        RequirementCheck {
            requirement_id: requirement.id.clone(),
            status: verdict.status,
            score: verdict.score,
            reasoning: verdict.reasoning,
            evidence: verdict.evidence,
        }
    }

    fn name(&self) -> &'static str {
        "literal"
    }
}

/// Evaluate requirements with the literal judge
pub fn evaluate_requirements(requirements: &[CheckRequirement], talent: &Talent) -> Vec<RequirementCheck> {
    evaluate_requirements_with(&LiteralJudge, requirements, talent)
}

/// Evaluate requirements with any judge, one check per requirement in input order
pub fn evaluate_requirements_with(
    judge: &dyn RequirementJudge,
    requirements: &[CheckRequirement],
    talent: &Talent,
) -> Vec<RequirementCheck> {
    requirements
        .iter()
        .map(|requirement| judge.judge(requirement, talent))
        .collect()
}

/// Combine checks into a priority-weighted aggregate (must=3, should=2, nice=1)
///
/// `checks` must be aligned with `requirements`. An empty list aggregates to 100.
pub fn summarize_checks(requirements: &[CheckRequirement], checks: Vec<RequirementCheck>) -> RequirementSummary {
    let mut weighted = 0u32;
    let mut total_weight = 0u32;
    let mut must_failures = Vec::new();

    debug_assert_eq!(
        requirements.len(),
        checks.len(),
        "checks must align with requirements"
    );

    for (requirement, check) in requirements.iter().zip(&checks) {
        let weight = requirement.priority.weight();
        weighted += u32::from(check.score) * weight;
        total_weight += weight;

        if requirement.priority == RequirementPriority::Must && check.status == RequirementStatus::Fail {
            must_failures.push(requirement.id.clone());
        }
    }

    let aggregate_score = if total_weight == 0 {
        100
    } else {
        (f64::from(weighted) / f64::from(total_weight)).round().min(100.0) as u8
    };

    RequirementSummary {
        checks,
        aggregate_score,
        must_failures,
    }
}

struct Verdict {
    status: RequirementStatus,
    score: u8,
    reasoning: String,
    evidence: Vec<String>,
}

impl Verdict {
    fn unknown(reasoning: impl Into<String>) -> Self {
        Self {
            status: RequirementStatus::Unknown,
            score: UNKNOWN_SCORE,
            reasoning: reasoning.into(),
            evidence: vec![],
        }
    }
}

/// Score inside the band of a status, monotonic in coverage (0.0-1.0)
fn band_score(status: RequirementStatus, coverage: f64) -> u8 {
    let coverage = coverage.clamp(0.0, 1.0);
    match status {
        RequirementStatus::Pass => (80.0 + 20.0 * coverage).round() as u8,
        RequirementStatus::Partial => (40.0 + 30.0 * coverage).round() as u8,
        RequirementStatus::Fail => (20.0 * coverage).round() as u8,
        RequirementStatus::Unknown => UNKNOWN_SCORE,
    }
}

struct SkillEntry<'a> {
    name: &'a str,
    lowered: String,
    tokens: HashSet<String>,
}

/// Lowercased token sets of the profile fields a judge may cite
struct ProfileIndex<'a> {
    skills: Vec<SkillEntry<'a>>,
    bio: HashSet<String>,
    bio_text: String,
    title: HashSet<String>,
}

impl<'a> ProfileIndex<'a> {
    fn new(talent: &'a Talent) -> Self {
        let skills = talent
            .skills
            .iter()
            .map(|skill| {
                let lowered = skill.trim().to_lowercase();
                let mut tokens: HashSet<String> = tokenize(skill).into_iter().collect();
                tokens.insert(lowered.clone());
                SkillEntry {
                    name: skill.as_str(),
                    lowered,
                    tokens,
                }
            })
            .collect();

        Self {
            skills,
            bio: tokenize(&talent.bio).into_iter().collect(),
            bio_text: talent.bio.to_lowercase(),
            title: tokenize(&talent.title).into_iter().collect(),
        }
    }

    /// Skills matching a keyword: an exact token match, else every skill named inside the keyword
    fn skills_for(&self, keyword: &str) -> Vec<&'a str> {
        if let Some(entry) = self.skills.iter().find(|entry| entry.tokens.contains(keyword)) {
            return vec![entry.name];
        }

        self.skills
            .iter()
            .filter(|entry| contains_term(keyword, &entry.lowered))
            .map(|entry| entry.name)
            .collect()
    }

    fn bio_mentions(&self, keyword: &str) -> bool {
        self.bio.contains(keyword) || contains_term(&self.bio_text, keyword)
    }
}

/// Whether `needle` occurs in `haystack` without touching an ASCII word on either side
///
/// CJK neighbours count as boundaries, so "react" is found in "プロフィールにreactの"
/// while "go" is not found in "golang".
fn contains_term(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let mut after = haystack[start + needle.len()..].chars();
        let joined_before = before.is_some_and(is_word_char);
        let joined_after = match after.next() {
            Some('.') => after.next().is_some_and(|c| c.is_ascii_alphanumeric()),
            Some(c) => is_word_char(c),
            None => false,
        };
        !joined_before && !joined_after
    })
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '#')
}

/// Where each keyword of a requirement was found
#[derive(Default)]
struct KeywordHits {
    total: usize,
    in_skills: usize,
    elsewhere: usize,
    missing: Vec<String>,
    evidence: Vec<String>,
}

impl KeywordHits {
    fn found(&self) -> usize {
        self.in_skills + self.elsewhere
    }

    fn coverage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.found() as f64 / self.total as f64
    }
}

fn find_keywords(keywords: &[String], index: &ProfileIndex<'_>, search_title: bool) -> KeywordHits {
    let mut hits = KeywordHits {
        total: keywords.len(),
        ..KeywordHits::default()
    };

    for keyword in keywords {
        let skills = index.skills_for(keyword);
        let entries: Vec<String> = if !skills.is_empty() {
            hits.in_skills += 1;
            skills.iter().map(|skill| format!("skill: {}", skill)).collect()
        } else if index.bio_mentions(keyword) {
            hits.elsewhere += 1;
            vec![format!("bio: \"{}\"", keyword)]
        } else if search_title && index.title.contains(keyword) {
            hits.elsewhere += 1;
            vec![format!("title: \"{}\"", keyword)]
        } else {
            hits.missing.push(keyword.clone());
            continue;
        };

        for entry in entries {
            if !hits.evidence.contains(&entry) {
                hits.evidence.push(entry);
            }
        }
    }

    hits
}

fn judge_skill(keywords: &[String], index: &ProfileIndex<'_>) -> Verdict {
    if keywords.is_empty() {
        return Verdict::unknown("No checkable keywords in the requirement");
    }

    let hits = find_keywords(keywords, index, false);
    let (status, reasoning) = if hits.in_skills == hits.total {
        (
            RequirementStatus::Pass,
            format!("All {} keyword(s) are listed skills", hits.total),
        )
    } else if hits.found() > 0 {
        (
            RequirementStatus::Partial,
            format!(
                "Matched {} of {} keyword(s); missing from skills: {}",
                hits.found(),
                hits.total,
                missing_or_bio_only(&hits)
            ),
        )
    } else {
        (
            RequirementStatus::Fail,
            format!("None of the keywords appear in the profile: {}", hits.missing.join(", ")),
        )
    };

    Verdict {
        status,
        score: band_score(status, hits.coverage()),
        reasoning,
        evidence: hits.evidence,
    }
}

fn missing_or_bio_only(hits: &KeywordHits) -> String {
    if hits.missing.is_empty() {
        "found only outside the skill list".to_string()
    } else {
        hits.missing.join(", ")
    }
}

fn judge_experience(
    requirement: &CheckRequirement,
    keywords: &[String],
    index: &ProfileIndex<'_>,
    talent: &Talent,
) -> Verdict {
    let required_years = marked_years(&requirement.criteria)
        .or_else(|| marked_years(&requirement.title))
        .or_else(|| extract_years(&requirement.criteria));

    let Some(required_years) = required_years else {
        return judge_keywords_anywhere(keywords, index);
    };

    let years = talent.experience;
    let evidence = vec![format!("experience: {} years", years)];
    let coverage = if required_years == 0 {
        1.0
    } else {
        f64::from(years) / f64::from(required_years)
    };

    let (status, reasoning) = if years >= required_years {
        (
            RequirementStatus::Pass,
            format!("{} years of experience meets the {} year requirement", years, required_years),
        )
    } else if years.saturating_mul(2) >= required_years {
        (
            RequirementStatus::Partial,
            format!("{} years of experience is short of the {} year requirement", years, required_years),
        )
    } else {
        (
            RequirementStatus::Fail,
            format!("{} years of experience is well below the {} year requirement", years, required_years),
        )
    };

    Verdict {
        status,
        score: band_score(status, coverage),
        reasoning,
        evidence,
    }
}

fn judge_keywords_anywhere(keywords: &[String], index: &ProfileIndex<'_>) -> Verdict {
    if keywords.is_empty() {
        return Verdict::unknown("No year count or checkable keywords in the requirement");
    }

    let hits = find_keywords(keywords, index, true);
    let (status, reasoning) = if hits.found() == hits.total {
        (
            RequirementStatus::Pass,
            format!("All {} keyword(s) found in the profile", hits.total),
        )
    } else if hits.found() > 0 {
        (
            RequirementStatus::Partial,
            format!("Matched {} of {} keyword(s); missing: {}", hits.found(), hits.total, hits.missing.join(", ")),
        )
    } else {
        (
            RequirementStatus::Fail,
            format!("None of the keywords appear in the profile: {}", hits.missing.join(", ")),
        )
    };

    Verdict {
        status,
        score: band_score(status, hits.coverage()),
        reasoning,
        evidence: hits.evidence,
    }
}

fn judge_unstructured(category: RequirementCategory, keywords: &[String], index: &ProfileIndex<'_>) -> Verdict {
    let label = match category {
        RequirementCategory::Certification => "certification",
        _ => "language",
    };

    if keywords.is_empty() {
        return Verdict::unknown(format!("No {} data on the profile and no checkable keywords", label));
    }

    let hits = find_keywords(keywords, index, false);
    let (status, reasoning) = if hits.found() == hits.total {
        (
            RequirementStatus::Pass,
            format!("All {} keyword(s) mentioned in the profile", hits.total),
        )
    } else if hits.found() > 0 {
        (
            RequirementStatus::Partial,
            format!("Matched {} of {} keyword(s); missing: {}", hits.found(), hits.total, hits.missing.join(", ")),
        )
    } else {
        return Verdict::unknown(format!(
            "No {} data on the profile and no mention of: {}",
            label,
            hits.missing.join(", ")
        ));
    };

    Verdict {
        status,
        score: band_score(status, hits.coverage()),
        reasoning,
        evidence: hits.evidence,
    }
}

fn judge_other(keywords: &[String], index: &ProfileIndex<'_>) -> Verdict {
    let hits = find_keywords(keywords, index, true);
    if hits.found() == 0 {
        return Verdict::unknown("Requirement cannot be checked mechanically");
    }

    Verdict {
        status: RequirementStatus::Partial,
        score: band_score(RequirementStatus::Partial, hits.coverage()),
        reasoning: format!("Profile mentions {} of {} keyword(s); needs manual review", hits.found(), hits.total),
        evidence: hits.evidence,
    }
}

/// Significant lowercase keywords of a requirement's criteria, in order
///
/// The title is only a label; its words are used when the criteria carry none.
pub fn extract_keywords(requirement: &CheckRequirement) -> Vec<String> {
    let keywords = keywords_of(&requirement.criteria);
    if keywords.is_empty() {
        keywords_of(&requirement.title)
    } else {
        keywords
    }
}

fn keywords_of(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    for token in tokenize(text) {
        if STOP_WORDS.contains(&token.as_str()) || is_numeric(&token) {
            continue;
        }
        if !keywords.contains(&token) {
            keywords.push(token);
        }
    }

    keywords
}

/// Year count in the text
///
/// A number followed by a year marker ("3+ years", "5 yrs", "3年以上") wins over
/// bare numbers such as versions; otherwise the first whole number is used.
pub fn extract_years(text: &str) -> Option<u32> {
    marked_years(text).or_else(|| numbers(text).first().map(|(value, _)| *value))
}

fn marked_years(text: &str) -> Option<u32> {
    numbers(text)
        .into_iter()
        .find(|(_, rest)| {
            let rest = rest
                .trim_start_matches(|c: char| c.is_whitespace() || c == '+')
                .to_lowercase();
            YEAR_MARKERS.iter().any(|marker| rest.starts_with(marker))
        })
        .map(|(value, _)| value)
}

/// Whole numbers in the text, each with the text that follows it
fn numbers(text: &str) -> Vec<(u32, &str)> {
    let mut found = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        let digits = &rest[start..];
        let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
        if let Ok(value) = digits[..end].parse() {
            found.push((value, &digits[end..]));
        }
        rest = &digits[end..];
    }

    found
}

/// Split text into lowercase tokens, keeping `+`, `#` and inner `.` (C++, C#, Node.js)
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.')))
        .map(|token| token.trim_matches('.').to_lowercase())
        .filter(|token| token.chars().count() >= 2)
        .collect()
}

#[inline]
fn is_numeric(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit() || c == '+' || c == '.')
}
