use serde::{Deserialize, Serialize};

use crate::models::{Availability, Project, ProjectStatus, Talent, WorkStyle};

/// Check if a talent can be proposed at all
///
/// This is Stage 1 of the talent suggestion pipeline.
#[inline]
pub fn is_staffable(talent: &Talent) -> bool {
    talent.availability != Availability::Unavailable
}

/// Check if a project is accepting candidates
#[inline]
pub fn is_open_project(project: &Project) -> bool {
    project.status == ProjectStatus::Active
}

/// Search constraints for the project list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFilter {
    pub query: Option<String>,
    pub status: Option<ProjectStatus>,
    #[serde(rename = "workStyle")]
    pub work_style: Option<WorkStyle>,
}

/// Search constraints for the talent list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TalentFilter {
    pub query: Option<String>,
    pub availability: Option<Availability>,
    #[serde(rename = "workStyle")]
    pub work_style: Option<WorkStyle>,
}

/// Check if a project passes the filter
///
/// The query is a case-insensitive substring of the title, the company or any required skill.
pub fn matches_project_filter(project: &Project, filter: &ProjectFilter) -> bool {
    if let Some(status) = filter.status {
        if project.status != status {
            return false;
        }
    }

    if let Some(work_style) = filter.work_style {
        if project.work_style != work_style {
            return false;
        }
    }

    match normalized_query(filter.query.as_deref()) {
        Some(query) => {
            contains_ci(&project.title, &query)
                || contains_ci(&project.company, &query)
                || project.required_skills.iter().any(|skill| contains_ci(skill, &query))
        }
        None => true,
    }
}

/// Check if a talent passes the filter
///
/// The query is a case-insensitive substring of the name, the title or any skill.
pub fn matches_talent_filter(talent: &Talent, filter: &TalentFilter) -> bool {
    if let Some(availability) = filter.availability {
        if talent.availability != availability {
            return false;
        }
    }

    if let Some(work_style) = filter.work_style {
        if talent.work_style != work_style {
            return false;
        }
    }

    match normalized_query(filter.query.as_deref()) {
        Some(query) => {
            contains_ci(&talent.name, &query)
                || contains_ci(&talent.title, &query)
                || talent.skills.iter().any(|skill| contains_ci(skill, &query))
        }
        None => true,
    }
}

/// Projects passing the filter, in catalog order
pub fn filter_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| matches_project_filter(project, filter))
        .collect()
}

/// Talents passing the filter, in catalog order
pub fn filter_talents<'a>(talents: &'a [Talent], filter: &TalentFilter) -> Vec<&'a Talent> {
    talents
        .iter()
        .filter(|talent| matches_talent_filter(talent, filter))
        .collect()
}

/// Lowercased, trimmed query; blank queries match everything
fn normalized_query(query: Option<&str>) -> Option<String> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}

#[inline]
fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
