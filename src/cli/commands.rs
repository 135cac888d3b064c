use std::path::Path;

use validator::Validate;

use crate::cli::Commands;
use crate::config::Settings;
use crate::core::{
    evaluator::{validate_project, validate_talent},
    filters::{filter_projects, filter_talents, ProjectFilter, TalentFilter},
    Matcher,
};
use crate::error::AppError;
use crate::models::{
    Catalog, Project, ReportHeader, ScoreRequest, ScoreResponse, SearchResponse, SuggestRequest, SuggestResponse,
    Talent,
};

/// Read and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog, AppError> {
    tracing::debug!("Loading catalog from {}", path.display());

    let raw = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&raw)?;

    for project in &catalog.projects {
        validate_project(project)?;
    }
    for talent in &catalog.talents {
        validate_talent(talent)?;
    }

    tracing::info!(
        projects = catalog.projects.len(),
        talents = catalog.talents.len(),
        "Catalog loaded"
    );

    Ok(catalog)
}

/// Run a command against the catalog and render its JSON output
pub fn execute(
    command: &Commands,
    settings: &Settings,
    matcher: &Matcher,
    catalog: &Catalog,
) -> Result<String, AppError> {
    let rendered = match command {
        Commands::Score { project, talent } => {
            let request = ScoreRequest {
                project_id: project.clone(),
                talent_id: talent.clone(),
            };
            serde_json::to_string_pretty(&score(&request, matcher, catalog)?)?
        }
        Commands::Suggest { project, talent, limit } => {
            let request = SuggestRequest {
                project_id: project.clone(),
                talent_id: talent.clone(),
                limit: settings.matching.effective_limit(*limit) as u16,
            };
            serde_json::to_string_pretty(&suggest(&request, matcher, catalog)?)?
        }
        Commands::Projects { query, status, work_style } => {
            let filter = ProjectFilter {
                query: query.clone(),
                status: *status,
                work_style: *work_style,
            };
            serde_json::to_string_pretty(&search_projects(&filter, catalog))?
        }
        Commands::Talents { query, availability, work_style } => {
            let filter = TalentFilter {
                query: query.clone(),
                availability: *availability,
                work_style: *work_style,
            };
            serde_json::to_string_pretty(&search_talents(&filter, catalog))?
        }
    };

    Ok(rendered)
}

/// Score one pair
pub fn score(request: &ScoreRequest, matcher: &Matcher, catalog: &Catalog) -> Result<ScoreResponse, AppError> {
    if let Err(errors) = request.validate() {
        tracing::info!("Validation failed for score request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let project = find_project(catalog, &request.project_id)?;
    let talent = find_talent(catalog, &request.talent_id)?;

    tracing::info!("Scoring project {} against talent {}", project.id, talent.id);

    let evaluator = matcher.evaluator();
    let result = evaluator.try_compute_match_score(project, talent)?;
    let requirements = evaluator.summarize_requirements(&project.check_requirements, talent);

    Ok(ScoreResponse {
        header: ReportHeader::new(),
        project_id: project.id.clone(),
        talent_id: talent.id.clone(),
        result,
        requirements,
    })
}

/// Rank candidates for whichever side the request names
pub fn suggest(request: &SuggestRequest, matcher: &Matcher, catalog: &Catalog) -> Result<SuggestResponse, AppError> {
    if let Err(errors) = request.validate() {
        tracing::info!("Validation failed for suggest request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let limit = request.limit as usize;
    let result = match (&request.project_id, &request.talent_id) {
        (Some(project_id), None) => {
            let project = find_project(catalog, project_id)?;
            tracing::info!("Suggesting talents for project: {}, limit: {}", project_id, limit);
            matcher.suggest_talents(project, &catalog.talents, limit)
        }
        (None, Some(talent_id)) => {
            let talent = find_talent(catalog, talent_id)?;
            tracing::info!("Suggesting projects for talent: {}, limit: {}", talent_id, limit);
            matcher.suggest_projects(talent, &catalog.projects, limit)
        }
        _ => {
            return Err(AppError::BadRequest(
                "exactly one of projectId or talentId is required".to_string(),
            ))
        }
    };

    Ok(SuggestResponse {
        header: ReportHeader::new(),
        suggestions: result.suggestions,
        total_candidates: result.total_candidates,
    })
}

pub fn search_projects(filter: &ProjectFilter, catalog: &Catalog) -> SearchResponse<Project> {
    let items: Vec<Project> = filter_projects(&catalog.projects, filter)
        .into_iter()
        .cloned()
        .collect();
    tracing::debug!("Project search matched {} of {}", items.len(), catalog.projects.len());

    SearchResponse {
        total: items.len(),
        items,
    }
}

pub fn search_talents(filter: &TalentFilter, catalog: &Catalog) -> SearchResponse<Talent> {
    let items: Vec<Talent> = filter_talents(&catalog.talents, filter)
        .into_iter()
        .cloned()
        .collect();
    tracing::debug!("Talent search matched {} of {}", items.len(), catalog.talents.len());

    SearchResponse {
        total: items.len(),
        items,
    }
}

fn find_project<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Project, AppError> {
    catalog
        .project(id)
        .ok_or_else(|| AppError::NotFound(format!("project {}", id)))
}

fn find_talent<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Talent, AppError> {
    catalog
        .talent(id)
        .ok_or_else(|| AppError::NotFound(format!("talent {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "projects": [
            {
                "id": "p1",
                "title": "EC Site Renewal",
                "company": "Shop Inc",
                "requiredSkills": ["React", "TypeScript", "Node.js"],
                "preferredSkills": ["AWS"],
                "workStyle": "remote",
                "experienceLevel": "senior",
                "budget": 1200000,
                "checkRequirements": [
                    {"id": "r1", "category": "skill", "title": "React", "priority": "must", "criteria": "React and TypeScript"},
                    {"id": "r2", "category": "certification", "title": "PMP", "priority": "nice", "criteria": "PMP"}
                ]
            }
        ],
        "talents": [
            {
                "id": "t1",
                "name": "Hana Sato",
                "title": "Frontend Engineer",
                "skills": ["React", "TypeScript"],
                "experience": 5,
                "workStyle": "remote",
                "hourlyRate": 6000,
                "availability": "available"
            }
        ]
    }"#;

    fn catalog() -> Catalog {
        serde_json::from_str(CATALOG).unwrap()
    }

    #[test]
    fn test_score_request() {
        let request = ScoreRequest {
            project_id: "p1".to_string(),
            talent_id: "t1".to_string(),
        };

        let response = score(&request, &Matcher::default(), &catalog()).unwrap();

        assert_eq!(response.result.match_score, 77);
        assert_eq!(response.requirements.checks.len(), 2);
        assert_eq!(response.requirements.checks[0].requirement_id, "r1");
    }

    #[test]
    fn test_score_unknown_talent() {
        let request = ScoreRequest {
            project_id: "p1".to_string(),
            talent_id: "missing".to_string(),
        };

        let err = score(&request, &Matcher::default(), &catalog()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_score_rejects_empty_ids() {
        let request = ScoreRequest {
            project_id: String::new(),
            talent_id: "t1".to_string(),
        };

        let err = score(&request, &Matcher::default(), &catalog()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_suggest_requires_one_side() {
        let request = SuggestRequest {
            project_id: None,
            talent_id: None,
            limit: 5,
        };

        let err = suggest(&request, &Matcher::default(), &catalog()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_execute_renders_json() {
        let command = Commands::Talents {
            query: Some("hana".to_string()),
            availability: None,
            work_style: None,
        };

        let output = execute(&command, &Settings::default(), &Matcher::default(), &catalog()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["total"], 1);
        assert_eq!(value["items"][0]["hourlyRate"], 6000.0);
    }
}
