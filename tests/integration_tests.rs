// Integration tests for Talent Match

use std::path::PathBuf;

use talent_match::cli::commands::{load_catalog, score, search_projects, search_talents, suggest};
use talent_match::core::{filters::{ProjectFilter, TalentFilter}, MatchEvaluator, Matcher};
use talent_match::error::AppError;
use talent_match::models::{Availability, Catalog, RequirementStatus, ScoreRequest, SuggestRequest};

fn sample_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/catalog.json");
    load_catalog(&path).expect("sample catalog should load")
}

#[test]
fn test_integration_score_with_requirements() {
    let catalog = sample_catalog();
    let matcher = Matcher::default();

    let response = score(
        &ScoreRequest {
            project_id: "p-001".to_string(),
            talent_id: "t-001".to_string(),
        },
        &matcher,
        &catalog,
    )
    .unwrap();

    assert_eq!(response.result.match_score, 77);
    assert_eq!(response.result.missing_skills, vec!["Node.js"]);

    let statuses: Vec<RequirementStatus> = response.requirements.checks.iter().map(|c| c.status).collect();
    assert_eq!(
        statuses,
        vec![RequirementStatus::Pass, RequirementStatus::Pass, RequirementStatus::Pass]
    );
    assert!(response.requirements.must_failures.is_empty());
    assert!(response.requirements.aggregate_score >= 80);
}

#[test]
fn test_integration_suggest_talents() {
    let catalog = sample_catalog();
    let matcher = Matcher::default();

    let response = suggest(
        &SuggestRequest {
            project_id: Some("p-001".to_string()),
            talent_id: None,
            limit: 10,
        },
        &matcher,
        &catalog,
    )
    .unwrap();

    let ids: Vec<&str> = response.suggestions.iter().map(|s| s.talent_id.as_str()).collect();

    // t-003 scores under the cut-off, t-005 is unavailable
    assert_eq!(ids, vec!["t-002", "t-001", "t-004"]);
    assert_eq!(response.total_candidates, 5);

    let scores: Vec<u8> = response.suggestions.iter().map(|s| s.match_score).collect();
    assert_eq!(scores, vec![100, 77, 38]);

    for suggestion in &response.suggestions {
        assert_eq!(suggestion.requirement_checks.as_ref().map(Vec::len), Some(3));
    }
}

#[test]
fn test_integration_suggest_projects() {
    let catalog = sample_catalog();
    let matcher = Matcher::new(MatchEvaluator::new(), 30);

    let response = suggest(
        &SuggestRequest {
            project_id: None,
            talent_id: Some("t-003".to_string()),
            limit: 10,
        },
        &matcher,
        &catalog,
    )
    .unwrap();

    let ids: Vec<&str> = response.suggestions.iter().map(|s| s.project_id.as_str()).collect();
    assert_eq!(ids, vec!["p-002", "p-004"]);
    assert!(response.suggestions[0].requirement_checks.is_none());
}

#[test]
fn test_integration_limit() {
    let catalog = sample_catalog();

    let response = suggest(
        &SuggestRequest {
            project_id: Some("p-001".to_string()),
            talent_id: None,
            limit: 1,
        },
        &Matcher::default(),
        &catalog,
    )
    .unwrap();

    assert_eq!(response.suggestions.len(), 1);
    assert_eq!(response.suggestions[0].talent_id, "t-002");
}

#[test]
fn test_integration_search() {
    let catalog = sample_catalog();

    let projects = search_projects(
        &ProjectFilter {
            query: Some("SHOPWELL".to_string()),
            ..ProjectFilter::default()
        },
        &catalog,
    );
    let ids: Vec<&str> = projects.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p-001", "p-004"]);

    let talents = search_talents(
        &TalentFilter {
            availability: Some(Availability::Available),
            ..TalentFilter::default()
        },
        &catalog,
    );
    assert_eq!(talents.total, 3);
}

#[test]
fn test_integration_invalid_catalog_rejected() {
    let path = std::env::temp_dir().join(format!("talent-match-bad-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"projects": [], "talents": [{"id": "t", "experience": 1, "workStyle": "remote", "hourlyRate": -5, "availability": "busy"}]}"#,
    )
    .unwrap();

    let result = load_catalog(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(AppError::Evaluation(_))));
}

#[test]
fn test_integration_score_serializes_camel_case() {
    let catalog = sample_catalog();
    let response = score(
        &ScoreRequest {
            project_id: "p-002".to_string(),
            talent_id: "t-003".to_string(),
        },
        &Matcher::default(),
        &catalog,
    )
    .unwrap();

    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["result"]["matchScore"], 100);
    assert!(value["result"]["matchedSkills"].is_array());
    assert_eq!(value["requirements"]["aggregateScore"], 100);
    assert!(value["reportId"].is_string());
    assert!(value["generatedAt"].is_string());
}
