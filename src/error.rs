use thiserror::Error;

/// Errors raised when evaluator inputs break their contract
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] validator::ValidationErrors),

    #[error("Non-finite value for {field} on {record}")]
    NonFinite { record: String, field: &'static str },
}

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}
