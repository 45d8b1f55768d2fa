//! Error types for the px-app service layer.

/// Application error type that wraps errors from the backend crates
/// behind one interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Project(String),

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for px-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<px_project::ProjectError> for AppError {
    fn from(err: px_project::ProjectError) -> Self {
        match err {
            px_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<px_project::ValidationError> for AppError {
    fn from(err: px_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<px_sim::SimError> for AppError {
    fn from(err: px_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<px_results::ResultsError> for AppError {
    fn from(err: px_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
