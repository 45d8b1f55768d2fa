//! px-results: exported chart data on disk.

pub mod store;
pub mod types;

pub use store::ChartStore;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No chart export found in {path}")]
    ExportNotFound { path: String },

    #[error("Chart not found: {index}")]
    ChartNotFound { index: usize },
}
