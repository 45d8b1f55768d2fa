//! Shared application service layer for physix.
//!
//! Centralizes scenario loading, runtime compilation, run execution and
//! chart export queries for the command line front end.

pub mod error;
pub mod query;
pub mod run_service;
pub mod runtime_compile;
pub mod scenario_service;
pub mod sinks;

pub use error::{AppError, AppResult};
pub use query::{chart_csv, list_charts};
pub use run_service::{RunRequest, RunResponse, run_on_terminal, run_scenario};
pub use runtime_compile::compile_scenario;
pub use scenario_service::{
    EventSummary, ForceSummary, ObjectSummary, ScenarioSummary, load_scenario, save_scenario,
    summarize, validate_scenario,
};
pub use sinks::{ChartSummary, RecordingSink};
