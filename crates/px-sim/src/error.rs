//! Error types for simulation operations.
//!
//! The `Display` text of each variant is the line printed to the user.

use thiserror::Error;

/// Errors encountered while interpreting a scenario.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Error: No 'run' command found. Simulation cannot execute.")]
    NoRunDeclared,

    #[error("Error: Simulation with that name not found.")]
    RunNameMismatch { expected: String, found: String },

    #[error("Could not find {what}.")]
    MissingEntity { what: &'static str },

    #[error(
        "Error: For a throwing angle event, the initial velocity (v_initial) and launch angle (theta) must be provided."
    )]
    MissingParameters,

    #[error("Event '{name}' is not supported or does not exist.")]
    UnsupportedEvent { name: String },

    #[error("Time must be between 0 and the total fall time.")]
    OutOfRange { time: f64, max: f64 },

    #[error("Invalid time value: '{input}'")]
    InvalidInput { input: String },

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl SimError {
    /// Whole-run validation failures: nothing executes after these.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SimError::NoRunDeclared | SimError::RunNameMismatch { .. }
        )
    }

    /// Failures absorbed at the event boundary; later events still run.
    pub fn is_event_local(&self) -> bool {
        matches!(
            self,
            SimError::MissingEntity { .. }
                | SimError::MissingParameters
                | SimError::UnsupportedEvent { .. }
                | SimError::OutOfRange { .. }
                | SimError::InvalidInput { .. }
        )
    }
}

impl From<px_core::PxError> for SimError {
    fn from(e: px_core::PxError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}
