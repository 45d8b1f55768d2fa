//! Closed-form kinematics interpreter for physix scenarios.
//!
//! Provides:
//! - Scenario model with role tags assigned at construction
//! - Entity resolution (subject object, gravity force)
//! - Closed-form calculators for free fall, horizontal, vertical and angled launches
//! - Fixed-step time-series sampling for charts
//! - Interpreter that validates runs and dispatches events in order

pub mod chart;
pub mod console;
pub mod error;
pub mod events;
pub mod interpreter;
pub mod model;
pub mod report;
pub mod resolve;
pub mod sampling;

pub use chart::{Chart, ChartLog, ChartSink, DiscardCharts, Series};
pub use console::{Console, Terminal, is_yes};
pub use error::{SimError, SimResult};
pub use events::EventContext;
pub use interpreter::{
    EventOutcome, EventRecord, RunStatus, RunSummary, SimOptions, SimulationInterpreter,
};
pub use model::{EventKind, Force, ForceRole, ObjectRole, PhysicalObject, Run, Scenario};
pub use report::significant;
pub use sampling::{DEFAULT_STEP, MAX_SAMPLES, sample, sample_pairs, sample_times};
