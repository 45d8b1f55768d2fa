//! Run validation and sequential event dispatch.

use px_core::Real;
use tracing::{debug, info, warn};

use crate::chart::ChartSink;
use crate::console::Console;
use crate::error::{SimError, SimResult};
use crate::events::{self, EventContext};
use crate::model::{EventKind, Scenario};
use crate::sampling::DEFAULT_STEP;

/// Options for interpreter runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Chart sampling step (seconds)
    pub sample_step: Real,
    /// Offer interactive refinements; when false every yes/no prompt is "no"
    pub interactive: bool,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            sample_step: DEFAULT_STEP,
            interactive: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RunStatus {
    Completed,
    /// Run validation failed; no event was executed.
    Rejected { reason: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum EventOutcome {
    Completed,
    Failed { message: String },
    Unsupported,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventRecord {
    pub name: String,
    pub outcome: EventOutcome,
}

/// What happened during one `run()`.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub status: RunStatus,
    pub events: Vec<EventRecord>,
}

impl RunSummary {
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }

    /// Number of recognized events that ran to completion.
    pub fn completed_events(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.outcome == EventOutcome::Completed)
            .count()
    }
}

pub struct SimulationInterpreter {
    scenario: Scenario,
    options: SimOptions,
}

impl SimulationInterpreter {
    pub fn new(scenario: Scenario, options: SimOptions) -> Self {
        Self { scenario, options }
    }

    /// Check the declared runs against the scenario name.
    ///
    /// Only the first run entry is consulted: a mismatch there rejects the
    /// scenario even if a later entry would match.
    pub fn validate_runs(&self) -> SimResult<()> {
        let first = self.scenario.runs().first().ok_or(SimError::NoRunDeclared)?;
        if first.simulation_name != self.scenario.name() {
            return Err(SimError::RunNameMismatch {
                expected: self.scenario.name().to_string(),
                found: first.simulation_name.clone(),
            });
        }
        Ok(())
    }

    /// Validate, print the scenario summary, then execute every event in order.
    ///
    /// Domain failures are printed and recorded in the summary. Only console or
    /// sink failures are returned as errors.
    pub fn run(
        &self,
        console: &mut dyn Console,
        sink: &mut dyn ChartSink,
    ) -> SimResult<RunSummary> {
        if let Err(err) = self.validate_runs() {
            warn!(scenario = %self.scenario.name(), %err, "run validation failed");
            console.say(&err.to_string())?;
            return Ok(RunSummary {
                status: RunStatus::Rejected {
                    reason: err.to_string(),
                },
                events: Vec::new(),
            });
        }

        info!(scenario = %self.scenario.name(), "running simulation");
        self.print_summary(console)?;
        let events = self.run_events(console, sink)?;

        Ok(RunSummary {
            status: RunStatus::Completed,
            events,
        })
    }

    fn print_summary(&self, console: &mut dyn Console) -> SimResult<()> {
        console.say("Running Simulation:")?;
        for object in self.scenario.objects() {
            console.say(&object.to_string())?;
        }
        for force in self.scenario.forces() {
            console.say(&force.to_string())?;
        }
        for event in self.scenario.events() {
            console.say(&format!("Event: {}", event))?;
        }
        Ok(())
    }

    /// Execute every declared event in order, without run validation.
    pub fn run_events(
        &self,
        console: &mut dyn Console,
        sink: &mut dyn ChartSink,
    ) -> SimResult<Vec<EventRecord>> {
        let mut records = Vec::with_capacity(self.scenario.events().len());

        for event in self.scenario.events() {
            console.say(&format!("Running event: {}", event))?;
            debug!(event = %event, "dispatching event");

            let mut ctx = EventContext {
                scenario: &self.scenario,
                console: &mut *console,
                sink: &mut *sink,
                options: &self.options,
            };

            let outcome = match calculate(event, &mut ctx) {
                Ok(()) => EventOutcome::Completed,
                Err(err) if err.is_event_local() => {
                    warn!(event = %event, %err, "event aborted");
                    console.say(&err.to_string())?;
                    if event.is_supported() {
                        EventOutcome::Failed {
                            message: err.to_string(),
                        }
                    } else {
                        EventOutcome::Unsupported
                    }
                }
                Err(err) => return Err(err),
            };

            records.push(EventRecord {
                name: event.name().to_string(),
                outcome,
            });
        }

        Ok(records)
    }
}

fn calculate(event: &EventKind, ctx: &mut EventContext<'_>) -> SimResult<()> {
    match event {
        EventKind::FreeFall => events::free_fall::run(ctx),
        EventKind::Throwing => events::throwing::run(ctx),
        EventKind::ThrowingUp => events::throwing_up::run(ctx),
        EventKind::ThrowingAngle => events::throwing_angle::run(ctx),
        EventKind::Unsupported(name) => Err(SimError::UnsupportedEvent { name: name.clone() }),
    }
}
