//! Scenario loading, saving, validation, and introspection.

use std::path::Path;

use px_project::schema::ScenarioDef;
use px_sim::{ForceRole, ObjectRole, SimOptions, SimulationInterpreter, resolve};

use crate::error::{AppError, AppResult};
use crate::runtime_compile::compile_scenario;

/// Object entry in a [`ScenarioSummary`].
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSummary {
    pub name: String,
    pub role: ObjectRole,
}

/// Force entry in a [`ScenarioSummary`].
#[derive(Debug, Clone, PartialEq)]
pub struct ForceSummary {
    pub name: String,
    pub magnitude: f64,
    pub role: ForceRole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub name: String,
    pub supported: bool,
}

/// What a scenario declares and how the interpreter will read it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub name: String,
    pub objects: Vec<ObjectSummary>,
    pub forces: Vec<ForceSummary>,
    pub events: Vec<EventSummary>,
    pub runs: Vec<String>,
    /// Object the calculators will move, if any.
    pub subject: Option<String>,
    /// Gravity force the calculators will use, if any.
    pub gravity: Option<String>,
    /// Why the run declaration would be rejected; `None` when it is accepted.
    pub run_error: Option<String>,
}

/// Load a scenario file (YAML or JSON by extension).
pub fn load_scenario(path: &Path) -> AppResult<ScenarioDef> {
    if !path.exists() {
        return Err(AppError::InvalidInput(format!(
            "Scenario file not found: {}",
            path.display()
        )));
    }
    Ok(px_project::load_scenario(path)?)
}

/// Save a scenario as YAML.
pub fn save_scenario(path: &Path, scenario: &ScenarioDef) -> AppResult<()> {
    px_project::save_yaml(path, scenario)?;
    Ok(())
}

/// Check the file-level rules and the run declaration.
///
/// Unknown events and a missing gravity force are not errors here; the
/// interpreter reports those when it reaches them.
pub fn validate_scenario(scenario: &ScenarioDef) -> AppResult<()> {
    let compiled = compile_scenario(scenario)?;
    SimulationInterpreter::new(compiled, SimOptions::default()).validate_runs()?;
    Ok(())
}

pub fn summarize(scenario: &ScenarioDef) -> AppResult<ScenarioSummary> {
    let compiled = compile_scenario(scenario)?;

    let subject = resolve::subject(&compiled).map(|o| o.name.clone());
    let gravity = resolve::gravity(&compiled).map(|f| f.name.clone());

    let objects = compiled
        .objects()
        .iter()
        .map(|o| ObjectSummary {
            name: o.name.clone(),
            role: o.role(),
        })
        .collect();
    let forces = compiled
        .forces()
        .iter()
        .map(|f| ForceSummary {
            name: f.name.clone(),
            magnitude: f.magnitude,
            role: f.role(),
        })
        .collect();
    let events = compiled
        .events()
        .iter()
        .map(|e| EventSummary {
            name: e.name().to_string(),
            supported: e.is_supported(),
        })
        .collect();
    let runs = compiled
        .runs()
        .iter()
        .map(|r| r.simulation_name.clone())
        .collect();

    let interpreter = SimulationInterpreter::new(compiled, SimOptions::default());
    let run_error = interpreter.validate_runs().err().map(|e| e.to_string());

    Ok(ScenarioSummary {
        name: scenario.name.clone(),
        objects,
        forces,
        events,
        runs,
        subject,
        gravity,
        run_error,
    })
}
