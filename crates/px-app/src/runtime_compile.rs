//! Runtime compilation of ScenarioDef into the interpreter's model.

use px_project::schema::{ForceDef, ObjectDef, ScenarioDef};
use px_project::validate_scenario;
use px_sim::{EventKind, Force, PhysicalObject, Run, Scenario};

use crate::error::AppResult;

/// Validate a scenario definition and build the runtime model from it.
///
/// Event names are carried over verbatim; unknown ones become
/// [`EventKind::Unsupported`] and are reported when the run reaches them.
pub fn compile_scenario(def: &ScenarioDef) -> AppResult<Scenario> {
    validate_scenario(def)?;

    let objects = def.objects.iter().map(build_object).collect();
    let forces = def.forces.iter().map(build_force).collect();
    let events = def.events.iter().map(|e| EventKind::parse(e)).collect();
    let runs = def
        .runs
        .iter()
        .map(|r| Run::new(r.simulation_name.clone()))
        .collect();

    Ok(Scenario::new(def.name.clone(), objects, forces, events, runs))
}

pub fn build_object(def: &ObjectDef) -> PhysicalObject {
    PhysicalObject::new(def.name.clone(), def.mass, def.x, def.y)
        .with_velocity(def.vix, def.viy)
        .with_launch(def.v_initial, def.theta)
}

pub fn build_force(def: &ForceDef) -> Force {
    Force::new(def.name.clone(), def.magnitude, def.direction.clone())
}
