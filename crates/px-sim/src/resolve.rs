//! Entity role resolution.
//!
//! Positional first match: the first entity carrying the role wins, later
//! candidates are ignored. Calculators call these per event; nothing is cached.

use crate::model::{Force, ForceRole, ObjectRole, PhysicalObject, Scenario};

/// First object that is not a ground/floor marker.
pub fn subject(scenario: &Scenario) -> Option<&PhysicalObject> {
    scenario
        .objects()
        .iter()
        .find(|o| o.role() == ObjectRole::Subject)
}

/// First force named "gravity" (any case).
pub fn gravity(scenario: &Scenario) -> Option<&Force> {
    scenario
        .forces()
        .iter()
        .find(|f| f.role() == ForceRole::Gravity)
}
