//! Scenario validation logic.
//!
//! Only structural problems are rejected here. Empty run lists, duplicate
//! names, unknown events and missing gravity are left to the interpreter,
//! which reports them at run time.

use crate::schema::{ForceDef, LATEST_VERSION, ObjectDef, ScenarioDef};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Empty name in {context}")]
    EmptyName { context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &ScenarioDef) -> Result<(), ValidationError> {
    if scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    if scenario.name.trim().is_empty() {
        return Err(ValidationError::EmptyName {
            context: "scenario".to_string(),
        });
    }

    for (idx, object) in scenario.objects.iter().enumerate() {
        validate_object(idx, object)?;
    }

    for (idx, force) in scenario.forces.iter().enumerate() {
        validate_force(idx, force)?;
    }

    for (idx, event) in scenario.events.iter().enumerate() {
        if event.trim().is_empty() {
            return Err(ValidationError::EmptyName {
                context: format!("events[{}]", idx),
            });
        }
    }

    Ok(())
}

fn validate_object(idx: usize, object: &ObjectDef) -> Result<(), ValidationError> {
    if object.name.trim().is_empty() {
        return Err(ValidationError::EmptyName {
            context: format!("objects[{}]", idx),
        });
    }

    let fields = [
        ("mass", object.mass),
        ("x", object.x),
        ("y", object.y),
        ("vix", object.vix),
        ("viy", object.viy),
        ("v_initial", object.v_initial),
        ("theta", object.theta),
    ];
    for (field, value) in fields {
        ensure_finite_field(&format!("object '{}' {}", object.name, field), value)?;
    }
    Ok(())
}

fn validate_force(idx: usize, force: &ForceDef) -> Result<(), ValidationError> {
    if force.name.trim().is_empty() {
        return Err(ValidationError::EmptyName {
            context: format!("forces[{}]", idx),
        });
    }
    ensure_finite_field(&format!("force '{}' magnitude", force.name), force.magnitude)
}

fn ensure_finite_field(field: &str, value: f64) -> Result<(), ValidationError> {
    px_core::ensure_finite(value, "scenario field").map_err(|e| ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}
