//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

fn default_version() -> u32 {
    LATEST_VERSION
}

/// One scenario file: the entities plus the events and runs that drive them.
///
/// ```yaml
/// name: drop_test
/// objects:
///   - { name: ground, mass: 0, x: 0, y: 0 }
///   - { name: ball, mass: 1, x: 0, y: 20, vix: 5 }
/// forces:
///   - { name: gravity, magnitude: 9.81, direction: down }
/// events: [free_fall]
/// runs:
///   - simulation_name: drop_test
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    #[serde(default = "default_version")]
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
    #[serde(default)]
    pub forces: Vec<ForceDef>,
    /// Event names in execution order. Unknown names are kept as-is.
    #[serde(default)]
    pub events: Vec<String>,
    #[serde(default)]
    pub runs: Vec<RunDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectDef {
    pub name: String,
    pub mass: f64,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub vix: f64,
    #[serde(default)]
    pub viy: f64,
    #[serde(default)]
    pub v_initial: f64,
    /// Launch angle in radians.
    #[serde(default)]
    pub theta: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForceDef {
    pub name: String,
    pub magnitude: f64,
    #[serde(default)]
    pub direction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunDef {
    #[serde(alias = "simulationName")]
    pub simulation_name: String,
}

impl ScenarioDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            objects: Vec::new(),
            forces: Vec::new(),
            events: Vec::new(),
            runs: Vec::new(),
        }
    }
}

impl ObjectDef {
    /// Object at rest at `(x, y)`.
    pub fn at(name: impl Into<String>, mass: f64, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            x,
            y,
            vix: 0.0,
            viy: 0.0,
            v_initial: 0.0,
            theta: 0.0,
        }
    }
}
