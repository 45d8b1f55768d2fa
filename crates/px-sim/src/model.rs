//! In-memory scenario model.
//!
//! Roles are derived from entity names once, at construction. Everything
//! downstream works on the tags instead of re-scanning names.

use core::fmt;

use px_core::{Real, name_is};

/// Which part an object plays in a scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectRole {
    /// Candidate for kinematics.
    Subject,
    /// Named "ground" or "floor"; never moved.
    Ground,
}

impl ObjectRole {
    pub fn from_name(name: &str) -> Self {
        if name_is(name, "ground") || name_is(name, "floor") {
            ObjectRole::Ground
        } else {
            ObjectRole::Subject
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForceRole {
    Gravity,
    Other,
}

impl ForceRole {
    pub fn from_name(name: &str) -> Self {
        if name_is(name, "gravity") {
            ForceRole::Gravity
        } else {
            ForceRole::Other
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhysicalObject {
    pub name: String,
    pub mass: Real,
    pub x: Real,
    pub y: Real,
    pub vix: Real,
    pub viy: Real,
    pub v_initial: Real,
    /// Launch angle above horizontal, radians.
    pub theta: Real,
    role: ObjectRole,
}

impl PhysicalObject {
    /// Object at rest at `(x, y)`; velocity and launch inputs default to zero.
    pub fn new(name: impl Into<String>, mass: Real, x: Real, y: Real) -> Self {
        let name = name.into();
        let role = ObjectRole::from_name(&name);
        Self {
            name,
            mass,
            x,
            y,
            vix: 0.0,
            viy: 0.0,
            v_initial: 0.0,
            theta: 0.0,
            role,
        }
    }

    pub fn with_velocity(mut self, vix: Real, viy: Real) -> Self {
        self.vix = vix;
        self.viy = viy;
        self
    }

    pub fn with_launch(mut self, v_initial: Real, theta: Real) -> Self {
        self.v_initial = v_initial;
        self.theta = theta;
        self
    }

    pub fn role(&self) -> ObjectRole {
        self.role
    }
}

impl fmt::Display for PhysicalObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Object {} (mass={:?}, position=({:?}, {:?}))",
            self.name, self.mass, self.x, self.y
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Force {
    pub name: String,
    pub magnitude: Real,
    pub direction: String,
    role: ForceRole,
}

impl Force {
    pub fn new(name: impl Into<String>, magnitude: Real, direction: impl Into<String>) -> Self {
        let name = name.into();
        let role = ForceRole::from_name(&name);
        Self {
            name,
            magnitude,
            direction: direction.into(),
            role,
        }
    }

    pub fn role(&self) -> ForceRole {
        self.role
    }
}

impl fmt::Display for Force {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Force {} (magnitude={:?}, direction={})",
            self.name, self.magnitude, self.direction
        )
    }
}

/// Event kinds the interpreter knows how to evaluate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    FreeFall,
    Throwing,
    ThrowingUp,
    ThrowingAngle,
    /// Any other name; reported at dispatch, never at load.
    Unsupported(String),
}

impl EventKind {
    /// Exact, case-sensitive match on the event name.
    pub fn parse(name: &str) -> Self {
        match name {
            "free_fall" => EventKind::FreeFall,
            "throwing" => EventKind::Throwing,
            "throwing_up" => EventKind::ThrowingUp,
            "throwing_angle" => EventKind::ThrowingAngle,
            other => EventKind::Unsupported(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EventKind::FreeFall => "free_fall",
            EventKind::Throwing => "throwing",
            EventKind::ThrowingUp => "throwing_up",
            EventKind::ThrowingAngle => "throwing_angle",
            EventKind::Unsupported(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, EventKind::Unsupported(_))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub simulation_name: String,
}

impl Run {
    pub fn new(simulation_name: impl Into<String>) -> Self {
        Self {
            simulation_name: simulation_name.into(),
        }
    }
}

/// Loaded scenario. Read-only once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    name: String,
    objects: Vec<PhysicalObject>,
    forces: Vec<Force>,
    events: Vec<EventKind>,
    runs: Vec<Run>,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        objects: Vec<PhysicalObject>,
        forces: Vec<Force>,
        events: Vec<EventKind>,
        runs: Vec<Run>,
    ) -> Self {
        Self {
            name: name.into(),
            objects,
            forces,
            events,
            runs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn objects(&self) -> &[PhysicalObject] {
        &self.objects
    }

    pub fn forces(&self) -> &[Force] {
        &self.forces
    }

    pub fn events(&self) -> &[EventKind] {
        &self.events
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }
}
