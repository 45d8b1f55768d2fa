//! Launch at an angle above the horizontal.

use px_core::Real;

use super::EventContext;
use crate::error::{SimError, SimResult};
use crate::model::PhysicalObject;
use crate::resolve;

/// Launch inputs after component resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngledLaunch {
    pub y0: Real,
    pub vix: Real,
    pub viy: Real,
    pub v_initial: Real,
    pub theta: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngledLaunchSolution {
    pub flight_time: Real,
    /// Rise above the launch point only; `y0` is not added.
    pub max_height: Real,
    pub horizontal_distance: Real,
}

impl AngledLaunch {
    /// Needs both velocity components, or both speed and angle. When speed and
    /// angle are given they replace any supplied components.
    pub fn from_object(object: &PhysicalObject) -> SimResult<Self> {
        let has_components = object.vix != 0.0 && object.viy != 0.0;
        let has_polar = object.v_initial != 0.0 && object.theta != 0.0;
        if !has_components && !has_polar {
            return Err(SimError::MissingParameters);
        }

        let (vix, viy) = if has_polar {
            (
                object.v_initial * object.theta.cos(),
                object.v_initial * object.theta.sin(),
            )
        } else {
            (object.vix, object.viy)
        };

        Ok(Self {
            y0: object.y,
            vix,
            viy,
            v_initial: object.v_initial,
            theta: object.theta,
        })
    }

    pub fn solve(&self, g: Real) -> AngledLaunchSolution {
        // Rise and fall terms come from speed/angle, not from the components.
        let vy_polar = self.v_initial * self.theta.sin();
        let peak_above_y0 = self.v_initial.powi(2) * self.theta.sin().powi(2) / (2.0 * g);
        let flight_time = vy_polar / g + (2.0 * (self.y0 + peak_above_y0) / g).sqrt();

        AngledLaunchSolution {
            flight_time,
            max_height: self.viy * self.viy / (2.0 * g),
            horizontal_distance: self.vix * flight_time,
        }
    }
}

pub fn run(ctx: &mut EventContext<'_>) -> SimResult<()> {
    let scenario = ctx.scenario;
    let subject = resolve::subject(scenario).ok_or(SimError::MissingEntity {
        what: "throwing object",
    })?;
    let launch = AngledLaunch::from_object(subject)?;
    let gravity = resolve::gravity(scenario).ok_or(SimError::MissingEntity {
        what: "gravity force",
    })?;

    let solution = launch.solve(gravity.magnitude);

    ctx.say(&format!(
        "Total time of flight: {:.7} seconds",
        solution.flight_time
    ))?;
    ctx.say(&format!("Maximum Height: {:.7} meters", solution.max_height))?;
    ctx.say(&format!(
        "Horizontal Distance: {:.7} meters",
        solution.horizontal_distance
    ))
}
