//! Horizontal launch from a height.
//!
//! Flight time is taken from the drop height alone; `viy` is ignored there but
//! does enter the sampled trajectory.

use px_core::Real;

use super::EventContext;
use crate::chart::{Chart, Series};
use crate::error::{SimError, SimResult};
use crate::report::significant;
use crate::resolve;
use crate::sampling::{sample, sample_pairs};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalThrow {
    pub y0: Real,
    pub vix: Real,
    pub viy: Real,
    pub g: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HorizontalThrowSolution {
    pub flight_time: Real,
    pub x_displacement: Real,
    pub final_velocity: Real,
}

impl HorizontalThrow {
    pub fn solve(&self) -> HorizontalThrowSolution {
        let flight_time = (2.0 * self.y0 / self.g).sqrt();
        let vxf = self.vix;
        let vyf = self.g * flight_time;
        HorizontalThrowSolution {
            flight_time,
            x_displacement: self.vix * flight_time,
            final_velocity: (vxf * vxf + vyf * vyf).sqrt(),
        }
    }

    pub fn x_at(&self, t: Real) -> Real {
        self.vix * t
    }

    /// Vertical speed gained after `t` seconds of fall.
    pub fn fall_speed_at(&self, t: Real) -> Real {
        self.g * t
    }

    /// Distance fallen after `t` seconds, positive downwards.
    pub fn drop_at(&self, t: Real) -> Real {
        0.5 * self.g * t * t
    }

    /// Absolute height, including the initial vertical velocity.
    pub fn y_at(&self, t: Real) -> Real {
        self.y0 + self.viy * t - 0.5 * self.g * t * t
    }

    /// Signed vertical velocity, upwards positive.
    pub fn vy_at(&self, t: Real) -> Real {
        self.viy - self.g * t
    }

    pub fn charts(&self, times: &[Real]) -> Vec<Chart> {
        let g = self.g;
        vec![
            Chart::new(
                "Object Trajectory",
                "Horizontal Position (m)",
                "Vertical Position (m)",
            )
            .with_series(Series::new(
                "Trajectory",
                sample_pairs(times, |t| (self.x_at(t), self.y_at(t))),
            )),
            Chart::new("Position vs Time", "Time (s)", "Horizontal Position (m)").with_series(
                Series::new("Horizontal Position", sample(times, |t| self.x_at(t))),
            ),
            Chart::new("Position vs Time", "Time (s)", "Vertical Position (m)").with_series(
                Series::new("Vertical Position", sample(times, |t| self.y_at(t))),
            ),
            Chart::new("Velocity vs Time", "Time (s)", "Vertical Velocity (m/s)").with_series(
                Series::new("Vertical Velocity", sample(times, |t| self.vy_at(t))),
            ),
            Chart::new(
                "Acceleration vs Time",
                "Time (s)",
                "Vertical Acceleration (m/s²)",
            )
            .with_series(Series::new(
                "Vertical Acceleration",
                sample(times, |_| -g),
            )),
        ]
    }
}

pub fn run(ctx: &mut EventContext<'_>) -> SimResult<()> {
    let scenario = ctx.scenario;
    let (Some(gravity), Some(subject)) = (resolve::gravity(scenario), resolve::subject(scenario))
    else {
        return Err(SimError::MissingEntity {
            what: "gravity force or throwing object",
        });
    };

    let model = HorizontalThrow {
        y0: subject.y,
        vix: subject.vix,
        viy: subject.viy,
        g: gravity.magnitude,
    };
    let solution = model.solve();
    let name = &subject.name;

    ctx.say(&format!(
        "Total time of flight: {:.7} seconds",
        solution.flight_time
    ))?;
    ctx.say(&format!(
        "Horinzontal Displacement before hitting the ground is {} meters",
        significant(solution.x_displacement, 7)
    ))?;
    ctx.say(&format!(
        "Final velocity is {} m/s",
        significant(solution.final_velocity, 7)
    ))?;

    let question = format!(
        "Are you looking for {}'s horizontal displacement at specific time? (yes/no): ",
        name
    );
    if let Some(t) = refinement_time(ctx, &question)? {
        ctx.say(&format!("X({:?}) = {:?} meters ", t, model.x_at(t)))?;
    }

    let question = format!("Are you looking for {}'s vertical velocity? (yes/no): ", name);
    if let Some(t) = refinement_time(ctx, &question)? {
        ctx.say(&format!("Vy({:?}) = {:?} m/s", t, model.fall_speed_at(t)))?;
    }

    let question = format!(
        "Are you looking for {}'s vertical displacement at specific time? (yes/no): ",
        name
    );
    if let Some(t) = refinement_time(ctx, &question)? {
        ctx.say(&format!("Y({:?}) = {:?} meters", t, model.drop_at(t)))?;
    }

    let times = ctx.sample_times(solution.flight_time)?;
    ctx.show(&model.charts(&times))
}

/// Yes/no gate followed by a time prompt. An unreadable time is reported and
/// the refinement skipped.
fn refinement_time(ctx: &mut EventContext<'_>, question: &str) -> SimResult<Option<Real>> {
    if !ctx.confirm(question)? {
        return Ok(None);
    }
    match ctx.ask_time() {
        Ok(t) => Ok(Some(t)),
        Err(err @ SimError::InvalidInput { .. }) => {
            ctx.say(&err.to_string())?;
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
