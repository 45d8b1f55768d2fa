//! Free fall from rest.

use px_core::Real;
use tracing::warn;

use super::EventContext;
use crate::chart::{Chart, Series};
use crate::error::{SimError, SimResult};
use crate::resolve;
use crate::sampling::sample;

/// Drop from `height` under gravity `g`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreeFall {
    pub height: Real,
    pub g: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FreeFallSolution {
    /// `sqrt(2h/g)`
    pub fall_time: Real,
    /// `sqrt(2gh)`
    pub final_speed: Real,
}

impl FreeFall {
    pub fn solve(&self) -> FreeFallSolution {
        FreeFallSolution {
            fall_time: (2.0 * self.height / self.g).sqrt(),
            final_speed: (2.0 * self.g * self.height).sqrt(),
        }
    }

    pub fn height_at(&self, t: Real) -> Real {
        self.height - 0.5 * self.g * t * t
    }

    pub fn speed_at(&self, t: Real) -> Real {
        self.g * t
    }

    /// Height at `t`, only for `t` within `[0, fall_time]`.
    pub fn height_query(&self, t: Real, fall_time: Real) -> SimResult<Real> {
        if t < 0.0 || t > fall_time {
            return Err(SimError::OutOfRange {
                time: t,
                max: fall_time,
            });
        }
        Ok(self.height_at(t))
    }

    pub fn charts(&self, times: &[Real]) -> Vec<Chart> {
        vec![
            Chart::new("Height vs Time", "Time (s)", "Vertical Position (m)")
                .with_series(Series::new("Height", sample(times, |t| self.height_at(t)))),
            // Historical label; the series holds speeds.
            Chart::new("Speed vs Time", "Time (s)", "Velocity (m/s)").with_series(Series::new(
                "Horizontal Position",
                sample(times, |t| self.speed_at(t)),
            )),
        ]
    }
}

pub fn run(ctx: &mut EventContext<'_>) -> SimResult<()> {
    let scenario = ctx.scenario;
    let (Some(gravity), Some(subject)) = (resolve::gravity(scenario), resolve::subject(scenario))
    else {
        return Err(SimError::MissingEntity {
            what: "gravity force or falling object",
        });
    };

    let model = FreeFall {
        height: subject.y,
        g: gravity.magnitude,
    };
    let solution = model.solve();
    let name = &subject.name;

    ctx.say(&format!(
        "{} takes {:.7} seconds to reach the ground.",
        name, solution.fall_time
    ))?;
    ctx.say(&format!(
        "The final speed of {} is {:.7} m/s.",
        name, solution.final_speed
    ))?;

    if ctx.confirm(&format!("Are you looking for {}'s position? (yes/no): ", name))? {
        // A rejected time keeps the default height of 0 but still reports the time asked for.
        let (time, height) = match ctx.ask_time() {
            Ok(time) => match model.height_query(time, solution.fall_time) {
                Ok(height) => (time, height),
                Err(err) => {
                    warn!(time, max = solution.fall_time, "position query out of range");
                    ctx.say(&err.to_string())?;
                    (time, 0.0)
                }
            },
            Err(err @ SimError::InvalidInput { .. }) => {
                ctx.say(&err.to_string())?;
                (0.0, 0.0)
            }
            Err(err) => return Err(err),
        };
        ctx.say(&format!(
            "Height of {}: {:.7} meters at {:.7} seconds.",
            name, height, time
        ))?;
    }

    let times = ctx.sample_times(solution.fall_time)?;
    ctx.show(&model.charts(&times))
}
