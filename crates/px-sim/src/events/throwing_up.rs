//! Vertical launch.

use px_core::Real;

use super::EventContext;
use crate::chart::{Chart, Series};
use crate::error::{SimError, SimResult};
use crate::resolve;
use crate::sampling::sample;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalThrow {
    pub y0: Real,
    pub viy: Real,
    pub g: Real,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalThrowSolution {
    pub peak_time: Real,
    /// Twice the rise time; the landing height is not taken into account.
    pub flight_time: Real,
    pub max_height: Real,
}

impl VerticalThrow {
    pub fn solve(&self) -> VerticalThrowSolution {
        let peak_time = self.viy / self.g;
        VerticalThrowSolution {
            peak_time,
            flight_time: 2.0 * peak_time,
            max_height: self.y0 + self.viy * self.viy / (2.0 * self.g),
        }
    }

    pub fn y_at(&self, t: Real) -> Real {
        self.y0 + self.viy * t - 0.5 * self.g * t * t
    }

    pub fn charts(&self, times: &[Real]) -> Vec<Chart> {
        vec![
            Chart::new("Vertical Position vs Time", "Time (s)", "Vertical Position (m)")
                .with_series(Series::new(
                    "Vertical Position",
                    sample(times, |t| self.y_at(t)),
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

    let model = VerticalThrow {
        y0: subject.y,
        viy: subject.viy,
        g: gravity.magnitude,
    };
    let solution = model.solve();

    ctx.say(&format!(
        "Time to reach the highest point: {:.7} seconds",
        solution.peak_time
    ))?;
    ctx.say(&format!(
        "Total time of flight: {:.7} seconds",
        solution.flight_time
    ))?;
    ctx.say(&format!("Maximum height: {:.7} meters", solution.max_height))?;

    let times = ctx.sample_times(solution.flight_time)?;
    ctx.show(&model.charts(&times))
}
