//! Per-event calculators.
//!
//! Each calculator has a pure part (inputs in, closed-form values out) and a
//! `run` function that resolves entities, prints results, handles the
//! interactive refinements and hands charts to the sink.

pub mod free_fall;
pub mod throwing;
pub mod throwing_angle;
pub mod throwing_up;

use px_core::Real;

use crate::chart::{Chart, ChartSink};
use crate::console::Console;
use crate::error::SimResult;
use crate::interpreter::SimOptions;
use crate::model::Scenario;

pub use free_fall::{FreeFall, FreeFallSolution};
pub use throwing::{HorizontalThrow, HorizontalThrowSolution};
pub use throwing_angle::{AngledLaunch, AngledLaunchSolution};
pub use throwing_up::{VerticalThrow, VerticalThrowSolution};

/// Everything a calculator may touch while running one event.
pub struct EventContext<'a> {
    pub scenario: &'a Scenario,
    pub console: &'a mut dyn Console,
    pub sink: &'a mut dyn ChartSink,
    pub options: &'a SimOptions,
}

impl EventContext<'_> {
    pub fn say(&mut self, line: &str) -> SimResult<()> {
        self.console.say(line)
    }

    /// Yes/no gate for a refinement. Always "no" when not interactive.
    pub fn confirm(&mut self, question: &str) -> SimResult<bool> {
        if !self.options.interactive {
            return Ok(false);
        }
        self.console.confirm(question)
    }

    pub fn ask_time(&mut self) -> SimResult<Real> {
        self.console.ask_time("At what time? (in seconds): ")
    }

    /// Sample times over `[0, end]` at the configured step.
    pub fn sample_times(&self, end: Real) -> SimResult<Vec<Real>> {
        crate::sampling::sample_times(end, self.options.sample_step)
    }

    pub fn show(&mut self, charts: &[Chart]) -> SimResult<()> {
        for chart in charts {
            tracing::debug!(title = %chart.title, points = chart.point_count(), "displaying chart");
            self.sink.display(chart)?;
        }
        Ok(())
    }
}
