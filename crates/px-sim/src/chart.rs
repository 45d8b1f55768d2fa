//! Chart data handed to the visualization sink.

use px_core::Real;

use crate::error::SimResult;

/// One named line of `(x, y)` points.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(Real, Real)>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<(Real, Real)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

/// Visualization capability injected into the calculators.
pub trait ChartSink {
    /// Hand a chart over for display. Returns once the sink is done with it.
    fn display(&mut self, chart: &Chart) -> SimResult<()>;
}

/// Keeps every chart it is given, in order.
#[derive(Debug, Default)]
pub struct ChartLog {
    charts: Vec<Chart>,
}

impl ChartLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    pub fn titles(&self) -> Vec<&str> {
        self.charts.iter().map(|c| c.title.as_str()).collect()
    }

    pub fn into_charts(self) -> Vec<Chart> {
        self.charts
    }
}

impl ChartSink for ChartLog {
    fn display(&mut self, chart: &Chart) -> SimResult<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

/// Drops charts.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardCharts;

impl ChartSink for DiscardCharts {
    fn display(&mut self, _chart: &Chart) -> SimResult<()> {
        Ok(())
    }
}
