//! Chart sinks used by the front ends.

use std::io::Write;

use px_results::{ChartRecord, SeriesRecord};
use px_sim::{Chart, ChartSink, SimResult};
use tracing::debug;

/// Writes one summary line per chart.
pub struct ChartSummary<W> {
    out: W,
}

impl<W: Write> ChartSummary<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartSink for ChartSummary<W> {
    fn display(&mut self, chart: &Chart) -> SimResult<()> {
        writeln!(
            self.out,
            "[chart] {}: {} series, {} points",
            chart.title,
            chart.series.len(),
            chart.point_count()
        )?;
        Ok(())
    }
}

/// Converts every chart into an export record, then forwards it.
pub struct RecordingSink<'a> {
    inner: &'a mut dyn ChartSink,
    records: Vec<ChartRecord>,
}

impl<'a> RecordingSink<'a> {
    pub fn new(inner: &'a mut dyn ChartSink) -> Self {
        Self {
            inner,
            records: Vec::new(),
        }
    }

    pub fn into_records(self) -> Vec<ChartRecord> {
        self.records
    }
}

impl ChartSink for RecordingSink<'_> {
    fn display(&mut self, chart: &Chart) -> SimResult<()> {
        let record = to_record(self.records.len(), chart);
        debug!(index = record.index, title = %record.title, "chart recorded");
        self.records.push(record);
        self.inner.display(chart)
    }
}

pub fn to_record(index: usize, chart: &Chart) -> ChartRecord {
    ChartRecord {
        index,
        title: chart.title.clone(),
        x_label: chart.x_label.clone(),
        y_label: chart.y_label.clone(),
        series: chart
            .series
            .iter()
            .map(|s| SeriesRecord {
                label: s.label.clone(),
                points: s.points.clone(),
            })
            .collect(),
    }
}
