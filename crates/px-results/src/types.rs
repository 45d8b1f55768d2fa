//! Exported chart data types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartManifest {
    pub scenario: String,
    /// RFC 3339, UTC.
    pub timestamp: String,
    pub charts: Vec<ChartEntry>,
}

impl ChartManifest {
    /// Manifest for `records`, stamped with the current time.
    pub fn for_charts(scenario: impl Into<String>, records: &[ChartRecord]) -> Self {
        Self {
            scenario: scenario.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            charts: records.iter().map(ChartEntry::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartEntry {
    pub index: usize,
    pub title: String,
    pub series_count: usize,
    pub point_count: usize,
}

impl From<&ChartRecord> for ChartEntry {
    fn from(record: &ChartRecord) -> Self {
        Self {
            index: record.index,
            title: record.title.clone(),
            series_count: record.series.len(),
            point_count: record.series.iter().map(|s| s.points.len()).sum(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartRecord {
    /// Position in display order.
    pub index: usize,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<SeriesRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesRecord {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl ChartRecord {
    /// `series,x,y` rows, one per point.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("series,x,y\n");
        for series in &self.series {
            for (x, y) in &series.points {
                csv.push_str(&format!("{},{},{}\n", series.label, x, y));
            }
        }
        csv
    }
}
