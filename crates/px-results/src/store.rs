//! Chart export storage.
//!
//! Layout: `<root>/manifest.json` plus `<root>/charts.jsonl` with one chart
//! per line, in display order.

use crate::types::{ChartManifest, ChartRecord};
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::PathBuf;

#[derive(Clone)]
pub struct ChartStore {
    root_dir: PathBuf,
}

impl ChartStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    fn manifest_path(&self) -> PathBuf {
        self.root_dir.join("manifest.json")
    }

    fn charts_path(&self) -> PathBuf {
        self.root_dir.join("charts.jsonl")
    }

    pub fn has_export(&self) -> bool {
        self.manifest_path().exists()
    }

    /// Write the manifest and all charts, replacing any previous export.
    pub fn save(&self, manifest: &ChartManifest, records: &[ChartRecord]) -> ResultsResult<()> {
        let manifest_json = serde_json::to_string_pretty(manifest)?;
        fs::write(self.manifest_path(), manifest_json)?;

        let mut content = String::new();
        for record in records {
            let line = serde_json::to_string(record)?;
            content.push_str(&line);
            content.push('\n');
        }
        fs::write(self.charts_path(), content)?;

        Ok(())
    }

    pub fn load_manifest(&self) -> ResultsResult<ChartManifest> {
        let path = self.manifest_path();
        if !path.exists() {
            return Err(ResultsError::ExportNotFound {
                path: self.root_dir.display().to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    pub fn load_charts(&self) -> ResultsResult<Vec<ChartRecord>> {
        let path = self.charts_path();
        if !path.exists() {
            return Err(ResultsError::ExportNotFound {
                path: self.root_dir.display().to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let mut records = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                let record: ChartRecord = serde_json::from_str(line)?;
                records.push(record);
            }
        }

        Ok(records)
    }

    pub fn load_chart(&self, index: usize) -> ResultsResult<ChartRecord> {
        self.load_charts()?
            .into_iter()
            .find(|r| r.index == index)
            .ok_or(ResultsError::ChartNotFound { index })
    }

    pub fn clear(&self) -> ResultsResult<()> {
        for path in [self.manifest_path(), self.charts_path()] {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
