//! Query helpers for chart exports on disk.

use std::path::Path;

use px_results::{ChartManifest, ChartStore};

use crate::error::{AppError, AppResult};

fn open_export(dir: &Path) -> AppResult<ChartStore> {
    if !dir.is_dir() {
        return Err(AppError::InvalidInput(format!(
            "Export directory not found: {}",
            dir.display()
        )));
    }
    Ok(ChartStore::new(dir.to_path_buf())?)
}

/// Manifest of an existing export.
pub fn list_charts(dir: &Path) -> AppResult<ChartManifest> {
    Ok(open_export(dir)?.load_manifest()?)
}

/// One exported chart as `series,x,y` CSV.
pub fn chart_csv(dir: &Path, index: usize) -> AppResult<String> {
    let record = open_export(dir)?.load_chart(index)?;
    Ok(record.to_csv())
}
