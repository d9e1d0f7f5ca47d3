//! JSON report of per-row summaries and density histograms.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis::RowReport;

pub fn save_reports(path: &Path, reports: &[RowReport]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    let file =
        File::create(path).context(format!("Failed to create report: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), reports)
        .context(format!("Failed to write report: {}", path.display()))
}
