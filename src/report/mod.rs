//! JSON report rendering and output

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::errors::{AnalyzerResult, ErrorExt};
use crate::models::AccountAnalysis;

/// Render reports as JSON
///
/// A single report renders as an object, several as an array.
pub fn render(reports: &[AccountAnalysis], pretty: bool) -> AnalyzerResult<String> {
    let json = match (reports, pretty) {
        ([report], true) => serde_json::to_string_pretty(report)?,
        ([report], false) => serde_json::to_string(report)?,
        (reports, true) => serde_json::to_string_pretty(reports)?,
        (reports, false) => serde_json::to_string(reports)?,
    };
    debug!("Rendered {} report(s) to JSON ({} bytes)", reports.len(), json.len());
    Ok(json)
}

/// Save rendered JSON to a file
pub fn save_report(json: &str, path: &Path) -> AnalyzerResult<()> {
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .with_simple_context("report", "resolve current directory")?
            .join(path)
    };

    info!("Saving report to absolute path: {}", absolute_path.display());

    if let Some(parent) = absolute_path.parent() {
        if !parent.exists() {
            info!("Creating directory: {}", parent.display());
            fs::create_dir_all(parent).with_simple_context("report", "create report directory")?;
        }
    }

    let mut file = File::create(&absolute_path).with_simple_context("report", "create report file")?;
    file.write_all(json.as_bytes())
        .with_simple_context("report", "write report file")?;

    info!("Wrote {} bytes to {}", json.len(), absolute_path.display());
    Ok(())
}
