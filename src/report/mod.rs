use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::EstimationResult;

pub mod json;
pub mod text;

use json::render_summary_json;
use text::render_report_text;

/// Decimal places used when presenting numbers.
pub const DISPLAY_DECIMALS: i32 = 4;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Both,
}

impl ReportFormat {
    fn wants_text(self) -> bool {
        matches!(self, ReportFormat::Text | ReportFormat::Both)
    }

    fn wants_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }
}

/// Rounds half away from zero to `decimals` places. Presentation only; the
/// estimation result itself keeps full precision.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

pub fn format_value(value: f64) -> String {
    format!("{}", round_to(value, DISPLAY_DECIMALS))
}

pub fn format_row(values: impl IntoIterator<Item = f64>) -> String {
    values
        .into_iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join("\t")
}

pub fn write_reports(
    result: &EstimationResult,
    out_dir: &Path,
    format: ReportFormat,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    if format.wants_text() {
        let path = out_dir.join("concordance.txt");
        write_text(&path, &render_report_text(result))?;
        written.push(path);
    }
    if format.wants_json() {
        let path = out_dir.join("concordance.json");
        write_text(&path, &render_summary_json(result)?)?;
        written.push(path);
    }

    for path in &written {
        tracing::info!(path = %path.display(), "wrote report");
    }
    Ok(written)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
