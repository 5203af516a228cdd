//! Build report output formatting.

use evsite_catalog::site::BuildReport;
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output structure for the build command.
#[derive(Serialize)]
pub struct BuildOutput {
    pub out_dir: String,
    pub pages_written: usize,
    pub listed: usize,
    pub pages: Vec<String>,
}

/// Formats a build report as JSON.
pub fn format_build_json(report: &BuildReport) -> Result<String, serde_json::Error> {
    let output = BuildOutput {
        out_dir: report.out_dir.display().to_string(),
        pages_written: report.pages_written(),
        listed: report.listed,
        pages: report
            .pages
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a one-line build summary.
pub fn format_build_summary(report: &BuildReport, total: usize, use_colors: bool) -> String {
    let out_dir = report.out_dir.display().to_string();
    let out_dir = if use_colors {
        out_dir.green().to_string()
    } else {
        out_dir
    };
    format!(
        "Built site: {} pages in {} ({} of {} events listed)\n",
        report.pages_written(),
        out_dir,
        report.listed,
        total
    )
}
