use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::ReportError;
use crate::model::criteria::EvaluationRow;
use crate::model::thresholds::ReportThresholds;
use crate::pipeline::stage2_stats::Stage2Output;
use crate::pipeline::stage3_charts::ChartArtifact;
use crate::report::ReportContext;
use crate::report::html::{ChartSection, render_report_html};
use crate::report::json::render_summary_json;

pub const REPORT_FILE: &str = "report.html";
pub const SUMMARY_FILE: &str = "summary.json";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock time of the run, as shown in the report header.
pub fn report_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub rows: &'a [EvaluationRow],
    pub stage2: &'a Stage2Output<'a>,
    pub charts: &'a [ChartArtifact],
    pub thresholds: &'a ReportThresholds,
    pub generated_at: String,
    pub tool_version: String,
}

#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub html_path: PathBuf,
    pub summary_path: PathBuf,
}

pub fn build_report_context<'a>(input: &Stage4Input<'a>) -> ReportContext<'a> {
    let stage2 = input.stage2;
    ReportContext {
        rows: input.rows,
        stats: stage2.stats.clone(),
        max_rows: stage2.max_rows.clone(),
        min_rows: stage2.min_rows.clone(),
        strengths: stage2.strengths.clone(),
        needs_improvement: stage2.needs_improvement.clone(),
        category_counts: stage2.category_counts.clone(),
        strength_min: input.thresholds.strength_min,
        improvement_max: input.thresholds.improvement_max,
        generated_at: input.generated_at.clone(),
    }
}

pub fn assemble_report(input: &Stage4Input<'_>) -> String {
    let ctx = build_report_context(input);
    let sections = input
        .charts
        .iter()
        .map(|artifact| ChartSection {
            title: artifact.kind.section_title(),
            file_name: relative_name(artifact),
            alt: artifact.kind.alt_text(),
        })
        .collect::<Vec<_>>();
    render_report_html(&ctx, &sections)
}

/// Expects `out_dir` to exist already; `run_pipeline` creates it before any chart is drawn.
pub fn write_reports(
    input: &Stage4Input<'_>,
    out_dir: &Path,
) -> Result<ReportArtifacts, ReportError> {
    let html_path = out_dir.join(REPORT_FILE);
    let html = assemble_report(input);
    write_text(&html_path, &html)?;

    let summary_path = out_dir.join(SUMMARY_FILE);
    let ctx = build_report_context(input);
    let mut artifacts = input.charts.iter().map(relative_name).collect::<Vec<_>>();
    artifacts.push(REPORT_FILE);
    let json = render_summary_json(&ctx, &input.tool_version, &artifacts)?;
    write_text(&summary_path, &json)?;

    Ok(ReportArtifacts {
        html_path,
        summary_path,
    })
}

/// Charts sit next to the report, so the image reference is the bare file name.
fn relative_name(artifact: &ChartArtifact) -> &str {
    artifact
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(artifact.kind.file_name())
}

/// Idempotent: an existing directory is not an error.
pub fn ensure_output_dir(out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })
}

fn write_text(path: &Path, text: &str) -> Result<(), ReportError> {
    fs::write(path, text).map_err(|e| ReportError::write(path, e))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "report artifact written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
