pub mod stage1_dataset;
pub mod stage2_stats;
pub mod stage3_charts;
pub mod stage4_report;
pub mod stage5_launch;

use std::path::Path;

use crate::error::ReportError;
use crate::model::thresholds::ReportThresholds;
use stage1_dataset::run_stage1;
use stage2_stats::run_stage2;
use stage3_charts::run_stage3;
use stage4_report::{ReportArtifacts, Stage4Input, ensure_output_dir, write_reports};

pub const OUTPUT_DIR: &str = "evaluation_reports";

/// Dataset, statistics, charts and report, in that order. Browser launch is left to the caller.
pub fn run_pipeline(out_dir: &Path, generated_at: String) -> Result<ReportArtifacts, ReportError> {
    let thresholds = ReportThresholds::default_v1();
    ensure_output_dir(out_dir)?;

    let dataset = run_stage1();
    let stage2 = run_stage2(&dataset.rows, &thresholds);
    let charts = run_stage3(&dataset.rows, &stage2, &thresholds, out_dir)?;

    let input = Stage4Input {
        rows: &dataset.rows,
        stage2: &stage2,
        charts: &charts,
        thresholds: &thresholds,
        generated_at,
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, out_dir)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
