use std::path::{Path, PathBuf};

use crate::charts::{ChartInput, ChartKind, render_chart};
use crate::error::ReportError;
use crate::model::criteria::EvaluationRow;
use crate::model::thresholds::ReportThresholds;
use crate::pipeline::stage2_stats::Stage2Output;

#[derive(Debug, Clone)]
pub struct ChartArtifact {
    pub kind: ChartKind,
    pub path: PathBuf,
}

/// Renders every chart in `ChartKind::all()` order. The first failure aborts the stage.
pub fn run_stage3(
    rows: &[EvaluationRow],
    stage2: &Stage2Output<'_>,
    thresholds: &ReportThresholds,
    out_dir: &Path,
) -> Result<Vec<ChartArtifact>, ReportError> {
    let input = ChartInput::new(rows, stage2, thresholds);
    let mut artifacts = Vec::with_capacity(ChartKind::all().len());
    for &kind in ChartKind::all() {
        let path = render_chart(kind, &input, out_dir)?;
        artifacts.push(ChartArtifact { kind, path });
    }
    Ok(artifacts)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_charts.rs"]
mod tests;
