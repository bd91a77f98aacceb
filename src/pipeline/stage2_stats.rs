use crate::model::criteria::EvaluationRow;
use crate::model::thresholds::ReportThresholds;
use crate::report::{
    CategoryCount, ScoreStats, at_or_above, at_or_below, bottom_k, category_counts, format_mark,
    max_rows, min_rows, score_stats, top_k,
};

#[derive(Debug, Clone)]
pub struct Stage2Output<'a> {
    pub stats: ScoreStats,
    pub top: Vec<&'a EvaluationRow>,
    pub bottom: Vec<&'a EvaluationRow>,
    pub max_rows: Vec<&'a EvaluationRow>,
    pub min_rows: Vec<&'a EvaluationRow>,
    pub strengths: Vec<&'a EvaluationRow>,
    pub needs_improvement: Vec<&'a EvaluationRow>,
    pub category_counts: Vec<CategoryCount>,
}

pub fn run_stage2<'a>(
    rows: &'a [EvaluationRow],
    thresholds: &ReportThresholds,
) -> Stage2Output<'a> {
    let stats = score_stats(rows);
    let out = Stage2Output {
        top: top_k(rows, thresholds.extremes_k),
        bottom: bottom_k(rows, thresholds.extremes_k),
        max_rows: max_rows(rows),
        min_rows: min_rows(rows),
        strengths: at_or_above(rows, thresholds.strength_min),
        needs_improvement: at_or_below(rows, thresholds.improvement_max),
        category_counts: category_counts(rows),
        stats,
    };
    tracing::debug!(
        mean = %format_mark(out.stats.mean),
        median = %format_mark(out.stats.median),
        below_average = out.stats.below_average,
        strengths = out.strengths.len(),
        needs_improvement = out.needs_improvement.len(),
        "score statistics"
    );
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_stats.rs"]
mod tests;
