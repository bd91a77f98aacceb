use serde::Serialize;

use crate::model::criteria::EvaluationRow;
use crate::report::{CategoryCount, ReportContext, ScoreStats};

#[derive(Debug, Serialize)]
struct SummaryJson<'a> {
    tool: &'a str,
    version: &'a str,
    generated_at: &'a str,
    statistics: &'a ScoreStats,
    strengths: Vec<&'a str>,
    needs_improvement: Vec<&'a str>,
    categories: &'a [CategoryCount],
    criteria: &'a [EvaluationRow],
    artifacts: &'a [&'a str],
}

pub fn render_summary_json(
    ctx: &ReportContext<'_>,
    tool_version: &str,
    artifacts: &[&str],
) -> Result<String, serde_json::Error> {
    let summary = SummaryJson {
        tool: "evalsummary",
        version: tool_version,
        generated_at: &ctx.generated_at,
        statistics: &ctx.stats,
        strengths: ctx.strengths.iter().map(|r| r.id.as_str()).collect(),
        needs_improvement: ctx
            .needs_improvement
            .iter()
            .map(|r| r.id.as_str())
            .collect(),
        categories: &ctx.category_counts,
        criteria: ctx.rows,
        artifacts,
    };
    let mut out = serde_json::to_string_pretty(&summary)?;
    out.push('\n');
    Ok(out)
}
