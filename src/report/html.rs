use std::fmt::Write;

use crate::model::criteria::EvaluationRow;
use crate::report::{ReportContext, format_mark};

pub struct ChartSection<'a> {
    pub title: &'a str,
    pub file_name: &'a str,
    pub alt: &'a str,
}

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; }
        .header { text-align: center; margin-bottom: 30px; }
        .chart { margin: 20px 0; border: 1px solid #ddd; padding: 20px; border-radius: 5px; }
        .chart img { max-width: 100%; height: auto; }
        .insights { background-color: #f8f9fa; padding: 20px; border-radius: 5px; margin: 20px 0; }
        .good { color: green; }
        .needs-improvement { color: red; }
"#;

pub fn render_report_html(ctx: &ReportContext<'_>, charts: &[ChartSection<'_>]) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("    <meta charset=\"utf-8\">\n");
    out.push_str("    <title>Evaluation Summary Report</title>\n");
    out.push_str("    <style>\n");
    out.push_str(STYLE);
    out.push_str("    </style>\n</head>\n<body>\n");

    out.push_str("    <div class=\"header\">\n");
    out.push_str("        <h1>Evaluation Summary Report</h1>\n");
    let _ = writeln!(
        out,
        "        <p>Generated on {}</p>",
        escape_html(&ctx.generated_at)
    );
    out.push_str("    </div>\n\n");

    for (i, chart) in charts.iter().enumerate() {
        out.push_str("    <div class=\"chart\">\n");
        let _ = writeln!(
            out,
            "        <h2>{}. {}</h2>",
            i + 1,
            escape_html(chart.title)
        );
        let _ = writeln!(
            out,
            "        <img src=\"{}\" alt=\"{}\">",
            escape_html(chart.file_name),
            escape_html(chart.alt)
        );
        out.push_str("    </div>\n\n");
    }

    push_insights(&mut out, ctx);

    out.push_str("</body>\n</html>\n");
    out
}

fn push_insights(out: &mut String, ctx: &ReportContext<'_>) {
    out.push_str("    <div class=\"insights\">\n");
    out.push_str("        <h2>Key Insights</h2>\n");

    let _ = writeln!(
        out,
        "        <h3 class=\"good\">\u{2705} Strengths (Scores \u{2265} {}):</h3>",
        format_threshold(ctx.strength_min)
    );
    push_row_list(out, &ctx.strengths);

    let _ = writeln!(
        out,
        "        <h3 class=\"needs-improvement\">\u{26a0}\u{fe0f} Areas Needing Improvement (Scores \u{2264} {}):</h3>",
        format_threshold(ctx.improvement_max)
    );
    push_row_list(out, &ctx.needs_improvement);

    out.push_str("        <h3>\u{1f4ca} Overall Statistics:</h3>\n");
    out.push_str("        <ul>\n");
    let _ = writeln!(
        out,
        "            <li>Average Score: {}</li>",
        format_mark(ctx.stats.mean)
    );
    let _ = writeln!(
        out,
        "            <li>Median Score: {}</li>",
        format_mark(ctx.stats.median)
    );
    let _ = writeln!(
        out,
        "            <li>Highest Score: {} ({})</li>",
        format_mark(ctx.stats.max),
        describe_holders(&ctx.max_rows)
    );
    let _ = writeln!(
        out,
        "            <li>Lowest Score: {} ({})</li>",
        format_mark(ctx.stats.min),
        describe_holders(&ctx.min_rows)
    );
    let _ = writeln!(
        out,
        "            <li>Number of criteria below average: {}/{}</li>",
        ctx.stats.below_average, ctx.stats.n_criteria
    );
    out.push_str("        </ul>\n");

    out.push_str("        <h3>Performance Categories:</h3>\n");
    out.push_str("        <ul>\n");
    for entry in &ctx.category_counts {
        let _ = writeln!(
            out,
            "            <li>{}: {}</li>",
            entry.category.label(),
            entry.count
        );
    }
    out.push_str("        </ul>\n");
    out.push_str("    </div>\n");
}

fn push_row_list(out: &mut String, rows: &[&EvaluationRow]) {
    out.push_str("        <ul>\n");
    if rows.is_empty() {
        out.push_str("            <li>None</li>\n");
    }
    for row in rows {
        let _ = writeln!(
            out,
            "            <li>{} ({}): {}</li>",
            escape_html(&row.description),
            escape_html(&row.id),
            format_mark(row.mark)
        );
    }
    out.push_str("        </ul>\n");
}

/// A single holder reads as `P.17 - Faculty research output`, ties as `P.3, P.9, P.24`.
fn describe_holders(rows: &[&EvaluationRow]) -> String {
    match rows {
        [] => "n/a".to_string(),
        [row] => format!(
            "{} - {}",
            escape_html(&row.id),
            escape_html(&row.description)
        ),
        many => many
            .iter()
            .map(|r| escape_html(&r.id))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn format_threshold(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format_mark(v)
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
