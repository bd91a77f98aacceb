pub mod bars;
pub mod distribution;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{FontStyle, RGBColor, register_font};

use crate::error::ReportError;
use crate::model::criteria::EvaluationRow;
use crate::model::thresholds::ReportThresholds;
use crate::pipeline::stage2_stats::Stage2Output;
use crate::report::CategoryCount;

pub const FONT_FAMILY: &str = "sans-serif";

static FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static FONT_REGISTRATION: OnceLock<Result<(), String>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    RankedScores,
    ScoreDistribution,
    TopBottom,
    CategoryCounts,
}

impl ChartKind {
    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::RankedScores,
            ChartKind::ScoreDistribution,
            ChartKind::TopBottom,
            ChartKind::CategoryCounts,
        ]
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::RankedScores => "evaluation_summary.png",
            ChartKind::ScoreDistribution => "score_distribution.png",
            ChartKind::TopBottom => "top_bottom_performers.png",
            ChartKind::CategoryCounts => "performance_categories.png",
        }
    }

    pub fn section_title(self) -> &'static str {
        match self {
            ChartKind::RankedScores => "Overall Performance by Criteria",
            ChartKind::ScoreDistribution => "Score Distribution",
            ChartKind::TopBottom => "Top and Bottom Performers",
            ChartKind::CategoryCounts => "Performance Categories",
        }
    }

    pub fn alt_text(self) -> &'static str {
        match self {
            ChartKind::RankedScores => "Evaluation Summary",
            ChartKind::ScoreDistribution => "Score Distribution",
            ChartKind::TopBottom => "Top and Bottom Performers",
            ChartKind::CategoryCounts => "Performance Categories",
        }
    }

    /// Pixel size of the rendered bitmap.
    pub fn size(self) -> (u32, u32) {
        match self {
            ChartKind::RankedScores => (1600, 1000),
            ChartKind::ScoreDistribution => (1200, 600),
            ChartKind::TopBottom => (1400, 800),
            ChartKind::CategoryCounts => (1200, 600),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartInput<'a> {
    pub rows: &'a [EvaluationRow],
    pub average: f64,
    pub top: &'a [&'a EvaluationRow],
    pub bottom: &'a [&'a EvaluationRow],
    pub category_counts: &'a [CategoryCount],
    pub histogram_bins: usize,
}

impl<'a> ChartInput<'a> {
    pub fn new(
        rows: &'a [EvaluationRow],
        stage2: &'a Stage2Output<'a>,
        thresholds: &ReportThresholds,
    ) -> Self {
        Self {
            rows,
            average: stage2.stats.mean,
            top: &stage2.top,
            bottom: &stage2.bottom,
            category_counts: &stage2.category_counts,
            histogram_bins: thresholds.histogram_bins,
        }
    }
}

/// Renders one chart into `out_dir` and returns the written path.
/// The bitmap backend lives only for this call and is flushed on drop even when drawing fails.
pub fn render_chart(
    kind: ChartKind,
    input: &ChartInput<'_>,
    out_dir: &Path,
) -> Result<PathBuf, ReportError> {
    ensure_font()?;
    let path = out_dir.join(kind.file_name());
    let size = kind.size();
    let result = match kind {
        ChartKind::RankedScores => {
            bars::draw_bar_chart(&path, size, &bars::ranked_spec(input.rows, input.average))
        }
        ChartKind::ScoreDistribution => distribution::draw_distribution(
            &path,
            size,
            input.rows,
            input.average,
            input.histogram_bins,
        ),
        ChartKind::TopBottom => bars::draw_bar_chart(
            &path,
            size,
            &bars::extremes_spec(input.top, input.bottom, input.average),
        ),
        ChartKind::CategoryCounts => {
            bars::draw_bar_chart(&path, size, &bars::categories_spec(input.category_counts))
        }
    };
    result.map_err(|e| ReportError::Render {
        path: path.clone(),
        message: e.to_string(),
    })?;
    tracing::info!(chart = kind.file_name(), path = %path.display(), "chart written");
    Ok(path)
}

pub fn ensure_font() -> Result<(), ReportError> {
    FONT_REGISTRATION
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
                .map_err(|_| "embedded DejaVu Sans font could not be parsed".to_string())
        })
        .clone()
        .map_err(ReportError::Font)
}

const VIRIDIS_ANCHORS: [(f64, [u8; 3]); 5] = [
    (0.00, [68, 1, 84]),
    (0.25, [59, 82, 139]),
    (0.50, [33, 145, 140]),
    (0.75, [94, 201, 98]),
    (1.00, [253, 231, 37]),
];

/// Viridis sampled at `t` in `[0, 1]`, linearly interpolated between anchors.
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    for pair in VIRIDIS_ANCHORS.windows(2) {
        let (t0, c0) = pair[0];
        let (t1, c1) = pair[1];
        if t <= t1 {
            let f = (t - t0) / (t1 - t0);
            let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
            return RGBColor(lerp(c0[0], c1[0]), lerp(c0[1], c1[1]), lerp(c0[2], c1[2]));
        }
    }
    let [r, g, b] = VIRIDIS_ANCHORS[VIRIDIS_ANCHORS.len() - 1].1;
    RGBColor(r, g, b)
}

/// `n` evenly spaced viridis colours, matching a seaborn palette of the same length.
pub fn viridis_palette(n: usize) -> Vec<RGBColor> {
    match n {
        0 => Vec::new(),
        1 => vec![viridis(0.5)],
        _ => (0..n).map(|i| viridis(i as f64 / (n - 1) as f64)).collect(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/mod.rs"]
mod tests;
