pub mod html;
pub mod json;

use std::cmp::Ordering;

use serde::Serialize;

use crate::model::category::{PerformanceCategory, category_order};
use crate::model::criteria::EvaluationRow;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub category: PerformanceCategory,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreStats {
    pub n_criteria: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub max: f64,
    pub min: f64,
    pub below_average: usize,
    pub uncategorized: usize,
}

/// Everything the insights block and the summary artifact need, computed once from the rows.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub rows: &'a [EvaluationRow],
    pub stats: ScoreStats,
    pub max_rows: Vec<&'a EvaluationRow>,
    pub min_rows: Vec<&'a EvaluationRow>,
    pub strengths: Vec<&'a EvaluationRow>,
    pub needs_improvement: Vec<&'a EvaluationRow>,
    pub category_counts: Vec<CategoryCount>,
    pub strength_min: f64,
    pub improvement_max: f64,
    pub generated_at: String,
}

pub fn format_mark(v: f64) -> String {
    format!("{:.1}", v)
}

pub fn marks(rows: &[EvaluationRow]) -> Vec<f64> {
    rows.iter().map(|r| r.mark).collect()
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>();
    (ss / (values.len() - 1) as f64).sqrt()
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Highest mark first; equal marks keep insertion order.
pub fn rank_descending(rows: &[EvaluationRow]) -> Vec<&EvaluationRow> {
    let mut out = rows.iter().collect::<Vec<_>>();
    out.sort_by(|a, b| {
        b.mark
            .partial_cmp(&a.mark)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    out
}

/// Lowest mark first; equal marks keep insertion order.
pub fn rank_ascending(rows: &[EvaluationRow]) -> Vec<&EvaluationRow> {
    let mut out = rows.iter().collect::<Vec<_>>();
    out.sort_by(|a, b| {
        a.mark
            .partial_cmp(&b.mark)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    out
}

pub fn top_k(rows: &[EvaluationRow], k: usize) -> Vec<&EvaluationRow> {
    rank_descending(rows).into_iter().take(k).collect()
}

pub fn bottom_k(rows: &[EvaluationRow], k: usize) -> Vec<&EvaluationRow> {
    rank_ascending(rows).into_iter().take(k).collect()
}

pub fn max_rows(rows: &[EvaluationRow]) -> Vec<&EvaluationRow> {
    let Some(max) = rows.iter().map(|r| r.mark).reduce(f64::max) else {
        return Vec::new();
    };
    rows.iter().filter(|r| r.mark == max).collect()
}

pub fn min_rows(rows: &[EvaluationRow]) -> Vec<&EvaluationRow> {
    let Some(min) = rows.iter().map(|r| r.mark).reduce(f64::min) else {
        return Vec::new();
    };
    rows.iter().filter(|r| r.mark == min).collect()
}

pub fn at_or_above(rows: &[EvaluationRow], threshold: f64) -> Vec<&EvaluationRow> {
    rank_descending(rows)
        .into_iter()
        .filter(|r| r.mark >= threshold)
        .collect()
}

pub fn at_or_below(rows: &[EvaluationRow], threshold: f64) -> Vec<&EvaluationRow> {
    rank_ascending(rows)
        .into_iter()
        .filter(|r| r.mark <= threshold)
        .collect()
}

pub fn below_average_count(rows: &[EvaluationRow], average: f64) -> usize {
    rows.iter().filter(|r| r.mark < average).count()
}

/// One entry per category in severity order, zero counts included.
pub fn category_counts(rows: &[EvaluationRow]) -> Vec<CategoryCount> {
    category_order()
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: rows
                .iter()
                .filter(|r| r.category == Some(category))
                .count(),
        })
        .collect()
}

pub fn score_stats(rows: &[EvaluationRow]) -> ScoreStats {
    let values = marks(rows);
    let avg = mean(&values);
    ScoreStats {
        n_criteria: rows.len(),
        mean: avg,
        median: median(&values),
        std_dev: std_dev(&values),
        max: values.iter().copied().reduce(f64::max).unwrap_or(0.0),
        min: values.iter().copied().reduce(f64::min).unwrap_or(0.0),
        below_average: below_average_count(rows, avg),
        uncategorized: rows.iter().filter(|r| r.category.is_none()).count(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
