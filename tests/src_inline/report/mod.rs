use super::*;

fn rows(marks: &[f64]) -> Vec<EvaluationRow> {
    marks
        .iter()
        .enumerate()
        .map(|(i, &m)| EvaluationRow::new(i, m, &format!("criterion {}", i + 1)))
        .collect()
}

fn ids(rows: &[&EvaluationRow]) -> Vec<String> {
    rows.iter().map(|r| r.id.clone()).collect()
}

#[test]
fn test_mean_median_std() {
    let v = vec![1.0, 2.0, 3.0, 4.0];
    assert_eq!(mean(&v), 2.5);
    assert_eq!(median(&v), 2.5);
    assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
    assert!((std_dev(&v) - 1.290_994_448_735_805_6).abs() < 1e-12);
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(std_dev(&[4.0]), 0.0);
}

#[test]
fn test_rank_ties_keep_insertion_order() {
    let data = rows(&[2.0, 5.0, 2.0, 5.0, 1.0]);
    assert_eq!(
        ids(&rank_descending(&data)),
        vec!["P.2", "P.4", "P.1", "P.3", "P.5"]
    );
    assert_eq!(
        ids(&rank_ascending(&data)),
        vec!["P.5", "P.1", "P.3", "P.2", "P.4"]
    );
    assert_eq!(ids(&top_k(&data, 1)), vec!["P.2"]);
    assert_eq!(ids(&bottom_k(&data, 2)), vec!["P.5", "P.1"]);
}

#[test]
fn test_k_larger_than_rows() {
    let data = rows(&[3.0, 1.0]);
    assert_eq!(top_k(&data, 5).len(), 2);
    assert_eq!(bottom_k(&data, 5).len(), 2);
}

#[test]
fn test_max_min_rows_collect_ties() {
    let data = rows(&[1.0, 9.0, 1.0, 9.0, 4.0]);
    assert_eq!(ids(&max_rows(&data)), vec!["P.2", "P.4"]);
    assert_eq!(ids(&min_rows(&data)), vec!["P.1", "P.3"]);
    assert!(max_rows(&[]).is_empty());
}

#[test]
fn test_threshold_filters_are_inclusive() {
    let data = rows(&[15.0, 14.9, 5.0, 5.1, 20.0]);
    assert_eq!(ids(&at_or_above(&data, 15.0)), vec!["P.5", "P.1"]);
    assert_eq!(ids(&at_or_below(&data, 5.0)), vec!["P.3"]);
}

#[test]
fn test_below_average_is_strict() {
    let data = rows(&[2.0, 4.0, 6.0]);
    assert_eq!(below_average_count(&data, 4.0), 1);
}

#[test]
fn test_category_counts_include_empty_categories() {
    let data = rows(&[1.0, 2.0, 20.0, 0.0]);
    let counts = category_counts(&data);
    let pairs = counts
        .iter()
        .map(|c| (c.category, c.count))
        .collect::<Vec<_>>();
    assert_eq!(
        pairs,
        vec![
            (PerformanceCategory::NeedsImprovement, 2),
            (PerformanceCategory::BelowAverage, 0),
            (PerformanceCategory::Good, 0),
            (PerformanceCategory::Excellent, 1),
        ]
    );
    assert_eq!(score_stats(&data).uncategorized, 1);
}

#[test]
fn test_format_mark_one_decimal() {
    assert_eq!(format_mark(208.0 / 28.0), "7.4");
    assert_eq!(format_mark(20.0), "20.0");
}
