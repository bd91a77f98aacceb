use super::*;
use crate::model::category::{PerformanceCategory, categorize};

#[test]
fn test_dataset_has_28_positional_ids() {
    let dataset = build_dataset();
    assert_eq!(dataset.rows.len(), 28);
    for (i, row) in dataset.rows.iter().enumerate() {
        assert_eq!(row.index, i);
        assert_eq!(row.id, format!("P.{}", i + 1));
        assert!(!row.description.is_empty());
    }
    assert_eq!(dataset.rows[16].description, "Faculty research output");
    assert_eq!(dataset.rows[16].mark, 20.0);
}

#[test]
fn test_every_row_category_matches_bins() {
    let dataset = build_dataset();
    for row in &dataset.rows {
        let expected = if row.mark > 0.0 && row.mark <= 5.0 {
            Some(PerformanceCategory::NeedsImprovement)
        } else if row.mark > 5.0 && row.mark <= 10.0 {
            Some(PerformanceCategory::BelowAverage)
        } else if row.mark > 10.0 && row.mark <= 15.0 {
            Some(PerformanceCategory::Good)
        } else if row.mark > 15.0 && row.mark <= 25.0 {
            Some(PerformanceCategory::Excellent)
        } else {
            None
        };
        assert_eq!(row.category, expected, "{}", row.id);
        assert_eq!(row.category, categorize(row.mark));
    }
    assert_eq!(dataset.uncategorized().count(), 0);
}

#[test]
fn test_category_membership() {
    let dataset = build_dataset();
    let excellent = dataset
        .rows
        .iter()
        .filter(|r| r.category == Some(PerformanceCategory::Excellent))
        .map(|r| r.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(excellent, vec!["P.15", "P.17", "P.18"]);
}

#[test]
fn test_build_is_deterministic() {
    assert_eq!(build_dataset().rows, build_dataset().rows);
}
