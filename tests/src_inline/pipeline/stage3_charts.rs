use super::*;
use crate::pipeline::stage1_dataset::build_dataset;
use crate::pipeline::stage2_stats::run_stage2;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("evalsummary_stage3_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_stage3_writes_four_charts_in_order() {
    let dataset = build_dataset();
    let thresholds = ReportThresholds::default_v1();
    let stage2 = run_stage2(&dataset.rows, &thresholds);
    let dir = make_temp_dir();
    let artifacts = run_stage3(&dataset.rows, &stage2, &thresholds, &dir).unwrap();
    let kinds = artifacts.iter().map(|a| a.kind).collect::<Vec<_>>();
    assert_eq!(kinds, ChartKind::all().to_vec());
    for artifact in &artifacts {
        assert!(artifact.path.is_file(), "{}", artifact.path.display());
    }
}

#[test]
fn test_stage3_fails_on_missing_directory() {
    let dataset = build_dataset();
    let thresholds = ReportThresholds::default_v1();
    let stage2 = run_stage2(&dataset.rows, &thresholds);
    let dir = make_temp_dir().join("absent");
    let err = run_stage3(&dataset.rows, &stage2, &thresholds, &dir).unwrap_err();
    assert!(err.to_string().contains("evaluation_summary.png"));
}
