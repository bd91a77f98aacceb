use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::pipeline::stage1_dataset::build_dataset;
use crate::pipeline::stage2_stats::run_stage2;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("evalsummary_charts_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_chart_file_names_are_fixed() {
    let names = ChartKind::all()
        .iter()
        .map(|k| k.file_name())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "evaluation_summary.png",
            "score_distribution.png",
            "top_bottom_performers.png",
            "performance_categories.png",
        ]
    );
}

#[test]
fn test_viridis_endpoints_and_palette() {
    assert_eq!(viridis(0.0), RGBColor(68, 1, 84));
    assert_eq!(viridis(1.0), RGBColor(253, 231, 37));
    assert_eq!(viridis(0.5), RGBColor(33, 145, 140));
    assert_eq!(viridis(-3.0), viridis(0.0));
    let palette = viridis_palette(28);
    assert_eq!(palette.len(), 28);
    assert_eq!(palette[0], viridis(0.0));
    assert_eq!(palette[27], viridis(1.0));
    assert!(viridis_palette(0).is_empty());
}

#[test]
fn test_font_registration_is_repeatable() {
    ensure_font().unwrap();
    ensure_font().unwrap();
}

#[test]
fn test_every_chart_renders_png() {
    let dataset = build_dataset();
    let thresholds = ReportThresholds::default_v1();
    let stage2 = run_stage2(&dataset.rows, &thresholds);
    let input = ChartInput::new(&dataset.rows, &stage2, &thresholds);
    let dir = make_temp_dir();
    for &kind in ChartKind::all() {
        let path = render_chart(kind, &input, &dir).unwrap();
        assert_eq!(path, dir.join(kind.file_name()));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}

#[test]
fn test_rendering_is_byte_identical() {
    let dataset = build_dataset();
    let thresholds = ReportThresholds::default_v1();
    let stage2 = run_stage2(&dataset.rows, &thresholds);
    let input = ChartInput::new(&dataset.rows, &stage2, &thresholds);
    let first = make_temp_dir();
    let second = make_temp_dir();
    for &kind in ChartKind::all() {
        let a = std::fs::read(render_chart(kind, &input, &first).unwrap()).unwrap();
        let b = std::fs::read(render_chart(kind, &input, &second).unwrap()).unwrap();
        assert_eq!(a, b, "{} differs between runs", kind.file_name());
    }
}

#[test]
fn test_unwritable_target_is_a_render_error() {
    let dataset = build_dataset();
    let thresholds = ReportThresholds::default_v1();
    let stage2 = run_stage2(&dataset.rows, &thresholds);
    let input = ChartInput::new(&dataset.rows, &stage2, &thresholds);
    let dir = make_temp_dir().join("missing").join("nested");
    let err = render_chart(ChartKind::CategoryCounts, &input, &dir).unwrap_err();
    match err {
        ReportError::Render { path, .. } => {
            assert_eq!(path, dir.join("performance_categories.png"))
        }
        other => panic!("unexpected error: {other}"),
    }
}
