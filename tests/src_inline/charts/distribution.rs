use super::*;
use crate::pipeline::stage1_dataset::build_dataset;

#[test]
fn test_histogram_literal_dataset() {
    let values = marks(&build_dataset().rows);
    let bins = histogram_bins(&values, 10);
    assert_eq!(bins.edges.len(), 11);
    assert_eq!(bins.edges[0], 1.0);
    assert_eq!(bins.edges[10], 20.0);
    assert!((bins.bin_width() - 1.9).abs() < 1e-12);
    assert_eq!(bins.counts.iter().sum::<usize>(), 28);
    // [1, 2.9) holds the three 1.0 marks and six 2.0 marks.
    assert_eq!(bins.counts[0], 9);
    // 20.0 lands in the closed last bin.
    assert_eq!(bins.counts[9], 1);
}

#[test]
fn test_histogram_degenerate_range() {
    let bins = histogram_bins(&[3.0, 3.0], 4);
    assert_eq!(bins.edges.first(), Some(&2.5));
    assert_eq!(bins.edges.last(), Some(&3.5));
    assert_eq!(bins.counts.iter().sum::<usize>(), 2);
}

#[test]
fn test_histogram_empty_input() {
    let bins = histogram_bins(&[], 10);
    assert_eq!(bins.counts, vec![0; 10]);
}

#[test]
fn test_kde_integrates_to_one() {
    let values = vec![1.0, 2.0, 2.5, 4.0, 7.0];
    let bw = scott_bandwidth(&values);
    assert!(bw > 0.0);
    let step = 0.01;
    let mut area = 0.0;
    let mut x = -20.0;
    while x < 30.0 {
        area += gaussian_kde(&values, bw, x) * step;
        x += step;
    }
    assert!((area - 1.0).abs() < 1e-3);
}

#[test]
fn test_density_curve_scaled_to_counts() {
    let values = marks(&build_dataset().rows);
    let bins = histogram_bins(&values, 10);
    let curve = density_curve(&values, &bins);
    assert_eq!(curve.len(), 200);
    assert_eq!(curve[0].0, 1.0);
    assert!((curve[199].0 - 20.0).abs() < 1e-9);
    let peak = curve.iter().map(|&(_, y)| y).fold(0.0f64, f64::max);
    // Scaled density peaks on the order of the tallest bar, not near 0.1.
    assert!(peak > 2.0 && peak < 15.0);
}

#[test]
fn test_density_curve_empty_for_single_value() {
    let bins = histogram_bins(&[4.0], 10);
    assert!(density_curve(&[4.0], &bins).is_empty());
}
