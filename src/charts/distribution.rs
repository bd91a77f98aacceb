use std::error::Error;
use std::f64::consts::PI;
use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::charts::FONT_FAMILY;
use crate::charts::bars::average_line;
use crate::model::criteria::EvaluationRow;
use crate::report::{format_mark, marks, std_dev};

pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const SKY_BLUE_EDGE: RGBColor = RGBColor(70, 130, 180);
const DENSITY_POINTS: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl HistogramBins {
    pub fn bin_width(&self) -> f64 {
        match self.edges.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }
}

/// Equal-width bins over `[min, max]`; every bin is half-open except the last, which
/// includes `max`. A degenerate range is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram_bins(values: &[f64], bins: usize) -> HistogramBins {
    let bins = bins.max(1);
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (mut lo, mut hi) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() {
        lo = 0.0;
        hi = 1.0;
    } else if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let edges = (0..=bins)
        .map(|i| if i == bins { hi } else { lo + width * i as f64 })
        .collect::<Vec<_>>();

    let mut counts = vec![0usize; bins];
    for &v in values {
        if !v.is_finite() || v < lo || v > hi {
            continue;
        }
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    HistogramBins { edges, counts }
}

/// Scott's rule: `n^(-1/5) * sample std`.
pub fn scott_bandwidth(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    (values.len() as f64).powf(-0.2) * std_dev(values)
}

pub fn gaussian_kde(values: &[f64], bandwidth: f64, x: f64) -> f64 {
    if values.is_empty() || bandwidth <= 0.0 {
        return 0.0;
    }
    let norm = 1.0 / (values.len() as f64 * bandwidth * (2.0 * PI).sqrt());
    values
        .iter()
        .map(|&v| {
            let z = (x - v) / bandwidth;
            (-0.5 * z * z).exp()
        })
        .sum::<f64>()
        * norm
}

/// KDE sampled across the histogram range and scaled from density to counts
/// (`density * n * bin_width`) so it overlays the bars.
pub fn density_curve(values: &[f64], bins: &HistogramBins) -> Vec<(f64, f64)> {
    let bandwidth = scott_bandwidth(values);
    let (Some(&lo), Some(&hi)) = (bins.edges.first(), bins.edges.last()) else {
        return Vec::new();
    };
    if bandwidth <= 0.0 {
        return Vec::new();
    }
    let scale = values.len() as f64 * bins.bin_width();
    let step = (hi - lo) / (DENSITY_POINTS - 1) as f64;
    (0..DENSITY_POINTS)
        .map(|i| {
            let x = lo + step * i as f64;
            (x, gaussian_kde(values, bandwidth, x) * scale)
        })
        .collect()
}

pub fn draw_distribution(
    out_path: &Path,
    size: (u32, u32),
    rows: &[EvaluationRow],
    average: f64,
    bin_count: usize,
) -> Result<(), Box<dyn Error>> {
    let values = marks(rows);
    let bins = histogram_bins(&values, bin_count);
    let curve = density_curve(&values, &bins);

    let x_lo = bins.edges.first().copied().unwrap_or(0.0);
    let x_hi = bins.edges.last().copied().unwrap_or(1.0);
    let pad = (x_hi - x_lo) * 0.03;
    let max_count = bins.counts.iter().copied().max().unwrap_or(0) as f64;
    let max_curve = curve.iter().map(|&(_, y)| y).fold(0.0f64, f64::max);
    let y_max = (max_count.max(max_curve) * 1.15).max(1.0);

    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Distribution of Evaluation Scores", (FONT_FAMILY, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((x_lo - pad)..(x_hi + pad), 0f64..y_max)?;

    chart
        .configure_mesh()
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(TRANSPARENT)
        .x_desc("Marks")
        .y_desc("Frequency")
        .axis_desc_style((FONT_FAMILY, 18))
        .x_labels(12)
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .label_style((FONT_FAMILY, 14))
        .draw()?;

    let spans = bins.edges.windows(2).zip(bins.counts.iter());
    chart.draw_series(spans.clone().map(|(edge, &count)| {
        Rectangle::new([(edge[0], 0.0), (edge[1], count as f64)], SKY_BLUE.filled())
    }))?;
    chart.draw_series(spans.map(|(edge, &count)| {
        Rectangle::new(
            [(edge[0], 0.0), (edge[1], count as f64)],
            SKY_BLUE_EDGE.stroke_width(1),
        )
    }))?;

    if !curve.is_empty() {
        chart
            .draw_series(LineSeries::new(curve, SKY_BLUE_EDGE.stroke_width(2)))?
            .label("Density")
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], SKY_BLUE_EDGE.stroke_width(2))
            });
    }

    let reference = average_line(average, RED);
    chart
        .draw_series(DashedLineSeries::new(
            vec![(reference.value, 0.0), (reference.value, y_max)],
            10,
            6,
            RED.stroke_width(2),
        ))?
        .label(reference.label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT_FAMILY, 16))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    tracing::debug!(
        bins = bins.counts.len(),
        bin_width = %format_mark(bins.bin_width()),
        "score histogram"
    );

    root.present()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/distribution.rs"]
mod tests;
