use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::charts::{FONT_FAMILY, viridis_palette};
use crate::model::criteria::EvaluationRow;
use crate::report::{CategoryCount, format_mark, rank_descending};

pub const ABOVE_AVERAGE: RGBColor = RGBColor(0, 128, 0);
pub const BELOW_AVERAGE: RGBColor = RGBColor(255, 0, 0);

/// Longer descriptions are cut to this many characters plus `...` on the extremes chart.
pub const SHORT_LABEL_CHARS: usize = 30;

const LABEL_FONT_SIZE: u32 = 14;
const LABEL_GAP: i32 = 8;
const X_DESC_ROOM: u32 = 40;
const BAR_MARGIN: u32 = 4;

#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: RGBColor,
    pub annotation: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReferenceLine {
    pub value: f64,
    pub color: RGBColor,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct BarChartSpec {
    pub caption: &'static str,
    pub x_desc: &'static str,
    pub y_desc: &'static str,
    pub bars: Vec<Bar>,
    pub reference: Option<ReferenceLine>,
    pub rotate_labels: bool,
    pub integer_axis: bool,
}

pub fn average_line(average: f64, color: RGBColor) -> ReferenceLine {
    ReferenceLine {
        value: average,
        color,
        label: format!("Average ({})", format_mark(average)),
    }
}

pub fn short_label(text: &str) -> String {
    if text.chars().count() <= SHORT_LABEL_CHARS {
        return text.to_string();
    }
    let head = text.chars().take(SHORT_LABEL_CHARS).collect::<String>();
    format!("{head}...")
}

/// Every row, highest mark first, with a red line at the mean.
pub fn ranked_spec(rows: &[EvaluationRow], average: f64) -> BarChartSpec {
    let ranked = rank_descending(rows);
    let palette = viridis_palette(ranked.len());
    let bars = ranked
        .iter()
        .zip(palette)
        .map(|(row, color)| Bar {
            label: row.id.clone(),
            value: row.mark,
            color,
            annotation: None,
        })
        .collect();
    BarChartSpec {
        caption: "Evaluation Summary by Criteria",
        x_desc: "Criteria",
        y_desc: "Marks",
        bars,
        reference: Some(average_line(average, RED)),
        rotate_labels: true,
        integer_axis: false,
    }
}

/// Top rows followed by bottom rows; green at or above the mean, red below.
pub fn extremes_spec(
    top: &[&EvaluationRow],
    bottom: &[&EvaluationRow],
    average: f64,
) -> BarChartSpec {
    let bars = top
        .iter()
        .chain(bottom)
        .map(|row| Bar {
            label: short_label(&row.description),
            value: row.mark,
            color: if row.mark >= average {
                ABOVE_AVERAGE
            } else {
                BELOW_AVERAGE
            },
            annotation: Some(format_mark(row.mark)),
        })
        .collect();
    BarChartSpec {
        caption: "Top 5 and Bottom 5 Performing Criteria",
        x_desc: "Description",
        y_desc: "Marks",
        bars,
        reference: Some(average_line(average, BLACK)),
        rotate_labels: true,
        integer_axis: false,
    }
}

pub fn categories_spec(counts: &[CategoryCount]) -> BarChartSpec {
    let palette = viridis_palette(counts.len());
    let bars = counts
        .iter()
        .zip(palette)
        .map(|(entry, color)| Bar {
            label: entry.category.label().to_string(),
            value: entry.count as f64,
            color,
            annotation: Some(entry.count.to_string()),
        })
        .collect();
    BarChartSpec {
        caption: "Performance Distribution by Category",
        x_desc: "Performance Category",
        y_desc: "Number of Criteria",
        bars,
        reference: None,
        rotate_labels: false,
        integer_axis: true,
    }
}

fn value_ceiling(spec: &BarChartSpec) -> f64 {
    let max_bar = spec.bars.iter().map(|b| b.value).fold(0.0f64, f64::max);
    let max_ref = spec.reference.as_ref().map(|r| r.value).unwrap_or(0.0);
    (max_bar.max(max_ref) * 1.15).max(1.0)
}

/// Pixel geometry of a drawn bar chart: the row of the x axis and the
/// left/right edge of every bar slot, in backend coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLayout {
    pub axis_y: i32,
    pub slots: Vec<(i32, i32)>,
}

pub fn draw_bar_chart(
    out_path: &Path,
    size: (u32, u32),
    spec: &BarChartSpec,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, size).into_drawing_area();
    draw_bars(&root, spec)?;
    root.present()?;
    Ok(())
}

fn label_style(spec: &BarChartSpec) -> TextStyle<'static> {
    if spec.rotate_labels {
        // Rotate90 turns the anchor's left edge into the top, so the text
        // starts just under the axis and runs downward.
        TextStyle::from(
            (FONT_FAMILY, LABEL_FONT_SIZE)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .pos(Pos::new(HPos::Left, VPos::Center))
    } else {
        TextStyle::from((FONT_FAMILY, LABEL_FONT_SIZE).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top))
    }
}

/// Height of the area under the axis: the longest label plus room for the axis title.
fn label_area_size<DB>(
    root: &DrawingArea<DB, Shift>,
    spec: &BarChartSpec,
) -> Result<u32, Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let measure = TextStyle::from((FONT_FAMILY, LABEL_FONT_SIZE).into_font());
    let mut extent = 0u32;
    for bar in &spec.bars {
        let (w, h) = root.estimate_text_size(&bar.label, &measure)?;
        extent = extent.max(if spec.rotate_labels { w } else { h });
    }
    Ok(extent + LABEL_GAP as u32 + X_DESC_ROOM)
}

pub fn draw_bars<DB>(
    root: &DrawingArea<DB, Shift>,
    spec: &BarChartSpec,
) -> Result<BarLayout, Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let n = spec.bars.len() as u32;
    let y_max = value_ceiling(spec);
    root.fill(&WHITE)?;

    // Segmented coords over 0..=n-1 give exactly one slot per bar.
    let mut chart = ChartBuilder::on(root)
        .caption(spec.caption, (FONT_FAMILY, 28))
        .margin(20)
        .x_label_area_size(label_area_size(root, spec)?)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..n.saturating_sub(1)).into_segmented(), 0f64..y_max)?;

    let integer_axis = spec.integer_axis;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(TRANSPARENT)
        .x_desc(spec.x_desc)
        .y_desc(spec.y_desc)
        .axis_desc_style((FONT_FAMILY, 18))
        .x_labels(spec.bars.len() + 2)
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|v| {
            if integer_axis {
                format!("{:.0}", v)
            } else {
                format!("{:.1}", v)
            }
        })
        .y_label_style((FONT_FAMILY, 14))
        .draw()?;

    chart.draw_series(spec.bars.iter().enumerate().map(|(i, bar)| {
        let i = i as u32;
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), bar.value),
            ],
            bar.color.filled(),
        );
        rect.set_margin(0, 0, BAR_MARGIN, BAR_MARGIN);
        rect
    }))?;

    let annotation_style =
        TextStyle::from((FONT_FAMILY, 16).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    let pad = y_max * 0.01;
    chart.draw_series(spec.bars.iter().enumerate().filter_map(|(i, bar)| {
        bar.annotation.as_ref().map(|text| {
            Text::new(
                text.clone(),
                (SegmentValue::CenterOf(i as u32), bar.value + pad),
                annotation_style.clone(),
            )
        })
    }))?;

    if let Some(reference) = &spec.reference {
        let color = reference.color;
        chart
            .draw_series(DashedLineSeries::new(
                vec![
                    (SegmentValue::Exact(0), reference.value),
                    (SegmentValue::Last, reference.value),
                ],
                10,
                6,
                color.stroke_width(2),
            ))?
            .label(reference.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font((FONT_FAMILY, 16))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    let axis_y = chart.backend_coord(&(SegmentValue::Exact(0), 0.0)).1;
    let style = label_style(spec);
    let mut slots = Vec::with_capacity(spec.bars.len());
    for (i, bar) in spec.bars.iter().enumerate() {
        let i = i as u32;
        let left = chart.backend_coord(&(SegmentValue::Exact(i), 0.0)).0;
        let right = chart.backend_coord(&(SegmentValue::Exact(i + 1), 0.0)).0;
        let center = chart.backend_coord(&(SegmentValue::CenterOf(i), 0.0)).0;
        root.draw(&Text::new(
            bar.label.as_str(),
            (center, axis_y + LABEL_GAP),
            style.clone(),
        ))?;
        slots.push((left, right));
    }

    Ok(BarLayout { axis_y, slots })
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/bars.rs"]
mod tests;
