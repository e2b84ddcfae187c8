//! Chart rendering sinks.
//!
//! Thin wrappers over `plotters` that the pipelines hand their series to.
//! Everything here is presentation: data selection, filtering, and ordering
//! happen in [`crate::series`] before these functions are called.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;

use crate::config::ChunkerConfig;

/// Bar fill color (matches the reference charts).
const BAR_COLOR: RGBColor = RGBColor(0, 128, 255);

/// One named scatter series: a chunk-size distribution for one algorithm.
#[derive(Debug, Clone)]
pub struct ScatterSeries {
    /// Legend label, normally the algorithm identifier.
    pub name: String,

    /// (stream index, chunk size) coordinates.
    pub points: Vec<(f64, f64)>,
}

/// Renders per-algorithm chunk sizes against the configured bounds.
///
/// Each series is drawn as small palette-colored dots with a legend entry.
/// Horizontal guide lines mark the bounds: red at `min_size` and `max_size`,
/// green at `avg_size`. `x_max` is the longest raw series length, so all
/// series and the guide lines share one x range.
pub fn scatter_chart(
    path: &Path,
    title: &str,
    series: &[ScatterSeries],
    bounds: &ChunkerConfig,
    x_max: usize,
) -> Result<()> {
    let x_max = x_max.max(1) as f64;
    let y_max = bounds.max_size() as f64 * 1.1;

    let root = BitMapBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart.configure_mesh().x_desc("Index").y_desc("Size").draw()?;

    for (i, s) in series.iter().enumerate() {
        let color = Palette99::pick(i).mix(1.0);
        chart
            .draw_series(
                s.points
                    .iter()
                    .map(|&point| Circle::new(point, 1, color.filled())),
            )?
            .label(&s.name)
            .legend(move |(x, y)| Circle::new((x + 10, y), 3, color.filled()));
    }

    for (size, color) in [
        (bounds.min_size(), RED),
        (bounds.max_size(), RED),
        (bounds.avg_size(), GREEN),
    ] {
        let y = size as f64;
        chart.draw_series(LineSeries::new(vec![(0.0, y), (x_max, y)], &color))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Renders one bar per label, in the order given.
///
/// Callers pass pre-sorted parallel label/value vectors (see
/// [`crate::series::benchmark_series`]); this function only draws.
pub fn bar_chart(
    path: &Path,
    title: &str,
    y_label: &str,
    labels: &[String],
    values: &[f64],
) -> Result<()> {
    let y_max = values.iter().copied().fold(0.0f64, f64::max).max(1.0) * 1.1;

    let root = BitMapBackend::new(path, (1280, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(90)
        .y_label_area_size(70)
        .build_cartesian_2d((0usize..labels.len()).into_segmented(), 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len().max(1))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .y_desc(y_label)
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, &value)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), value),
            ],
            BAR_COLOR.filled(),
        );
        bar.set_margin(0, 0, 4, 4);
        bar
    }))?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
