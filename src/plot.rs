// SPDX-License-Identifier: Apache-2.0

//! Density-encoded scatter rendering shared by the sweep artifacts and the
//! trend overlay.

use std::collections::BTreeMap;
use std::path::Path;

use plotters::prelude::*;

/// Collapses duplicate (x, y) pairs into unique points with multiplicities.
/// The multiplicity drives the drawn circle's area.
pub fn dedup_counts(xs: &[u64], ys: &[u64]) -> BTreeMap<(u64, u64), usize> {
    let mut counts = BTreeMap::new();
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        *counts.entry((x, y)).or_insert(0) += 1;
    }
    counts
}

pub struct ScatterStyle {
    /// Opacity of the scatter points; the trend overlay uses a lighter wash
    /// than the per-cell views.
    pub alpha: f64,
    pub x_desc: String,
    pub caption: String,
}

/// Renders a density scatter to `path`, optionally overlaying a reference
/// curve as a line series.
pub fn render_density_scatter(
    path: &Path,
    points: &BTreeMap<(u64, u64), usize>,
    style: &ScatterStyle,
    overlay: Option<&[(f64, f64)]>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut x_hi = points.keys().map(|&(x, _)| x).max().unwrap_or(1) as f64;
    let mut y_hi = points.keys().map(|&(_, y)| y).max().unwrap_or(1) as f64;
    if let Some(curve) = overlay {
        for &(x, y) in curve {
            x_hi = x_hi.max(x);
            y_hi = y_hi.max(y);
        }
    }

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&style.caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_hi * 1.05 + 1.0, 0f64..y_hi * 1.05 + 1.0)?;

    chart
        .configure_mesh()
        .x_desc(style.x_desc.as_str())
        .y_desc("Gates")
        .draw()?;

    chart.draw_series(points.iter().map(|(&(x, y), &count)| {
        // Area proportional to multiplicity, so repeated pairs stand out.
        let radius = (10.0 * count as f64).sqrt().round() as i32;
        Circle::new(
            (x as f64, y as f64),
            radius,
            BLUE.mix(style.alpha).filled(),
        )
    }))?;

    if let Some(curve) = overlay {
        chart.draw_series(LineSeries::new(curve.iter().copied(), &RED))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dedup_counts_multiplicities() {
        let xs = [1, 1, 2, 1];
        let ys = [10, 10, 20, 11];
        let counts = dedup_counts(&xs, &ys);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&(1, 10)], 2);
        assert_eq!(counts[&(2, 20)], 1);
        assert_eq!(counts[&(1, 11)], 1);
    }
}
