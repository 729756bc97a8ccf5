// SPDX-License-Identifier: Apache-2.0

//! Writes the artifacts for one view of a swept cell: a headerless
//! two-column CSV plus a density scatter PNG.

use std::path::Path;

use crate::plot::{dedup_counts, render_density_scatter, ScatterStyle};

/// Writes `<cell>.<suffix>.csv` with one `width,gates` record per pair.
pub fn write_view_csv(path: &Path, widths: &[u64], gates: &[u64]) -> Result<(), String> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    for (&width, &gate_count) in widths.iter().zip(gates.iter()) {
        wtr.write_record([width.to_string(), gate_count.to_string()])
            .map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
    }
    wtr.flush()
        .map_err(|e| format!("failed to flush {}: {}", path.display(), e))?;
    Ok(())
}

/// Writes the CSV and scatter PNG for one view of `cell_name`.
///
/// A length mismatch between the two sequences is not fatal: some views do
/// not apply to every cell (e.g. max input width for a cell with no inputs),
/// so the view is skipped with a warning and `Ok(false)` is returned.
pub fn write_view(
    out_dir: &Path,
    cell_name: &str,
    suffix: &str,
    widths: &[u64],
    gates: &[u64],
    title: &str,
) -> Result<bool, String> {
    if widths.len() != gates.len() {
        log::warn!(
            "skipping {} view for {}: {} width values vs {} gate counts",
            suffix,
            cell_name,
            widths.len(),
            gates.len()
        );
        return Ok(false);
    }

    let csv_path = out_dir.join(format!("{}.{}.csv", cell_name, suffix));
    write_view_csv(&csv_path, widths, gates)?;

    let png_path = out_dir.join(format!("{}.{}.png", cell_name, suffix));
    let points = dedup_counts(widths, gates);
    let style = ScatterStyle {
        alpha: 0.5,
        x_desc: format!("{} port width", suffix),
        caption: title.to_string(),
    };
    render_density_scatter(&png_path, &points, &style, None)
        .map_err(|e| format!("failed to render {}: {}", png_path.display(), e))?;
    Ok(true)
}
