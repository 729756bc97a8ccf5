// SPDX-License-Identifier: Apache-2.0

//! Implements the `trend` subcommand: re-render one previously written view
//! CSV as a density scatter with a fixed quadratic reference curve overlaid,
//! for eyeballing the empirical growth trend against `y = 5x^2`.

use std::path::Path;

use clap::ArgMatches;

use crate::plot::{dedup_counts, render_density_scatter, ScatterStyle};
use crate::toolchain_config::{get_out_dir, ToolchainConfig};

/// Exclusive upper bound of the reference curve's x range.
pub const TREND_X_LIMIT: u64 = 40;

/// The fixed reference curve `y = 5x^2` over `[0, TREND_X_LIMIT)`.
pub fn quadratic_reference() -> Vec<(f64, f64)> {
    (0..TREND_X_LIMIT)
        .map(|x| (x as f64, 5.0 * (x * x) as f64))
        .collect()
}

/// Reads a headerless `width,gates` CSV back into its two integer columns.
pub fn read_view_csv(path: &Path) -> Result<(Vec<u64>, Vec<u64>), String> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        if record.len() != 2 {
            return Err(format!(
                "expected 2 columns in {}, got {}",
                path.display(),
                record.len()
            ));
        }
        let x = record[0]
            .parse::<u64>()
            .map_err(|e| format!("bad width {:?} in {}: {}", &record[0], path.display(), e))?;
        let y = record[1]
            .parse::<u64>()
            .map_err(|e| format!("bad gate count {:?} in {}: {}", &record[1], path.display(), e))?;
        xs.push(x);
        ys.push(y);
    }
    Ok((xs, ys))
}

pub fn handle_trend(matches: &ArgMatches, config: &Option<ToolchainConfig>) -> Result<(), String> {
    let view = matches
        .get_one::<String>("view")
        .ok_or("view argument is required")?;
    let out_dir = get_out_dir(matches, config);

    let csv_path = out_dir.join(format!("{}.csv", view));
    let (xs, ys) = read_view_csv(&csv_path)?;

    let png_path = out_dir.join(format!("{}.fit.png", view));
    let points = dedup_counts(&xs, &ys);
    let style = ScatterStyle {
        alpha: 0.1,
        x_desc: "port width".to_string(),
        caption: view.to_string(),
    };
    render_density_scatter(&png_path, &points, &style, Some(&quadratic_reference()))
        .map_err(|e| format!("failed to render {}: {}", png_path.display(), e))?;

    println!("wrote {}", png_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quadratic_reference_shape() {
        let curve = quadratic_reference();
        assert_eq!(curve.len(), TREND_X_LIMIT as usize);
        assert_eq!(curve[0], (0.0, 0.0));
        assert_eq!(curve[6], (6.0, 180.0));
        assert_eq!(curve[39], (39.0, 7605.0));
    }
}
