// SPDX-License-Identifier: Apache-2.0

//! Implements the `sweep` subcommand: synthesize randomized instances of each
//! configured cell type via the Yosys `test_cell` pass, parse the reports,
//! and write the three per-cell views (primary output width, summed port
//! width, max input width, each against gate count).

use clap::ArgMatches;

use crate::artifact::write_view;
use crate::report::parse_report;
use crate::toolchain_config::{
    get_cells, get_out_dir, get_test_count, get_yosys_path, ToolchainConfig,
};
use crate::yosys::run_test_cell;

pub fn handle_sweep(matches: &ArgMatches, config: &Option<ToolchainConfig>) -> Result<(), String> {
    let cells = get_cells(matches, config)
        .ok_or("no cells given; pass them as arguments or list them in the toolchain toml")?;
    let test_count = get_test_count(matches, config)?;
    let out_dir = get_out_dir(matches, config);
    let yosys = get_yosys_path(matches, config);

    std::fs::create_dir_all(&out_dir)
        .map_err(|e| format!("failed to create {}: {}", out_dir.display(), e))?;

    // Cells run strictly sequentially; the first failure aborts the batch.
    for cell in &cells {
        println!("{}", cell);
        let report = run_test_cell(&yosys, test_count, cell)?;
        let sweep = parse_report(&report, test_count).map_err(|e| format!("{}: {}", cell, e))?;

        // Internal cell names like `$add` become `add.*` artifact files.
        let file_stem = cell.strip_prefix('$').unwrap_or(cell);
        write_view(
            &out_dir,
            file_stem,
            "y",
            &sweep.y_widths,
            &sweep.gate_counts,
            cell,
        )?;
        write_view(
            &out_dir,
            file_stem,
            "sum",
            &sweep.port_width_sums(),
            &sweep.gate_counts,
            cell,
        )?;
        write_view(
            &out_dir,
            file_stem,
            "max_inp",
            &sweep.max_input_widths(),
            &sweep.gate_counts,
            cell,
        )?;
    }
    Ok(())
}
