// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::ArgMatches;
use serde::Deserialize;

pub const DEFAULT_TEST_COUNT: usize = 100;
pub const DEFAULT_OUT_DIR: &str = "sizes";
pub const DEFAULT_YOSYS_PATH: &str = "./yosys";

#[derive(Deserialize)]
pub struct ToolchainConfig {
    /// Path to the Yosys binary hosting the `test_cell` pass.
    pub yosys_path: Option<String>,

    /// Directory that view CSVs and PNGs are written to (and read back from
    /// by the trend overlay).
    pub out_dir: Option<String>,

    /// Cell types to sweep, e.g. `$add`.
    pub cells: Option<Vec<String>>,

    /// Number of randomized instances generated per cell.
    pub test_count: Option<usize>,
}

/// Helper for extracting the Yosys binary path from the command line flag, if
/// specified, or the toolchain config if it's present and the cmdline flag
/// isn't specified.
pub fn get_yosys_path(matches: &ArgMatches, config: &Option<ToolchainConfig>) -> PathBuf {
    if let Some(yosys) = matches.get_one::<String>("yosys") {
        PathBuf::from(yosys)
    } else if let Some(yosys) = config.as_ref().and_then(|c| c.yosys_path.clone()) {
        PathBuf::from(yosys)
    } else {
        PathBuf::from(DEFAULT_YOSYS_PATH)
    }
}

pub fn get_out_dir(matches: &ArgMatches, config: &Option<ToolchainConfig>) -> PathBuf {
    if let Some(out_dir) = matches.get_one::<String>("out_dir") {
        PathBuf::from(out_dir)
    } else if let Some(out_dir) = config.as_ref().and_then(|c| c.out_dir.clone()) {
        PathBuf::from(out_dir)
    } else {
        PathBuf::from(DEFAULT_OUT_DIR)
    }
}

pub fn get_test_count(
    matches: &ArgMatches,
    config: &Option<ToolchainConfig>,
) -> Result<usize, String> {
    if let Some(n) = matches.get_one::<String>("n") {
        n.parse()
            .map_err(|e| format!("invalid --n value {:?}: {}", n, e))
    } else if let Some(test_count) = config.as_ref().and_then(|c| c.test_count) {
        Ok(test_count)
    } else {
        Ok(DEFAULT_TEST_COUNT)
    }
}

/// Cells given on the command line win over the config list.
pub fn get_cells(matches: &ArgMatches, config: &Option<ToolchainConfig>) -> Option<Vec<String>> {
    let from_args: Vec<String> = matches
        .get_many::<String>("cells")
        .map(|vals| vals.map(|s| s.to_string()).collect())
        .unwrap_or_default();
    if !from_args.is_empty() {
        return Some(from_args);
    }
    config.as_ref().and_then(|c| c.cells.clone())
}
