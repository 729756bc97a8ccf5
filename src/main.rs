// SPDX-License-Identifier: Apache-2.0

//! Command line driver that sweeps randomized `test_cell` instances through
//! an external Yosys binary and charts how gate count grows with port width.
//!
//! Commands are given like:
//!
//! ```text
//! cellsize-driver <global-options> <command> <command-args-and-options>
//! ```
//!
//! Commands are:
//!
//! - sweep: runs `test_cell` for each cell type, parses the reports, and
//!   writes per-view CSV + scatter PNG artifacts.
//! - trend: re-plots one view CSV with a quadratic reference curve overlaid.
//!
//! Sample usage:
//!
//! ```shell
//! $ cargo run -- sweep --yosys ./yosys --n 100 '$add' '$mul'
//! $ cargo run -- trend divfloor.sum
//! ```

mod artifact;
mod plot;
mod report;
mod report_cli_error;
mod sweep;
mod toolchain_config;
mod trend;
mod yosys;

use clap::{Arg, ArgAction};
use serde::Deserialize;

use crate::report_cli_error::report_cli_error_and_exit;
use crate::toolchain_config::ToolchainConfig;

#[derive(Deserialize)]
struct CellsizeToolchain {
    toolchain: ToolchainConfig,
}

fn main() {
    env_logger::init();

    let matches = clap::Command::new("cellsize-driver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sweeps Yosys test_cell instances and charts gate-count growth")
        .arg(
            Arg::new("toolchain")
                .long("toolchain")
                .value_name("TOOLCHAIN")
                .help("Path to a cellsize-toolchain.toml file")
                .action(ArgAction::Set),
        )
        .subcommand(
            clap::Command::new("sweep")
                .about("Synthesizes randomized instances per cell type and writes CSV/PNG views")
                .arg(
                    Arg::new("cells")
                        .value_name("CELLS")
                        .help("Cell types to sweep, e.g. $add (falls back to the config list)")
                        .num_args(0..)
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("n")
                        .long("n")
                        .value_name("N")
                        .help("Randomized instances per cell")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("out_dir")
                        .long("out_dir")
                        .value_name("DIR")
                        .help("Directory to write artifacts into")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("yosys")
                        .long("yosys")
                        .value_name("PATH")
                        .help("Path to the Yosys binary")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            clap::Command::new("trend")
                .about("Overlays a quadratic reference curve on one view CSV")
                .arg(
                    Arg::new("view")
                        .value_name("VIEW")
                        .help("View to re-plot, e.g. divfloor.sum")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("out_dir")
                        .long("out_dir")
                        .value_name("DIR")
                        .help("Directory holding the view CSV")
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(clap::Command::new("version").about("Prints the version"))
        .get_matches();

    let mut toml_path: Option<String> = matches
        .get_one::<String>("toolchain")
        .map(|s| s.to_string());

    // If there is no toolchain flag specified, but there is a
    // cellsize-toolchain.toml in the current directory, use that.
    if toml_path.is_none() {
        if let Ok(cwd) = std::env::current_dir() {
            let cwd_toml_path = cwd.join("cellsize-toolchain.toml");
            if cwd_toml_path.exists() {
                log::info!(
                    "Using cellsize-toolchain.toml in current directory: {}",
                    cwd_toml_path.display()
                );
                toml_path = Some(cwd_toml_path.to_string_lossy().to_string());
            }
        }
    }

    let config: Option<ToolchainConfig> = toml_path.map(|path| {
        if !std::path::Path::new(&path).exists() {
            report_cli_error_and_exit(
                "toolchain toml file does not exist",
                None,
                &[("path", &path)],
            );
        }
        let toml_str = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) => report_cli_error_and_exit(
                "failed to read toolchain toml file",
                None,
                &[("path", &path), ("error", &e.to_string())],
            ),
        };
        let parsed: CellsizeToolchain = match toml::from_str(&toml_str) {
            Ok(p) => p,
            Err(e) => report_cli_error_and_exit(
                "failed to parse toolchain toml file",
                None,
                &[("path", &path), ("error", &e.to_string())],
            ),
        };
        parsed.toolchain
    });

    if let Some(matches) = matches.subcommand_matches("sweep") {
        if let Err(e) = sweep::handle_sweep(matches, &config) {
            report_cli_error_and_exit(&e, Some("sweep"), &[]);
        }
    } else if let Some(matches) = matches.subcommand_matches("trend") {
        if let Err(e) = trend::handle_trend(matches, &config) {
            report_cli_error_and_exit(&e, Some("trend"), &[]);
        }
    } else if matches.subcommand_matches("version").is_some() {
        println!("{}", env!("CARGO_PKG_VERSION"));
    } else {
        report_cli_error_and_exit("No valid subcommand provided.", None, &[]);
    }
}
