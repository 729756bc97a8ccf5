// SPDX-License-Identifier: Apache-2.0

//! Helper for invoking the external Yosys binary that hosts the `test_cell`
//! pass.

use std::path::Path;
use std::process::Command;

/// Runs `test_cell -noeval -nosat -n <test_count> <cell>` under the given
/// Yosys binary and returns the captured stdout report.
///
/// The invocation is fully blocking; the report is only inspected once the
/// tool has exited. A nonzero exit status is fatal for the whole run.
pub fn run_test_cell(yosys: &Path, test_count: usize, cell: &str) -> Result<String, String> {
    let mut command = Command::new(yosys);
    command
        .arg("-p")
        .arg(format!("test_cell -noeval -nosat -n {} {}", test_count, cell));

    log::info!("Running command: {:?}", command);
    let output = command
        .output()
        .map_err(|e| format!("failed to run {}: {}", yosys.display(), e))?;

    if !output.status.success() {
        return Err(format!(
            "yosys exited with {} for cell {}; stderr: {}",
            output.status,
            cell,
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
