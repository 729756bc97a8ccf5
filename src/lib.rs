// SPDX-License-Identifier: Apache-2.0

// Expose the modules needed by the integration tests and external users.
// Keep this facade minimal to avoid pulling in the whole CLI surface.
pub mod artifact;
pub mod plot;
pub mod report;
pub mod report_cli_error;
pub mod toolchain_config;
pub mod trend;
pub mod yosys;
