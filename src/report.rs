// SPDX-License-Identifier: Apache-2.0

//! Line grammar for the report emitted by Yosys' `test_cell` pass.
//!
//! The pass prints one stat block plus an RTLIL dump per generated test
//! instance. The lines we extract data from look like:
//!
//! ```text
//!      Number of cells:                 42
//!   wire width 5 input 1 \A
//!   wire output 2 \Y
//! ```
//!
//! Everything else in the report is ignored. Port lines come in exactly two
//! shapes: six tokens with an explicit `width` annotation, or four tokens for
//! a single-bit port. Any other shape means the tool output format changed
//! underneath us, which is fatal.

/// Name the `test_cell` pass gives the primary output port of every
/// generated instance (RTLIL escaped-identifier spelling).
pub const PRIMARY_OUTPUT_NAME: &str = "\\Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

/// One `wire ... input/output ...` declaration from the RTLIL dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortLine {
    pub width: u64,
    pub direction: PortDirection,
    pub name: String,
}

impl PortLine {
    pub fn is_primary_output(&self) -> bool {
        self.name == PRIMARY_OUTPUT_NAME
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReportLine {
    CellCount(u64),
    Port(PortLine),
    Other,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReportError {
    PortTokenCount {
        expected: usize,
        got: usize,
        line: String,
    },
    BadInteger {
        token: String,
        line: String,
    },
    RunCountMismatch {
        expected: usize,
        got: usize,
    },
    UnevenPortCount {
        total: usize,
        runs: usize,
    },
    UnevenInputCount {
        total: usize,
        runs: usize,
    },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PortTokenCount {
                expected,
                got,
                line,
            } => write!(
                f,
                "expected {} tokens in port line, got {}: {:?}",
                expected, got, line
            ),
            Self::BadInteger { token, line } => {
                write!(f, "expected integer, got {:?} in line {:?}", token, line)
            }
            Self::RunCountMismatch { expected, got } => write!(
                f,
                "expected {} test instances in report, got {}",
                expected, got
            ),
            Self::UnevenPortCount { total, runs } => write!(
                f,
                "{} port lines do not divide evenly across {} test instances",
                total, runs
            ),
            Self::UnevenInputCount { total, runs } => write!(
                f,
                "{} input port lines do not divide evenly across {} test instances",
                total, runs
            ),
        }
    }
}

impl std::error::Error for ReportError {}

fn parse_count_token(token: &str, line: &str) -> Result<u64, ReportError> {
    token.parse::<u64>().map_err(|_| ReportError::BadInteger {
        token: token.to_string(),
        line: line.to_string(),
    })
}

fn parse_port_line(line: &str) -> Result<PortLine, ReportError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let direction = if line.contains("input") {
        PortDirection::Input
    } else {
        PortDirection::Output
    };
    let width = if line.contains("width") {
        if words.len() != 6 {
            return Err(ReportError::PortTokenCount {
                expected: 6,
                got: words.len(),
                line: line.to_string(),
            });
        }
        parse_count_token(words[2], line)?
    } else {
        if words.len() != 4 {
            return Err(ReportError::PortTokenCount {
                expected: 4,
                got: words.len(),
                line: line.to_string(),
            });
        }
        // Single-bit ports carry no width annotation.
        1
    };
    let name = words.last().map(|s| s.to_string()).unwrap_or_default();
    Ok(PortLine {
        width,
        direction,
        name,
    })
}

/// Classifies one report line. Lines that are neither a cell-count line nor a
/// port declaration are `Other`; a malformed port declaration is an error.
pub fn classify_line(line: &str) -> Result<ReportLine, ReportError> {
    if line.contains("Number of cells") {
        let token = line.split_whitespace().last().unwrap_or("");
        return Ok(ReportLine::CellCount(parse_count_token(token, line)?));
    }
    if line.contains("wire") && (line.contains("output") || line.contains("input")) {
        return Ok(ReportLine::Port(parse_port_line(line)?));
    }
    Ok(ReportLine::Other)
}

/// Per-cell sweep data extracted from one `test_cell` report.
///
/// `gate_counts` has one entry per test instance; the width vectors are flat
/// and grouped per-instance by the aggregate methods below.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CellSweep {
    pub gate_counts: Vec<u64>,
    pub y_widths: Vec<u64>,
    pub port_widths: Vec<u64>,
    pub input_widths: Vec<u64>,
}

impl CellSweep {
    /// Sum of all port widths of each test instance.
    pub fn port_width_sums(&self) -> Vec<u64> {
        Self::grouped(&self.port_widths, self.gate_counts.len(), |group| {
            group.iter().sum()
        })
    }

    /// Widest input port of each test instance. Empty for cells that declare
    /// no input ports at all.
    pub fn max_input_widths(&self) -> Vec<u64> {
        Self::grouped(&self.input_widths, self.gate_counts.len(), |group| {
            group.iter().copied().max().unwrap_or(0)
        })
    }

    fn grouped(widths: &[u64], runs: usize, f: impl Fn(&[u64]) -> u64) -> Vec<u64> {
        if widths.is_empty() || runs == 0 {
            return vec![];
        }
        let per_run = widths.len() / runs;
        if per_run == 0 {
            return vec![];
        }
        widths.chunks(per_run).map(|group| f(group)).collect()
    }
}

/// Parses the full report for one cell type, expecting `expected_runs` test
/// instances. Each instance must declare the same number of ports (and of
/// input ports); the grouping in the aggregate methods relies on it.
pub fn parse_report(text: &str, expected_runs: usize) -> Result<CellSweep, ReportError> {
    let mut sweep = CellSweep::default();
    for line in text.lines() {
        match classify_line(line)? {
            ReportLine::CellCount(count) => sweep.gate_counts.push(count),
            ReportLine::Port(port) => {
                if port.is_primary_output() {
                    sweep.y_widths.push(port.width);
                } else if port.direction == PortDirection::Input {
                    sweep.input_widths.push(port.width);
                }
                sweep.port_widths.push(port.width);
            }
            ReportLine::Other => {}
        }
    }

    let runs = sweep.gate_counts.len();
    if runs != expected_runs {
        return Err(ReportError::RunCountMismatch {
            expected: expected_runs,
            got: runs,
        });
    }
    if runs > 0 {
        if sweep.port_widths.len() % runs != 0 {
            return Err(ReportError::UnevenPortCount {
                total: sweep.port_widths.len(),
                runs,
            });
        }
        if sweep.input_widths.len() % runs != 0 {
            return Err(ReportError::UnevenInputCount {
                total: sweep.input_widths.len(),
                runs,
            });
        }
    }
    Ok(sweep)
}
