//! Derive unit-tagged metrics from Chivalry weapon definitions.
//!
//! # Usage
//!
//! List the metric catalog:
//!
//! ```bash
//! chivalry-metrics list
//! chivalry-metrics list --unit range
//! ```
//!
//! Compute every metric for each weapon in a file, against two knights:
//!
//! ```bash
//! chivalry-metrics eval --weapons weapons.json --target knight --num-targets 2
//! ```
//!
//! Compute min/max values per metric, or per unit, as CSV:
//!
//! ```bash
//! chivalry-metrics ranges --weapons weapons.yaml --format csv
//! chivalry-metrics ranges --weapons weapons.yaml --by-unit
//! ```
//!
//! # Configuration
//!
//! `chivalry-metrics init` writes `chivalry-metrics.toml` holding the default target,
//! target count, mount multiplier, and the per-target damage bonus table. It is picked up
//! from the current directory, or given explicitly with `--config`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use chivalry_metrics::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that writes to the real stdout and stderr.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args())
}
