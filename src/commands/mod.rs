//! Command-line interface for chivalry-metrics
//!
//! # Commands
//!
//! - **list**: Print the metric catalog, optionally restricted to one unit
//! - **eval**: Load a weapon file and compute metric values for each weapon
//! - **ranges**: Compute min/max values per metric, or per unit group, across a weapon file
//! - **init**: Generate a default configuration file
//! - **validate**: Check a configuration file
//!
//! `eval` and `ranges` resolve a combat context (target, target count, mount multiplier
//! and bonus table) from the configuration file, then apply command-line overrides.
//! Every reporting command renders one [`ReportTable`](crate::reports::ReportTable)
//! in console, CSV, or JSON form.

mod common;
mod config;
mod eval;
mod host;
mod init;
mod list;
mod ranges;
mod run;
mod validate;

pub use common::{ColorMode, ContextArgs, LogLevel, OutputArgs, OutputFormat, WeaponArgs, select_metrics};
pub use config::{CONFIG_FILE_NAME, Config};
pub use eval::{EvalArgs, evaluate_weapons};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use list::{ListArgs, list_metrics};
pub use ranges::{RangesArgs, compute_ranges};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
