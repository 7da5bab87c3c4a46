//! chivalry-metrics crate
//!
//! Derives a flat catalog of unit-tagged weapon metrics (damage, windup, range, ...) so that
//! charts and tables can display or normalize per-weapon statistics across attack categories.
//!
//! # Module Organization
//!
//! - [`weapons`]: Weapon definitions, targets, and damage bonus rules
//! - [`metrics`]: The metric registry and range queries
//! - [`reports`]: Console, CSV, and JSON renderings of metric tables
//! - [`commands`]: Command-line interface

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod commands;
pub mod metrics;
pub mod reports;
pub mod weapons;

pub use crate::commands::{Host, run};
