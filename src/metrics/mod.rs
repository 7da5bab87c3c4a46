//! Metric derivation from weapon definitions
//!
//! This module turns nested weapon data into a flat, uniquely keyed catalog of
//! scalar metrics suitable for tables, charts, and normalization.
//!
//! # Implementation Model
//!
//! The core abstraction is the [`Metric`] type. Each metric has:
//! - **Id**: Short unique key (e.g., `ald` for average light damage)
//! - **Label**: Human-readable name (e.g., `Average (Light) - Damage`)
//! - **Unit**: The measurement scale ([`Unit`]) used to group comparable metrics
//! - **Generator**: A [`Generator`] naming the attack and field the value comes from
//!
//! The built-in metrics are generated in `definitions.rs` by crossing every
//! stance and weight with every attack field, adding the per-stance reach
//! metrics, and finally the standalone attacks. The result is validated by
//! [`MetricRegistry::new`], which rejects duplicate ids, and published through
//! the process-wide [`METRICS`] registry.
//!
//! Damage generators consult a [`BonusModel`](crate::weapons::BonusModel);
//! every other generator is a plain projection of weapon data and ignores the
//! combat context.

mod definitions;
mod generator;
mod metric;
mod range;
mod registry;
mod unit;

pub use definitions::standard_metrics;
pub use generator::{AttackField, AttackSource, Generator, ReachField};
pub use metric::Metric;
pub use range::Range;
pub use registry::{METRICS, MetricRegistry};
pub use unit::Unit;
