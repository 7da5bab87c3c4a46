use crate::Result;
use crate::metrics::{Metric, MetricRegistry, Unit};
use crate::weapons::{BonusModel, Target, Weapon};
use compact_str::{CompactString, format_compact};
use strum::IntoEnumIterator;

/// One row of a report: a metric (or unit group) and its values.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub key: CompactString,
    pub label: CompactString,
    pub unit: Unit,
    pub values: Vec<f64>,
}

/// Rows of metric values under named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportTable {
    pub columns: Vec<CompactString>,
    pub rows: Vec<ReportRow>,
}

/// Combat context shared by the value-producing tables.
#[derive(Debug)]
pub struct CombatContext<'a, M: BonusModel + ?Sized> {
    pub bonus: &'a M,
    pub target: Target,
    pub num_targets: u32,
    pub mount_multiplier: f64,
}

impl ReportTable {
    /// A value-less table describing each metric.
    pub fn catalog<'a>(metrics: impl IntoIterator<Item = &'a Metric>) -> Self {
        Self {
            columns: Vec::new(),
            rows: metrics.into_iter().map(|metric| row(metric, Vec::new())).collect(),
        }
    }

    /// Metric values with one column per weapon.
    pub fn values<'a, M: BonusModel + ?Sized>(metrics: impl IntoIterator<Item = &'a Metric>, weapons: &[Weapon], ctx: &CombatContext<'_, M>) -> Self {
        let rows = metrics
            .into_iter()
            .map(|metric| {
                let values = weapons
                    .iter()
                    .map(|weapon| metric.generate_with(ctx.bonus, weapon, ctx.target, ctx.num_targets, ctx.mount_multiplier))
                    .collect();
                row(metric, values)
            })
            .collect();

        Self {
            columns: weapons.iter().map(|weapon| weapon.name.clone()).collect(),
            rows,
        }
    }

    /// Min and max of each metric across `weapons`.
    ///
    /// # Errors
    ///
    /// Returns an error if `weapons` is empty
    pub fn ranges<'a, M: BonusModel + ?Sized>(metrics: impl IntoIterator<Item = &'a Metric>, weapons: &[Weapon], ctx: &CombatContext<'_, M>) -> Result<Self> {
        let rows = metrics
            .into_iter()
            .map(|metric| -> Result<ReportRow> {
                let range = metric.get_range_with(ctx.bonus, weapons, ctx.target, ctx.num_targets, ctx.mount_multiplier)?;
                Ok(row(metric, vec![range.min, range.max]))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            columns: min_max_columns(),
            rows,
        })
    }

    /// Min and max across all metrics of each unit, skipping units with no metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if `weapons` is empty
    pub fn unit_ranges<M: BonusModel + ?Sized>(registry: &MetricRegistry, weapons: &[Weapon], ctx: &CombatContext<'_, M>) -> Result<Self> {
        let mut rows = Vec::new();

        for unit in Unit::iter() {
            let count = registry.by_unit(unit).count();
            if count == 0 {
                continue;
            }

            let range = registry.unit_range_with(ctx.bonus, unit, weapons, ctx.target, ctx.num_targets, ctx.mount_multiplier)?;
            rows.push(ReportRow {
                key: CompactString::const_new(unit.label()),
                label: format_compact!("{count} metrics"),
                unit,
                values: vec![range.min, range.max],
            });
        }

        Ok(Self {
            columns: min_max_columns(),
            rows,
        })
    }
}

fn row(metric: &Metric, values: Vec<f64>) -> ReportRow {
    ReportRow {
        key: metric.id().into(),
        label: metric.label().into(),
        unit: metric.unit(),
        values,
    }
}

fn min_max_columns() -> Vec<CompactString> {
    vec![CompactString::const_new("Min"), CompactString::const_new("Max")]
}
