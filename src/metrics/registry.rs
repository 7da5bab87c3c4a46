use super::{Metric, Range, Unit, standard_metrics};
use crate::Result;
use crate::weapons::{BonusModel, StandardBonus, Target, Weapon};
use compact_str::CompactString;
use ohno::bail;
use std::collections::HashMap;
use std::sync::LazyLock;

const LOG_TARGET: &str = "   metrics";

/// The built-in metric registry, built on first use.
pub static METRICS: LazyLock<MetricRegistry> =
    LazyLock::new(|| MetricRegistry::standard().expect("built-in metric definitions should have unique ids"));

/// An ordered list of metrics plus an id index.
///
/// Ordering is generation order and is meant for display. Ids are unique.
#[derive(Debug, Clone)]
pub struct MetricRegistry {
    metrics: Vec<Metric>,
    index: HashMap<CompactString, usize>,
}

impl MetricRegistry {
    /// Build a registry, rejecting duplicate metric ids.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first id that appears more than once
    pub fn new(metrics: Vec<Metric>) -> Result<Self> {
        let mut index = HashMap::with_capacity(metrics.len());

        for (position, metric) in metrics.iter().enumerate() {
            if index.insert(CompactString::from(metric.id()), position).is_some() {
                bail!("duplicate metric id: {}", metric.id());
            }
        }

        log::debug!(target: LOG_TARGET, "Registered {} metrics", metrics.len());
        Ok(Self { metrics, index })
    }

    /// Build a registry of the built-in metrics.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in definitions contain a duplicate id
    pub fn standard() -> Result<Self> {
        Self::new(standard_metrics())
    }

    #[must_use]
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Metric> {
        self.index.get(id).map(|&position| &self.metrics[position])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Metrics measured in `unit`, in registry order.
    pub fn by_unit(&self, unit: Unit) -> impl Iterator<Item = &Metric> {
        self.metrics.iter().filter(move |metric| metric.unit() == unit)
    }

    /// Combined range of every metric measured in `unit`, using the standard bonus rules.
    ///
    /// # Errors
    ///
    /// Returns an error if `weapons` is empty or no metric uses `unit`
    pub fn unit_range(&self, unit: Unit, weapons: &[Weapon], target: Target, num_targets: u32, mount_multiplier: f64) -> Result<Range> {
        self.unit_range_with(&StandardBonus::default(), unit, weapons, target, num_targets, mount_multiplier)
    }

    /// Combined range of every metric measured in `unit`.
    ///
    /// Metrics sharing a unit are comparable, so charts use this to put different attack
    /// categories on one consistent scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `weapons` is empty or no metric uses `unit`
    pub fn unit_range_with<M: BonusModel + ?Sized>(
        &self,
        bonus: &M,
        unit: Unit,
        weapons: &[Weapon],
        target: Target,
        num_targets: u32,
        mount_multiplier: f64,
    ) -> Result<Range> {
        let mut combined: Option<Range> = None;
        for metric in self.by_unit(unit) {
            let range = metric.get_range_with(bonus, weapons, target, num_targets, mount_multiplier)?;
            combined = Some(combined.map_or(range, |acc| acc.union(range)));
        }

        match combined {
            Some(range) => Ok(range),
            None => bail!("no metrics are measured in {unit}"),
        }
    }
}

impl<'a> IntoIterator for &'a MetricRegistry {
    type Item = &'a Metric;
    type IntoIter = core::slice::Iter<'a, Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.metrics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{AttackField, AttackSource, Generator};
    use crate::weapons::{Attacks, DamageType, StandaloneKind};

    fn throw_damage(id: &str) -> Metric {
        Metric::new(
            id,
            "Throw - Damage",
            Unit::Damage,
            Generator::Attack {
                source: AttackSource::Standalone(StandaloneKind::Throw),
                field: AttackField::Damage,
            },
        )
    }

    #[test]
    fn test_standard_registry() {
        let registry = MetricRegistry::standard().unwrap();
        assert_eq!(registry.len(), 80);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let err = MetricRegistry::new(vec![throw_damage("td"), throw_damage("x"), throw_damage("td")]).unwrap_err();
        assert!(err.to_string().contains("duplicate metric id: td"), "unexpected error: {err}");
    }

    #[test]
    fn test_get_and_contains() {
        let registry = MetricRegistry::new(vec![throw_damage("td"), throw_damage("x")]).unwrap();
        assert_eq!(registry.get("x").map(Metric::id), Some("x"));
        assert!(registry.contains("td"));
        assert!(registry.get("zz").is_none());
    }

    #[test]
    fn test_by_unit() {
        let ranges: Vec<_> = METRICS.by_unit(Unit::Range).map(Metric::id).collect();
        assert_eq!(ranges, ["ar", "aar", "sr", "sar", "or", "oar", "str", "star"]);
        assert_eq!(METRICS.by_unit(Unit::Speed).count(), 12);
        assert_eq!(METRICS.by_unit(Unit::InverseSpeed).count(), 48);
        assert_eq!(METRICS.by_unit(Unit::Damage).count(), 12);
        assert_eq!(METRICS.by_unit(Unit::Rank).count(), 0);
    }

    #[test]
    fn test_unit_range_spans_categories() {
        let mut short = Attacks::default();
        short.stab.range = 50.0;
        short.average.alt_range = 60.0;
        let mut long = Attacks::default();
        long.overhead.range = 120.0;

        let weapons = [
            Weapon::new("Dagger", DamageType::Cut, short),
            Weapon::new("Polehammer", DamageType::Blunt, long),
        ];

        let range = METRICS.unit_range(Unit::Range, &weapons, Target::Knight, 1, 1.0).unwrap();
        assert_eq!(range, Range::new(0.0, 120.0));
    }

    #[test]
    fn test_unit_range_without_metrics_is_error() {
        let weapons = [Weapon::new("Axe", DamageType::Chop, Attacks::default())];
        assert!(METRICS.unit_range(Unit::Rank, &weapons, Target::Knight, 1, 1.0).is_err());
    }

    #[test]
    fn test_unit_range_uses_custom_bonus() {
        let mut attacks = Attacks::default();
        attacks.slash.heavy.damage = 100.0;
        let weapons = [Weapon::new("Greatsword", DamageType::Cut, attacks)];
        let bonus = |_: u32, _: Target, _: DamageType, cleave: bool| if cleave { 3.0 } else { 1.0 };

        let range = METRICS
            .unit_range_with(&bonus, Unit::Damage, &weapons, Target::Footman, 3, 1.0)
            .unwrap();
        assert_eq!(range, Range::new(0.0, 300.0));
    }

    #[test]
    fn test_into_iterator_preserves_order() {
        let ids: Vec<_> = (&*METRICS).into_iter().take(3).map(Metric::id).collect();
        assert_eq!(ids, ["ald", "alw", "alrl"]);
    }
}
