use super::{Generator, Range, Unit};
use crate::Result;
use crate::weapons::{BonusModel, StandardBonus, Target, Weapon};
use compact_str::CompactString;
use ohno::bail;

/// A named, unit-tagged scalar statistic derived from a weapon and combat context.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    id: CompactString,
    label: CompactString,
    unit: Unit,
    generator: Generator,
}

impl Metric {
    #[must_use]
    pub fn new(id: impl Into<CompactString>, label: impl Into<CompactString>, unit: Unit, generator: Generator) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            unit,
            generator,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub const fn generator(&self) -> Generator {
        self.generator
    }

    /// Compute this metric for `weapon` using the standard bonus rules.
    #[must_use]
    pub fn generate(&self, weapon: &Weapon, target: Target, num_targets: u32, mount_multiplier: f64) -> f64 {
        self.generate_with(&StandardBonus::default(), weapon, target, num_targets, mount_multiplier)
    }

    /// Compute this metric for `weapon` using custom bonus rules.
    pub fn generate_with<M: BonusModel + ?Sized>(
        &self,
        bonus: &M,
        weapon: &Weapon,
        target: Target,
        num_targets: u32,
        mount_multiplier: f64,
    ) -> f64 {
        self.generator.generate(bonus, weapon, target, num_targets, mount_multiplier)
    }

    /// Minimum and maximum of this metric over `weapons`, using the standard bonus rules.
    ///
    /// # Errors
    ///
    /// Returns an error if `weapons` is empty
    pub fn get_range(&self, weapons: &[Weapon], target: Target, num_targets: u32, mount_multiplier: f64) -> Result<Range> {
        self.get_range_with(&StandardBonus::default(), weapons, target, num_targets, mount_multiplier)
    }

    /// Minimum and maximum of this metric over `weapons`, using custom bonus rules.
    ///
    /// # Errors
    ///
    /// Returns an error if `weapons` is empty
    pub fn get_range_with<M: BonusModel + ?Sized>(
        &self,
        bonus: &M,
        weapons: &[Weapon],
        target: Target,
        num_targets: u32,
        mount_multiplier: f64,
    ) -> Result<Range> {
        let values = weapons
            .iter()
            .map(|weapon| self.generate_with(bonus, weapon, target, num_targets, mount_multiplier));

        match Range::from_values(values) {
            Some(range) => Ok(range),
            None => bail!("cannot compute the range of metric '{}' over an empty weapon list", self.id),
        }
    }
}
