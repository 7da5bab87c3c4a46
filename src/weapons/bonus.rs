use super::{DamageType, Target};
use serde::{Deserialize, Serialize};

/// Computes the damage multiplier an attack receives against a target.
pub trait BonusModel {
    fn bonus_mult(&self, num_targets: u32, target: Target, damage_type: DamageType, can_cleave: bool) -> f64;
}

impl<F> BonusModel for F
where
    F: Fn(u32, Target, DamageType, bool) -> f64,
{
    fn bonus_mult(&self, num_targets: u32, target: Target, damage_type: DamageType, can_cleave: bool) -> f64 {
        self(num_targets, target, damage_type, can_cleave)
    }
}

/// Per damage type multipliers against one target class.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DamageMultipliers {
    pub blunt: f64,
    pub chop: f64,
    pub cut: f64,
}

impl DamageMultipliers {
    #[must_use]
    pub const fn get(&self, damage_type: DamageType) -> f64 {
        match damage_type {
            DamageType::Blunt => self.blunt,
            DamageType::Chop => self.chop,
            DamageType::Cut => self.cut,
        }
    }

    fn iter(&self) -> impl Iterator<Item = f64> {
        [self.blunt, self.chop, self.cut].into_iter()
    }
}

/// Table-driven bonus rules.
///
/// The multiplier is `(can_cleave ? num_targets : 1) * table[target][damage_type]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct StandardBonus {
    pub vanguard_archer: DamageMultipliers,
    pub footman: DamageMultipliers,
    pub knight: DamageMultipliers,
}

impl StandardBonus {
    pub const NEUTRAL: DamageMultipliers = DamageMultipliers {
        blunt: 1.0,
        chop: 1.0,
        cut: 1.0,
    };

    #[must_use]
    pub const fn multipliers(&self, target: Target) -> &DamageMultipliers {
        match target {
            Target::VanguardArcher => &self.vanguard_archer,
            Target::Footman => &self.footman,
            Target::Knight => &self.knight,
        }
    }

    /// Smallest multiplier in the table, used to reject negative or non-finite entries.
    #[must_use]
    pub fn min_multiplier(&self) -> f64 {
        self.vanguard_archer
            .iter()
            .chain(self.footman.iter())
            .chain(self.knight.iter())
            .fold(f64::INFINITY, f64::min)
    }

    #[must_use]
    pub fn all_finite(&self) -> bool {
        self.vanguard_archer
            .iter()
            .chain(self.footman.iter())
            .chain(self.knight.iter())
            .all(f64::is_finite)
    }
}

impl Default for StandardBonus {
    fn default() -> Self {
        Self {
            vanguard_archer: Self::NEUTRAL,
            footman: DamageMultipliers {
                blunt: 1.15,
                chop: 1.1,
                cut: 1.0,
            },
            knight: DamageMultipliers {
                blunt: 1.35,
                chop: 1.25,
                cut: 1.0,
            },
        }
    }
}

impl BonusModel for StandardBonus {
    fn bonus_mult(&self, num_targets: u32, target: Target, damage_type: DamageType, can_cleave: bool) -> f64 {
        let hits = if can_cleave { f64::from(num_targets) } else { 1.0 };
        hits * self.multipliers(target).get(damage_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_target_uses_table() {
        let bonus = StandardBonus::default();
        assert!((bonus.bonus_mult(1, Target::Knight, DamageType::Blunt, true) - 1.35).abs() < 1e-9);
        assert!((bonus.bonus_mult(1, Target::VanguardArcher, DamageType::Chop, false) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cleave_scales_with_targets() {
        let bonus = StandardBonus::default();
        assert!((bonus.bonus_mult(3, Target::Footman, DamageType::Cut, true) - 3.0).abs() < 1e-9);
        assert!((bonus.bonus_mult(3, Target::Footman, DamageType::Cut, false) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_closure_is_a_bonus_model() {
        let model = |n: u32, _: Target, _: DamageType, cleave: bool| if cleave { f64::from(n) * 2.0 } else { 0.5 };
        assert!((model.bonus_mult(2, Target::Knight, DamageType::Cut, true) - 4.0).abs() < 1e-9);
        assert!((model.bonus_mult(2, Target::Knight, DamageType::Cut, false) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_min_multiplier() {
        let mut bonus = StandardBonus::default();
        assert!((bonus.min_multiplier() - 1.0).abs() < 1e-9);
        bonus.knight.cut = -0.5;
        assert!((bonus.min_multiplier() + 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_all_finite() {
        let mut bonus = StandardBonus::default();
        assert!(bonus.all_finite());
        bonus.footman.chop = f64::NAN;
        assert!(!bonus.all_finite());
    }
}
