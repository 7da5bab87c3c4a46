use super::Unit;
use crate::weapons::{AttackStats, BonusModel, StandaloneKind, Stance, Target, Weapon, Weight};
use compact_str::{CompactString, format_compact};
use strum::EnumIter;

/// A damage or timing field of an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum AttackField {
    Damage,
    Windup,
    Release,
    Recovery,
    Combo,
    Holding,
}

impl AttackField {
    #[must_use]
    pub const fn id_suffix(self) -> &'static str {
        match self {
            Self::Damage => "d",
            Self::Windup => "w",
            Self::Release => "rl",
            Self::Recovery => "rc",
            Self::Combo => "c",
            Self::Holding => "h",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Damage => "Damage",
            Self::Windup => "Windup",
            Self::Release => "Release",
            Self::Recovery => "Recovery",
            Self::Combo => "Combo",
            Self::Holding => "Holding",
        }
    }

    #[must_use]
    pub const fn unit(self) -> Unit {
        match self {
            Self::Damage => Unit::Damage,
            Self::Release => Unit::Speed,
            Self::Windup | Self::Recovery | Self::Combo | Self::Holding => Unit::InverseSpeed,
        }
    }

    fn project(self, attack: &dyn AttackStats) -> f64 {
        match self {
            Self::Damage => attack.damage(),
            Self::Windup => attack.windup(),
            Self::Release => attack.release(),
            Self::Recovery => attack.recovery(),
            Self::Combo => attack.combo(),
            Self::Holding => attack.holding(),
        }
    }
}

/// A reach figure shared by both weights of a stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ReachField {
    Range,
    AltRange,
}

impl ReachField {
    #[must_use]
    pub const fn id_suffix(self) -> &'static str {
        match self {
            Self::Range => "r",
            Self::AltRange => "ar",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Range => "Range",
            Self::AltRange => "AltRange",
        }
    }
}

/// The attack a metric reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackSource {
    Swing(Stance, Weight),
    Standalone(StandaloneKind),
}

impl AttackSource {
    #[must_use]
    pub fn id_prefix(self) -> CompactString {
        match self {
            Self::Swing(stance, weight) => {
                let weight = match weight {
                    Weight::Light => "l",
                    Weight::Heavy => "h",
                };
                format_compact!("{}{weight}", stance_prefix(stance))
            }
            Self::Standalone(kind) => CompactString::const_new(match kind {
                StandaloneKind::Special => "sp",
                StandaloneKind::LeapingStrike => "la",
                StandaloneKind::SprintCharge => "sc",
                StandaloneKind::Throw => "t",
            }),
        }
    }

    #[must_use]
    pub fn label(self) -> CompactString {
        match self {
            Self::Swing(stance, weight) => format_compact!("{stance} ({weight})"),
            Self::Standalone(kind) => format_compact!("{kind}"),
        }
    }

    fn attack(self, weapon: &Weapon) -> &dyn AttackStats {
        match self {
            Self::Swing(stance, weight) => weapon.attacks.swing(stance).attack(weight),
            Self::Standalone(kind) => weapon.attacks.standalone(kind),
        }
    }

    /// Whether this attack cleaves on `weapon`. Standalone attacks never cleave.
    #[must_use]
    pub fn cleaves(self, weapon: &Weapon) -> bool {
        match self {
            Self::Swing(stance, weight) => weapon.attacks.swing_cleaves(stance, weight, weapon.damage_type),
            Self::Standalone(_) => false,
        }
    }
}

/// Id prefix of a stance; also the prefix of its reach metrics.
#[must_use]
pub const fn stance_prefix(stance: Stance) -> &'static str {
    match stance {
        Stance::Average => "a",
        Stance::Slash => "s",
        Stance::Overhead => "o",
        Stance::Stab => "st",
    }
}

/// How a metric computes its value from a weapon and combat context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    Attack { source: AttackSource, field: AttackField },
    Reach { stance: Stance, field: ReachField },
}

impl Generator {
    /// Compute the metric value.
    ///
    /// Only damage depends on the target, target count, and mount multiplier; every other
    /// generator projects the weapon data directly.
    pub fn generate<M: BonusModel + ?Sized>(
        self,
        bonus: &M,
        weapon: &Weapon,
        target: Target,
        num_targets: u32,
        mount_multiplier: f64,
    ) -> f64 {
        match self {
            Self::Attack {
                source,
                field: AttackField::Damage,
            } => {
                let can_cleave = source.cleaves(weapon);
                mount_multiplier * bonus.bonus_mult(num_targets, target, weapon.damage_type, can_cleave) * source.attack(weapon).damage()
            }
            Self::Attack { source, field } => field.project(source.attack(weapon)),
            Self::Reach { stance, field } => {
                let swing = weapon.attacks.swing(stance);
                match field {
                    ReachField::Range => swing.range,
                    ReachField::AltRange => swing.alt_range,
                }
            }
        }
    }

    #[must_use]
    pub const fn depends_on_context(self) -> bool {
        matches!(
            self,
            Self::Attack {
                field: AttackField::Damage,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapons::{Attacks, DamageType};
    use core::cell::Cell;

    fn test_weapon(damage_type: DamageType) -> Weapon {
        let mut attacks = Attacks::default();
        attacks.slash.range = 80.0;
        attacks.slash.alt_range = 75.0;
        attacks.slash.light.damage = 40.0;
        attacks.slash.light.windup = 450.0;
        attacks.slash.light.release = 225.0;
        attacks.slash.heavy.damage = 70.0;
        attacks.sprint_charge.damage = 90.0;
        attacks.sprint_charge.recovery = 1000.0;
        Weapon::new("Test Sword", damage_type, attacks)
    }

    #[test]
    fn test_id_prefixes() {
        assert_eq!(AttackSource::Swing(Stance::Average, Weight::Light).id_prefix(), "al");
        assert_eq!(AttackSource::Swing(Stance::Stab, Weight::Heavy).id_prefix(), "sth");
        assert_eq!(AttackSource::Standalone(StandaloneKind::Special).id_prefix(), "sp");
        assert_eq!(AttackSource::Standalone(StandaloneKind::LeapingStrike).id_prefix(), "la");
    }

    #[test]
    fn test_labels() {
        assert_eq!(AttackSource::Swing(Stance::Overhead, Weight::Heavy).label(), "Overhead (Heavy)");
        assert_eq!(AttackSource::Standalone(StandaloneKind::SprintCharge).label(), "Sprint Charge");
    }

    #[test]
    fn test_field_units() {
        assert_eq!(AttackField::Damage.unit(), Unit::Damage);
        assert_eq!(AttackField::Release.unit(), Unit::Speed);
        assert_eq!(AttackField::Windup.unit(), Unit::InverseSpeed);
        assert_eq!(AttackField::Holding.unit(), Unit::InverseSpeed);
    }

    #[test]
    fn test_projection_fields() {
        let weapon = test_weapon(DamageType::Cut);
        let bonus = |_: u32, _: Target, _: DamageType, _: bool| 1.0;
        let source = AttackSource::Swing(Stance::Slash, Weight::Light);

        let windup = Generator::Attack { source, field: AttackField::Windup };
        let release = Generator::Attack { source, field: AttackField::Release };
        let alt_range = Generator::Reach { stance: Stance::Slash, field: ReachField::AltRange };

        assert!((windup.generate(&bonus, &weapon, Target::Knight, 1, 1.0) - 450.0).abs() < f64::EPSILON);
        assert!((release.generate(&bonus, &weapon, Target::Knight, 1, 1.0) - 225.0).abs() < f64::EPSILON);
        assert!((alt_range.generate(&bonus, &weapon, Target::Knight, 1, 1.0) - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_damage_passes_cleave_to_bonus() {
        let weapon = test_weapon(DamageType::Blunt);
        let seen = Cell::new(None);
        let bonus = |_: u32, _: Target, _: DamageType, cleave: bool| {
            seen.set(Some(cleave));
            2.0
        };

        let light = Generator::Attack {
            source: AttackSource::Swing(Stance::Slash, Weight::Light),
            field: AttackField::Damage,
        };
        let value = light.generate(&bonus, &weapon, Target::Footman, 3, 1.5);
        assert_eq!(seen.get(), Some(false));
        assert!((value - 1.5 * 2.0 * 40.0).abs() < 1e-9);

        let heavy = Generator::Attack {
            source: AttackSource::Swing(Stance::Slash, Weight::Heavy),
            field: AttackField::Damage,
        };
        let _ = heavy.generate(&bonus, &weapon, Target::Footman, 3, 1.5);
        assert_eq!(seen.get(), Some(true));

        let charge = Generator::Attack {
            source: AttackSource::Standalone(StandaloneKind::SprintCharge),
            field: AttackField::Damage,
        };
        let value = charge.generate(&bonus, &weapon, Target::Footman, 3, 1.0);
        assert_eq!(seen.get(), Some(false));
        assert!((value - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_depends_on_context() {
        let source = AttackSource::Standalone(StandaloneKind::Throw);
        assert!(Generator::Attack { source, field: AttackField::Damage }.depends_on_context());
        assert!(!Generator::Attack { source, field: AttackField::Combo }.depends_on_context());
        assert!(!Generator::Reach { stance: Stance::Stab, field: ReachField::Range }.depends_on_context());
    }
}
