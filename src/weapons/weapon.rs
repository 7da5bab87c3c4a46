use super::{AttackStats, DamageType, MeleeAttack, SpecialAttack, StandaloneKind, Stance, Weight};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A single swing stance: reach figures plus its light and heavy attacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Swing {
    pub range: f64,
    pub alt_range: f64,
    pub light: MeleeAttack,
    pub heavy: MeleeAttack,
}

impl Swing {
    #[must_use]
    pub const fn attack(&self, weight: Weight) -> &MeleeAttack {
        match weight {
            Weight::Light => &self.light,
            Weight::Heavy => &self.heavy,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attacks {
    pub average: Swing,
    pub slash: Swing,
    pub overhead: Swing,
    pub stab: Swing,

    #[serde(default)]
    pub special: SpecialAttack,

    #[serde(default)]
    pub sprint_attack: SpecialAttack,

    #[serde(default)]
    pub sprint_charge: SpecialAttack,

    #[serde(default)]
    pub throw: SpecialAttack,
}

impl Attacks {
    #[must_use]
    pub const fn swing(&self, stance: Stance) -> &Swing {
        match stance {
            Stance::Average => &self.average,
            Stance::Slash => &self.slash,
            Stance::Overhead => &self.overhead,
            Stance::Stab => &self.stab,
        }
    }

    #[must_use]
    pub const fn standalone(&self, kind: StandaloneKind) -> &SpecialAttack {
        match kind {
            StandaloneKind::Special => &self.special,
            StandaloneKind::LeapingStrike => &self.sprint_attack,
            StandaloneKind::SprintCharge => &self.sprint_charge,
            StandaloneKind::Throw => &self.throw,
        }
    }

    /// Whether a stance attack cleaves, honoring its override first.
    ///
    /// Without an override, light attacks cleave only for chopping and cutting weapons and heavy
    /// attacks always cleave.
    #[must_use]
    pub fn swing_cleaves(&self, stance: Stance, weight: Weight, damage_type: DamageType) -> bool {
        let attack = self.swing(stance).attack(weight);
        attack.cleave_override().unwrap_or(match weight {
            Weight::Light => damage_type.light_attacks_cleave(),
            Weight::Heavy => true,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    /// Stable key used to select weapons; derived from the name when a file leaves it out.
    #[serde(default)]
    pub id: CompactString,
    pub name: CompactString,
    pub damage_type: DamageType,
    pub attacks: Attacks,
}

impl Weapon {
    #[must_use]
    pub fn new(name: impl Into<CompactString>, damage_type: DamageType, attacks: Attacks) -> Self {
        let name = name.into();
        Self {
            id: id_from_name(&name),
            name,
            damage_type,
            attacks,
        }
    }

    /// Fill in an empty id from the name.
    pub fn ensure_id(&mut self) {
        if self.id.is_empty() {
            self.id = id_from_name(&self.name);
        }
    }
}

fn id_from_name(name: &str) -> CompactString {
    name.to_lowercase().replace(' ', "_").into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_ensure_id_keeps_explicit_id() {
        let mut weapon = Weapon::new("Pick Axe", DamageType::Chop, Attacks::default());
        assert_eq!(weapon.id, "pick_axe");

        weapon.id = "axe-2".into();
        weapon.ensure_id();
        assert_eq!(weapon.id, "axe-2");

        weapon.id = CompactString::default();
        weapon.ensure_id();
        assert_eq!(weapon.id, "pick_axe");
    }

    #[test]
    fn test_swing_cleaves_light_depends_on_damage_type() {
        let attacks = Attacks::default();
        for stance in Stance::iter() {
            assert!(!attacks.swing_cleaves(stance, Weight::Light, DamageType::Blunt));
            assert!(attacks.swing_cleaves(stance, Weight::Light, DamageType::Chop));
            assert!(attacks.swing_cleaves(stance, Weight::Light, DamageType::Cut));
        }
    }

    #[test]
    fn test_swing_cleaves_heavy_always() {
        let attacks = Attacks::default();
        for dt in DamageType::iter() {
            assert!(attacks.swing_cleaves(Stance::Overhead, Weight::Heavy, dt));
        }
    }

    #[test]
    fn test_swing_cleaves_override_wins() {
        let mut attacks = Attacks::default();
        attacks.stab.light.cleave_override = Some(true);
        attacks.stab.heavy.cleave_override = Some(false);

        assert!(attacks.swing_cleaves(Stance::Stab, Weight::Light, DamageType::Blunt));
        assert!(!attacks.swing_cleaves(Stance::Stab, Weight::Heavy, DamageType::Cut));
    }

    #[test]
    fn test_standalone_maps_to_fields() {
        let mut attacks = Attacks::default();
        attacks.sprint_attack.damage = 70.0;
        attacks.throw.damage = 100.0;

        assert!((attacks.standalone(StandaloneKind::LeapingStrike).damage - 70.0).abs() < f64::EPSILON);
        assert!((attacks.standalone(StandaloneKind::Throw).damage - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weapon_new_derives_id() {
        let weapon = Weapon::new("Two Handed Hammer", DamageType::Blunt, Attacks::default());
        assert_eq!(weapon.id, "two_handed_hammer");
        assert_eq!(weapon.name, "Two Handed Hammer");
    }
}
