use serde::{Deserialize, Serialize};

/// Damage and timing figures shared by every attack.
///
/// Timings are in milliseconds.
pub trait AttackStats {
    fn damage(&self) -> f64;
    fn windup(&self) -> f64;
    fn release(&self) -> f64;
    fn recovery(&self) -> f64;
    fn combo(&self) -> f64;
    fn holding(&self) -> f64;

    /// Explicit cleave behavior, overriding the weapon's default policy.
    fn cleave_override(&self) -> Option<bool> {
        None
    }
}

/// A light or heavy attack of one stance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeleeAttack {
    pub damage: f64,
    pub windup: f64,
    pub release: f64,
    pub recovery: f64,

    #[serde(default)]
    pub combo: f64,

    #[serde(default)]
    pub holding: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleave_override: Option<bool>,
}

/// A standalone attack (special, sprint attack, sprint charge, throw).
///
/// Weapons without one of these attacks leave it out of their data; every field then reads as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpecialAttack {
    pub damage: f64,
    pub windup: f64,
    pub release: f64,
    pub recovery: f64,
    pub combo: f64,
    pub holding: f64,
}

impl AttackStats for MeleeAttack {
    fn damage(&self) -> f64 {
        self.damage
    }

    fn windup(&self) -> f64 {
        self.windup
    }

    fn release(&self) -> f64 {
        self.release
    }

    fn recovery(&self) -> f64 {
        self.recovery
    }

    fn combo(&self) -> f64 {
        self.combo
    }

    fn holding(&self) -> f64 {
        self.holding
    }

    fn cleave_override(&self) -> Option<bool> {
        self.cleave_override
    }
}

impl AttackStats for SpecialAttack {
    fn damage(&self) -> f64 {
        self.damage
    }

    fn windup(&self) -> f64 {
        self.windup
    }

    fn release(&self) -> f64 {
        self.release
    }

    fn recovery(&self) -> f64 {
        self.recovery
    }

    fn combo(&self) -> f64 {
        self.combo
    }

    fn holding(&self) -> f64 {
        self.holding
    }
}
