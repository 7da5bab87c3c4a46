//! Weapon definitions consumed by the metric registry
//!
//! This module holds the data side of the crate: the shape of a weapon and its
//! attacks, the targets an attack can land on, and the rules that turn a target
//! and damage type into a damage multiplier.
//!
//! # Implementation Model
//!
//! A [`Weapon`] carries a [`DamageType`] and an [`Attacks`] block. The four swing
//! stances ([`Stance`]) each hold a [`Swing`] with shared reach figures and one
//! [`MeleeAttack`] per [`Weight`]. The standalone attacks ([`StandaloneKind`]) are
//! [`SpecialAttack`]s and never carry a cleave override.
//!
//! Damage bonuses are computed through the [`BonusModel`] trait. [`StandardBonus`]
//! is the table-driven implementation used by default; any
//! `Fn(u32, Target, DamageType, bool) -> f64` closure is also a model, which
//! keeps custom rules and test doubles cheap to write.
//!
//! Weapon lists are loaded from JSON or YAML files with [`load_weapons`].

mod attack;
mod attack_kind;
mod bonus;
mod damage_type;
mod loader;
mod target;
mod weapon;

pub use attack::{AttackStats, MeleeAttack, SpecialAttack};
pub use attack_kind::{StandaloneKind, Stance, Weight};
pub use bonus::{BonusModel, DamageMultipliers, StandardBonus};
pub use damage_type::DamageType;
pub use loader::{load_weapons, parse_weapons};
pub use target::Target;
pub use weapon::{Attacks, Swing, Weapon};
