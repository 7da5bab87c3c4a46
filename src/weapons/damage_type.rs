use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// How a weapon deals its damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, EnumIter, Display)]
pub enum DamageType {
    #[serde(alias = "BLUNT", alias = "blunt")]
    Blunt,

    #[serde(alias = "CHOP", alias = "chop")]
    Chop,

    #[serde(alias = "CUT", alias = "cut")]
    Cut,
}

impl DamageType {
    /// Whether light attacks of this damage type cleave when the attack has no override.
    #[must_use]
    pub const fn light_attacks_cleave(self) -> bool {
        matches!(self, Self::Chop | Self::Cut)
    }
}
