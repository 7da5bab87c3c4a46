use strum::{Display, EnumIter};

/// Attack direction category of a swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Stance {
    Average,
    Slash,
    Overhead,
    Stab,
}

/// Speed/power class of a swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Weight {
    Light,
    Heavy,
}

/// Attacks that are not part of a stance's light/heavy pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum StandaloneKind {
    Special,

    #[strum(to_string = "Leaping Strike")]
    LeapingStrike,

    #[strum(to_string = "Sprint Charge")]
    SprintCharge,

    Throw,
}
