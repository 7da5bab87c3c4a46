use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The class of character receiving damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, EnumIter, Display, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    #[strum(to_string = "Vanguard / Archer")]
    VanguardArcher,

    Footman,

    Knight,
}
