use clap::ValueEnum;
use core::fmt;
use serde::{Serialize, Serializer};
use strum::{EnumIter, IntoEnumIterator};

/// The measurement scale a metric belongs to.
///
/// Metrics sharing a unit are comparable, so consumers use the unit to pick consistent
/// min/max scales when normalizing across attack categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, ValueEnum)]
pub enum Unit {
    Index,

    /// Milliseconds, larger is slower.
    Speed,

    /// Milliseconds where larger is better, matching the orientation of damage and range.
    InverseSpeed,

    Range,
    Damage,
    Rank,
}

impl Unit {
    /// Display string for this unit.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Index => "Index",
            Self::Speed => "Milliseconds",
            Self::InverseSpeed => "-Milliseconds",
            Self::Range => "Jeoffreys",
            Self::Damage => "Hitpoints",
            Self::Rank => "Rank",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::iter().find(|unit| unit.label() == label)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        let labels: Vec<_> = Unit::iter().map(Unit::label).collect();
        assert_eq!(labels, ["Index", "Milliseconds", "-Milliseconds", "Jeoffreys", "Hitpoints", "Rank"]);
    }

    #[test]
    fn test_from_label_round_trips() {
        for unit in Unit::iter() {
            assert_eq!(Unit::from_label(unit.label()), Some(unit));
        }
        assert_eq!(Unit::from_label("Furlongs"), None);
    }

    #[test]
    fn test_display_and_serialize_use_label() {
        assert_eq!(Unit::InverseSpeed.to_string(), "-Milliseconds");
        assert_eq!(serde_json::to_string(&Unit::Range).unwrap(), "\"Jeoffreys\"");
    }
}
