use serde::Serialize;

/// Minimum and maximum of a set of metric values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Compute the range of a sequence of values, or `None` if the sequence is empty.
    ///
    /// NaN values are skipped unless every value is NaN.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |acc, value| {
            Some(acc.map_or(Self::new(value, value), |range: Self| range.including(value)))
        })
    }

    /// Widen the range to include `value`.
    #[must_use]
    pub fn including(self, value: f64) -> Self {
        Self::new(self.min.min(value), self.max.max(value))
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Map `value` onto `[0, 1]` relative to this range. A zero-width range maps everything to 0.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.span();
        if span > 0.0 { ((value - self.min) / span).clamp(0.0, 1.0) } else { 0.0 }
    }
}
