//! Common utilities shared across report generators.

/// Format a metric value, dropping the fraction for whole numbers.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
