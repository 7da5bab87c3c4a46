use super::{AttackField, AttackSource, Generator, Metric, ReachField, Unit};
use super::generator::stance_prefix;
use crate::weapons::{StandaloneKind, Stance, Weight};
use compact_str::format_compact;
use strum::IntoEnumIterator;

/// Generate the built-in metrics in display order.
///
/// For each stance this yields the light attack metrics, the heavy attack metrics, and then
/// the stance's reach metrics. The standalone attacks follow, without reach metrics.
#[must_use]
pub fn standard_metrics() -> Vec<Metric> {
    let mut metrics = Vec::new();

    for stance in Stance::iter() {
        for weight in Weight::iter() {
            metrics.extend(attack_metrics(AttackSource::Swing(stance, weight)));
        }
        metrics.extend(reach_metrics(stance));
    }

    for kind in StandaloneKind::iter() {
        metrics.extend(attack_metrics(AttackSource::Standalone(kind)));
    }

    metrics
}

fn attack_metrics(source: AttackSource) -> impl Iterator<Item = Metric> {
    let prefix = source.id_prefix();
    let label = source.label();

    AttackField::iter().map(move |field| {
        Metric::new(
            format_compact!("{prefix}{}", field.id_suffix()),
            format_compact!("{label} - {}", field.label()),
            field.unit(),
            Generator::Attack { source, field },
        )
    })
}

fn reach_metrics(stance: Stance) -> impl Iterator<Item = Metric> {
    ReachField::iter().map(move |field| {
        Metric::new(
            format_compact!("{}{}", stance_prefix(stance), field.id_suffix()),
            format_compact!("{stance} - {}", field.label()),
            Unit::Range,
            Generator::Reach { stance, field },
        )
    })
}
