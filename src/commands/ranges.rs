use super::Host;
use super::common::{ContextArgs, OutputArgs, WeaponArgs, init_logging, write_report};
use crate::Result;
use crate::metrics::METRICS;
use crate::reports::ReportTable;
use clap::Parser;
use ohno::bail;

const LOG_TARGET: &str = "    ranges";

#[derive(Parser, Debug)]
pub struct RangesArgs {
    #[command(flatten)]
    pub weapons: WeaponArgs,

    /// Report one combined range per unit instead of one per metric
    #[arg(long, conflicts_with = "metrics")]
    pub by_unit: bool,

    #[command(flatten)]
    pub context: ContextArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Compute min/max metric values across the weapons of a weapon file
///
/// # Errors
///
/// Returns an error if the configuration or weapons cannot be loaded, the weapon file is
/// empty, or a metric id is unknown
pub fn compute_ranges<H: Host>(host: &mut H, args: &RangesArgs) -> Result<()> {
    init_logging(args.output.log_level);

    let config = args.context.resolve()?;
    let metrics = args.weapons.select_metrics()?;
    let weapons = args.weapons.load_weapons()?;

    if weapons.is_empty() {
        bail!("'{}' contains no weapons, ranges need at least one", args.weapons.weapons);
    }

    let ctx = config.context();
    let table = if args.by_unit {
        log::info!(target: LOG_TARGET, "Computing unit ranges over {} weapons", weapons.len());
        ReportTable::unit_ranges(&METRICS, &weapons, &ctx)?
    } else {
        log::info!(target: LOG_TARGET, "Computing {} metric ranges over {} weapons", metrics.len(), weapons.len());
        ReportTable::ranges(metrics, &weapons, &ctx)?
    };

    write_report(host, &table, &args.output)
}
