use super::Host;
use super::common::{ContextArgs, OutputArgs, WeaponArgs, init_logging, write_report};
use crate::Result;
use crate::reports::ReportTable;
use clap::Parser;

const LOG_TARGET: &str = "      eval";

#[derive(Parser, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    pub weapons: WeaponArgs,

    #[command(flatten)]
    pub context: ContextArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Compute metric values for every weapon in a weapon file
///
/// # Errors
///
/// Returns an error if the configuration or weapons cannot be loaded, or a metric id is unknown
pub fn evaluate_weapons<H: Host>(host: &mut H, args: &EvalArgs) -> Result<()> {
    init_logging(args.output.log_level);

    let config = args.context.resolve()?;
    let metrics = args.weapons.select_metrics()?;
    let weapons = args.weapons.load_weapons()?;

    if weapons.is_empty() {
        log::warn!(target: LOG_TARGET, "'{}' contains no weapons", args.weapons.weapons);
    }

    log::info!(target: LOG_TARGET, "Evaluating {} metrics over {} weapons", metrics.len(), weapons.len());
    let table = ReportTable::values(metrics, &weapons, &config.context());

    write_report(host, &table, &args.output)
}
