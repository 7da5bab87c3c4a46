use super::Host;
use super::common::{OutputArgs, init_logging, write_report};
use crate::Result;
use crate::metrics::{METRICS, Unit};
use crate::reports::ReportTable;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list metrics measured in this unit
    #[arg(long, value_name = "UNIT")]
    pub unit: Option<Unit>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn list_metrics<H: Host>(host: &mut H, args: &ListArgs) -> Result<()> {
    init_logging(args.output.log_level);

    let table = match args.unit {
        Some(unit) => ReportTable::catalog(METRICS.by_unit(unit)),
        None => ReportTable::catalog(&*METRICS),
    };

    write_report(host, &table, &args.output)
}
