//! Command dispatch logic for chivalry-metrics

use super::{
    EvalArgs, InitArgs, ListArgs, RangesArgs, ValidateArgs, compute_ranges, evaluate_weapons, init_config, list_metrics,
    validate_config,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "chivalry-metrics", version, about, author, long_about = None)]
#[command(about = "Derive unit-tagged metrics from weapon definitions")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: MetricsSubcommand,
}

#[derive(Subcommand, Debug)]
enum MetricsSubcommand {
    /// List the metric catalog
    List(ListArgs),
    /// Compute metric values for each weapon in a weapon file
    Eval(Box<EvalArgs>),
    /// Compute min/max metric values across a weapon file
    Ranges(Box<RangesArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        MetricsSubcommand::List(list_args) => list_metrics(host, list_args),
        MetricsSubcommand::Eval(eval_args) => evaluate_weapons(host, eval_args),
        MetricsSubcommand::Ranges(ranges_args) => compute_ranges(host, ranges_args),
        MetricsSubcommand::Init(init_args) => init_config(host, init_args),
        MetricsSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_eval_parses_metric_list() {
        let cli = Cli::parse_from(["chivalry-metrics", "eval", "-w", "w.json", "--metric", "ald,ahd", "-m", "td"]);
        let MetricsSubcommand::Eval(args) = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(args.weapons.metrics, ["ald", "ahd", "td"]);
        assert_eq!(args.weapons.weapons, "w.json");
    }

    #[test]
    fn test_ranges_by_unit_conflicts_with_metric() {
        let result = Cli::try_parse_from(["chivalry-metrics", "ranges", "-w", "w.json", "--by-unit", "-m", "ald"]);
        assert!(result.is_err());
    }
}
