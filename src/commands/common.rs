//! Argument groups and helpers shared between commands.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::metrics::{METRICS, Metric};
use crate::reports::{CombatContext, ReportTable, generate_console, generate_csv, generate_json};
use crate::weapons::{StandardBonus, Target, Weapon, load_weapons};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, ValueEnum};
use ohno::{IntoAppError, app_err};
use std::io::Write;

const LOG_TARGET: &str = "  commands";

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for the terminal
    Console,

    /// Comma-separated values
    Csv,

    /// Pretty-printed JSON
    Json,
}

/// Output arguments shared by every reporting command
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Report format
    #[arg(long, short = 'f', value_name = "FORMAT", default_value = "console")]
    pub format: OutputFormat,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

/// Combat context arguments, overriding the configuration file
#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Path to configuration file (default is `chivalry-metrics.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Class of character receiving damage
    #[arg(long, value_name = "TARGET")]
    pub target: Option<Target>,

    /// Number of characters caught by one swing
    #[arg(long, value_name = "COUNT")]
    pub num_targets: Option<u32>,

    /// Damage multiplier applied when mounted
    #[arg(long, value_name = "FACTOR")]
    pub mount_multiplier: Option<f64>,
}

/// Weapon file and metric selection shared by `eval` and `ranges`
#[derive(Args, Debug)]
pub struct WeaponArgs {
    /// JSON or YAML file holding a list of weapons
    #[arg(long, short = 'w', value_name = "PATH")]
    pub weapons: Utf8PathBuf,

    /// Only report these metric ids (default is every metric)
    #[arg(long = "metric", short = 'm', value_name = "ID", value_delimiter = ',')]
    pub metrics: Vec<String>,

    /// Only use these weapon ids from the weapon file, in the order given (default is every weapon)
    #[arg(long = "weapon", value_name = "ID", value_delimiter = ',')]
    pub weapon_ids: Vec<String>,
}

impl ContextArgs {
    /// Load the configuration and apply command-line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the result is invalid
    pub fn resolve(&self) -> Result<Config> {
        let mut config = Config::load(Utf8Path::new("."), self.config.as_ref())?;

        if let Some(target) = self.target {
            config.target = target;
        }
        if let Some(num_targets) = self.num_targets {
            config.num_targets = num_targets;
        }
        if let Some(mount_multiplier) = self.mount_multiplier {
            config.mount_multiplier = mount_multiplier;
        }

        config.validate()?;
        log::debug!(
            target: LOG_TARGET,
            "Combat context: target={}, num_targets={}, mount_multiplier={}",
            config.target,
            config.num_targets,
            config.mount_multiplier
        );
        Ok(config)
    }
}

impl Config {
    pub(crate) const fn context(&self) -> CombatContext<'_, StandardBonus> {
        CombatContext {
            bonus: &self.bonus,
            target: self.target,
            num_targets: self.num_targets,
            mount_multiplier: self.mount_multiplier,
        }
    }
}

impl WeaponArgs {
    /// Load the weapon file, keeping only the requested weapon ids if any were given
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or a weapon id is not in it
    pub fn load_weapons(&self) -> Result<Vec<Weapon>> {
        let weapons = load_weapons(&self.weapons)?;
        select_weapons(weapons, &self.weapon_ids)
    }

    /// Resolve the requested metric ids, in the order given, or every metric if none were given
    ///
    /// # Errors
    ///
    /// Returns an error naming the first unknown id
    pub fn select_metrics(&self) -> Result<Vec<&'static Metric>> {
        select_metrics(&self.metrics)
    }
}

pub fn select_metrics(ids: &[String]) -> Result<Vec<&'static Metric>> {
    if ids.is_empty() {
        return Ok(METRICS.iter().collect());
    }

    ids.iter()
        .map(|id| METRICS.get(id).ok_or_else(|| app_err!("unknown metric id '{id}'")))
        .collect()
}

fn select_weapons(weapons: Vec<Weapon>, ids: &[String]) -> Result<Vec<Weapon>> {
    if ids.is_empty() {
        return Ok(weapons);
    }

    ids.iter()
        .map(|id| {
            weapons
                .iter()
                .find(|weapon| weapon.id == id.as_str())
                .cloned()
                .ok_or_else(|| app_err!("unknown weapon id '{id}'"))
        })
        .collect()
}

pub fn init_logging(log_level: LogLevel) {
    if let Some(mut builder) = logger_builder(log_level) {
        // A logger may already be installed when commands run more than once in a process
        let _ = builder.try_init();
    }
}

fn logger_builder(log_level: LogLevel) -> Option<env_logger::Builder> {
    let level = match log_level {
        LogLevel::None => return None,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    let mut builder = env_logger::Builder::from_env(env);
    let _ = builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace));
    Some(builder)
}

/// Render `table` in the requested format and write it to the host's output
///
/// # Errors
///
/// Returns an error if rendering or writing fails
pub fn write_report<H: Host>(host: &mut H, table: &ReportTable, args: &OutputArgs) -> Result<()> {
    let mut text = String::new();

    match args.format {
        OutputFormat::Console => {
            let use_colors = match args.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => {
                    use std::io::{IsTerminal, stdout};
                    stdout().is_terminal()
                }
            };
            generate_console(table, use_colors, &mut text)?;
        }
        OutputFormat::Csv => generate_csv(table, &mut text)?,
        OutputFormat::Json => {
            generate_json(table, &mut text)?;
            text.push('\n');
        }
    }

    host.output().write_all(text.as_bytes()).into_app_err("writing report")?;
    Ok(())
}
