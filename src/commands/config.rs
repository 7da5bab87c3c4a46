use crate::Result;
use crate::weapons::{StandardBonus, Target};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File looked up in the working directory when no configuration path is given
pub const CONFIG_FILE_NAME: &str = "chivalry-metrics.toml";

const LOG_TARGET: &str = "    config";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Class of character receiving damage
    #[serde(default = "default_target")]
    pub target: Target,

    /// Number of characters caught by one swing
    #[serde(default = "default_num_targets")]
    pub num_targets: u32,

    /// Damage multiplier applied when mounted
    #[serde(default = "default_mount_multiplier")]
    pub mount_multiplier: f64,

    /// Damage multipliers per target class and damage type
    #[serde(default)]
    pub bonus: StandardBonus,
}

const fn default_target() -> Target {
    Target::VanguardArcher
}

const fn default_num_targets() -> u32 {
    1
}

const fn default_mount_multiplier() -> f64 {
    1.0
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No '{path}' found, using the default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::debug!(target: LOG_TARGET, "Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the target count is zero or a multiplier is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if self.num_targets == 0 {
            return Err(app_err!("num_targets must be at least 1"));
        }

        if !self.mount_multiplier.is_finite() || self.mount_multiplier < 0.0 {
            return Err(app_err!(
                "mount_multiplier must be a non-negative number, got {}",
                self.mount_multiplier
            ));
        }

        if !self.bonus.all_finite() || self.bonus.min_multiplier() < 0.0 {
            return Err(app_err!("bonus multipliers must be non-negative numbers"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
