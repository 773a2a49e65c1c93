//! How arguments and the config file become a [`SamplerConfig`].
//!
//! Precedence is always: argument, then config file, then the built-in
//! default.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub use error::{OptionError, OptionResult};

use self::{
    args::{OtherArgs, OutputArgs, SamplerArgs, SamplingArgs, SensorArgs},
    config::{Config, ConfigFlags, StringOrNum},
};
use crate::{
    constants::*,
    sink::{OutputTarget, WriteMode},
};

/// Everything the sampler needs, fixed for the lifetime of the process.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplerConfig {
    pub target: OutputTarget,
    pub write_mode: WriteMode,
    pub delay: Duration,
    pub core_count: usize,
    pub zone_count: usize,
    pub verbose: bool,
    pub sysfs_root: PathBuf,
    pub max_samples: Option<u64>,
    /// Where internal debug logs go, if anywhere.
    pub debug_log: Option<PathBuf>,
}

/// The default config file location, e.g. `~/.config/cputempfreq/cputempfreq.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILE))
}

/// Reads the config file. A location passed explicitly must exist; the
/// default location is only read if there is a file there.
pub fn read_config(config_location: Option<&str>) -> OptionResult<Config> {
    let path = match config_location {
        Some(location) => PathBuf::from(location),
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(Config::default()),
        },
    };

    parse_config_file(&path)
}

fn parse_config_file(path: &Path) -> OptionResult<Config> {
    let contents = fs::read_to_string(path).map_err(|err| {
        OptionError::config(format!(
            "unable to read the config file at '{}': {err}",
            path.display()
        ))
    })?;

    Ok(toml_edit::de::from_str(&contents)?)
}

/// Builds the [`SamplerConfig`] from the parsed arguments and config file.
pub fn init_sampler_config(args: &SamplerArgs, config: &Config) -> OptionResult<SamplerConfig> {
    let default_flags = ConfigFlags::default();
    let flags = config.flags.as_ref().unwrap_or(&default_flags);

    Ok(SamplerConfig {
        target: get_target(&args.output_args, flags)?,
        write_mode: get_write_mode(&args.output_args, flags),
        delay: get_delay(&args.sampling_args, flags)?,
        core_count: get_core_count(&args.sensor_args, flags),
        zone_count: get_thermal_zone_count(&args.sensor_args, flags),
        verbose: get_verbose(&args.output_args, flags),
        sysfs_root: get_sysfs_root(&args.sensor_args, flags)?,
        max_samples: get_max_samples(&args.sampling_args, flags)?,
        debug_log: get_debug_log(&args.other_args, flags)?,
    })
}

fn get_target(args: &OutputArgs, flags: &ConfigFlags) -> OptionResult<OutputTarget> {
    let logfile = if let Some(logfile) = &args.logfile {
        if logfile.is_empty() {
            return Err(OptionError::invalid_arg_value("logfile"));
        }
        logfile.as_str()
    } else if let Some(logfile) = &flags.logfile {
        if logfile.is_empty() {
            return Err(OptionError::invalid_config_value("logfile"));
        }
        logfile.as_str()
    } else {
        DEFAULT_LOGFILE
    };

    Ok(OutputTarget::from_logfile(logfile))
}

fn get_write_mode(args: &OutputArgs, flags: &ConfigFlags) -> WriteMode {
    if args.overwrite || flags.overwrite.unwrap_or(false) {
        WriteMode::Overwrite
    } else {
        WriteMode::Append
    }
}

fn get_verbose(args: &OutputArgs, flags: &ConfigFlags) -> bool {
    if args.verbose {
        true
    } else if args.no_verbose {
        false
    } else {
        flags.verbose.unwrap_or(false)
    }
}

/// Converts seconds to a delay. Negative, NaN and infinite values are rejected.
fn seconds_to_delay(seconds: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(seconds).ok()
}

/// Parses a delay as either fractional seconds (`0.5`) or a human-readable
/// duration (`500ms`).
fn parse_delay(value: &str) -> Option<Duration> {
    let value = value.trim();

    match value.parse::<f64>() {
        Ok(seconds) => seconds_to_delay(seconds),
        Err(_) => humantime::parse_duration(value).ok(),
    }
}

fn get_delay(args: &SamplingArgs, flags: &ConfigFlags) -> OptionResult<Duration> {
    if let Some(delay) = &args.delay {
        parse_delay(delay).ok_or_else(|| {
            if delay.trim().parse::<f64>().is_ok_and(|seconds| seconds < 0.0) {
                OptionError::arg("'--delay' must not be negative.")
            } else {
                OptionError::invalid_arg_value("delay")
            }
        })
    } else if let Some(delay) = &flags.delay {
        let parsed = match delay {
            StringOrNum::Num(seconds) => seconds_to_delay(*seconds),
            StringOrNum::String(delay) => parse_delay(delay),
        };

        parsed.ok_or_else(|| OptionError::invalid_config_value("delay"))
    } else {
        Ok(Duration::from_secs_f64(DEFAULT_DELAY_SECONDS))
    }
}

fn get_core_count(args: &SensorArgs, flags: &ConfigFlags) -> usize {
    args.core_count
        .or(flags.core_count)
        .unwrap_or(DEFAULT_CORE_COUNT)
}

fn get_thermal_zone_count(args: &SensorArgs, flags: &ConfigFlags) -> usize {
    args.thermal_zone_count
        .or(flags.thermal_zone_count)
        .unwrap_or(DEFAULT_THERMAL_ZONE_COUNT)
}

fn get_sysfs_root(args: &SensorArgs, flags: &ConfigFlags) -> OptionResult<PathBuf> {
    if let Some(root) = &args.sysfs_root {
        if root.is_empty() {
            return Err(OptionError::invalid_arg_value("sysfs-root"));
        }
        Ok(PathBuf::from(root))
    } else if let Some(root) = &flags.sysfs_root {
        if root.is_empty() {
            return Err(OptionError::invalid_config_value("sysfs_root"));
        }
        Ok(PathBuf::from(root))
    } else {
        Ok(PathBuf::from(DEFAULT_SYSFS_ROOT))
    }
}

fn get_max_samples(args: &SamplingArgs, flags: &ConfigFlags) -> OptionResult<Option<u64>> {
    match (args.samples, flags.samples) {
        (Some(0), _) => Err(OptionError::arg("'--samples' must be greater than 0.")),
        (Some(samples), _) => Ok(Some(samples)),
        (None, Some(0)) => Err(OptionError::config("'samples' must be greater than 0.")),
        (None, samples) => Ok(samples),
    }
}

fn get_debug_log(args: &OtherArgs, flags: &ConfigFlags) -> OptionResult<Option<PathBuf>> {
    #[cfg(feature = "logging")]
    let from_args = args.debug_log.as_deref();
    #[cfg(not(feature = "logging"))]
    let from_args: Option<&str> = {
        let _ = args;
        None
    };

    match (from_args, flags.debug_log.as_deref()) {
        (Some(""), _) => Err(OptionError::invalid_arg_value("debug-log")),
        (Some(path), _) => Ok(Some(PathBuf::from(path))),
        (None, Some("")) => Err(OptionError::invalid_config_value("debug_log")),
        (None, path) => Ok(path.map(PathBuf::from)),
    }
}
