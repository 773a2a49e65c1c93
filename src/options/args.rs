// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "cputempfreq [OPTIONS]";

/// The arguments for cputempfreq.
///
/// Everything is optional here so that a config file value can tell apart
/// "not passed" from "passed the default"; defaults are applied when the
/// final sampler config is built.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct SamplerArgs {
    #[command(flatten)]
    pub output_args: OutputArgs,

    #[command(flatten)]
    pub sensor_args: SensorArgs,

    #[command(flatten)]
    pub sampling_args: SamplingArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Output Options")]
pub struct OutputArgs {
    #[arg(
        long,
        value_name = "PATH",
        allow_hyphen_values = true,
        help = "Log filename, or '-' for stdout.",
        long_help = "The CSV file to write samples to. Passing '-' writes the rows to stdout \
                    instead, and no file is created. Defaults to 'cpu_info.csv'."
    )]
    pub logfile: Option<String>,

    #[arg(
        long,
        help = "Rewrites the log file for every sample.",
        long_help = "Reopens and truncates the log file for every row instead of appending, so the \
                    file only ever holds the latest row. Has no effect when writing to stdout."
    )]
    pub overwrite: bool,

    #[arg(
        long,
        overrides_with = "no_verbose",
        help = "Enables verbose output.",
        long_help = "Prints every reading to the console as it is taken, followed by a blank line \
                    after each sample."
    )]
    pub verbose: bool,

    #[arg(long, overrides_with = "verbose", help = "Disables verbose output.")]
    pub no_verbose: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Sensor Options")]
pub struct SensorArgs {
    #[arg(
        long,
        value_name = "INT",
        help = "Number of cores to monitor frequency.",
        long_help = "Number of cores to read the frequency of, starting from core 0. Defaults to 8."
    )]
    pub core_count: Option<usize>,

    #[arg(
        long,
        value_name = "INT",
        help = "Number of thermal zones for temperature monitoring.",
        long_help = "Number of thermal zones to read the temperature of, starting from zone 0. \
                    Defaults to 4."
    )]
    pub thermal_zone_count: Option<usize>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Where sysfs is mounted.",
        long_help = "The root of the sysfs tree to read sensors from. Defaults to '/sys'."
    )]
    pub sysfs_root: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Sampling Options")]
pub struct SamplingArgs {
    #[arg(
        long,
        value_name = "SECONDS",
        allow_hyphen_values = true,
        help = "Delay (in seconds) between readings.",
        long_help = "The delay between readings. Takes a number of seconds, which may be fractional \
                    (e.g. 0.5), or a human-readable duration (e.g. 500ms). Must not be negative. \
                    Defaults to 1 second."
    )]
    pub delay: Option<String>,

    #[arg(
        long,
        value_name = "N",
        help = "Stops after writing N samples.",
        long_help = "Stops after writing N samples. By default, sampling continues until the \
                    program is interrupted."
    )]
    pub samples: Option<u64>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(
        short = 'C',
        long = "config",
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    Unlike the default location, a file passed here must exist."
    )]
    pub config_location: Option<String>,

    #[cfg(feature = "logging")]
    #[arg(
        long,
        value_name = "PATH",
        help = "Writes internal debug logs to a file."
    )]
    pub debug_log: Option<String>,

    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use '--help'.)")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns the [`Command`] built from [`SamplerArgs`], e.g. for generating completions.
pub fn build_cmd() -> Command {
    SamplerArgs::command()
}

/// Returns a [`SamplerArgs`] parsed from the process arguments.
pub fn get_args() -> SamplerArgs {
    SamplerArgs::parse()
}
