//! A tool that samples CPU core frequencies and thermal zone temperatures
//! from sysfs on a fixed delay, logging one CSV row per sample.

#![warn(rust_2018_idioms)]

pub mod utils {
    pub mod cancellation_token;
    pub mod error;
    pub mod logging;
}
pub mod collection;
pub mod constants;
pub mod options;
pub mod sampler;
pub mod sink;

use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::{Context, Result};

use crate::{
    collection::{SampleCollector, SensorReader},
    options::{args, init_sampler_config, read_config, SamplerConfig},
    sampler::Sampler,
    sink::CsvSink,
    utils::cancellation_token::CancellationToken,
};

/// Sets up a termination handler that cancels `token` on Ctrl-C or SIGTERM,
/// so the current row finishes and the sink is closed cleanly.
fn create_termination_handler(token: Arc<CancellationToken>) -> Result<()> {
    ctrlc::set_handler(move || {
        log::info!("Termination requested.");
        token.cancel();
    })
    .context("Unable to set up the termination handler.")
}

/// Opens the sink and runs the sampling loop until `token` is cancelled,
/// the sample limit is reached, or an error occurs. Returns the number of
/// rows written.
pub fn run_sampler(config: &SamplerConfig, token: &CancellationToken) -> Result<u64> {
    let collector = SampleCollector::new(
        SensorReader::new(&config.sysfs_root),
        config.core_count,
        config.zone_count,
    );

    if config.verbose {
        writeln!(io::stdout(), "Writing CSV header")?;
    }

    let sink = CsvSink::open(
        config.target.clone(),
        config.write_mode,
        collector.field_names().to_vec(),
    )
    .with_context(|| format!("Unable to open the log at '{}'.", config.target))?;

    log::info!(
        "Sampling {} cores and {} thermal zones from '{}' into '{}' every {:?}.",
        collector.core_count(),
        collector.zone_count(),
        config.sysfs_root.display(),
        sink.target(),
        config.delay,
    );

    let written = Sampler::new(collector, sink, config.delay, config.verbose)
        .with_max_samples(config.max_samples)
        .run(token)?;

    Ok(written)
}

/// Parses arguments and the config file, then samples until stopped.
pub fn start_sampling() -> Result<()> {
    let args = args::get_args();
    let config = read_config(args.other_args.config_location.as_deref())
        .context("Unable to properly parse or read the config file.")?;
    let sampler_config = init_sampler_config(&args, &config)?;

    #[cfg(feature = "logging")]
    {
        if let Some(debug_log) = &sampler_config.debug_log {
            utils::logging::init_logger(log::LevelFilter::Debug, debug_log)
                .context("Unable to set up the debug log.")?;
        }
    }

    log::debug!("Sampler config: {sampler_config:?}");

    let token = Arc::new(CancellationToken::default());
    create_termination_handler(token.clone())?;

    run_sampler(&sampler_config, &token)?;

    Ok(())
}
