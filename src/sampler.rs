//! The sampling loop: collect, write, sleep, repeat.

use std::{
    io::{self, Write},
    time::Duration,
};

use crate::{
    collection::SampleCollector,
    sink::CsvSink,
    utils::{
        cancellation_token::CancellationToken,
        error::{self, SamplerError},
    },
};

/// Drives a [`SampleCollector`] into a [`CsvSink`] on a fixed delay.
pub struct Sampler {
    collector: SampleCollector,
    sink: CsvSink,
    delay: Duration,
    verbose: bool,
    max_samples: Option<u64>,
}

impl Sampler {
    pub fn new(collector: SampleCollector, sink: CsvSink, delay: Duration, verbose: bool) -> Self {
        Self {
            collector,
            sink,
            delay,
            verbose,
            max_samples: None,
        }
    }

    /// Stop after `max_samples` rows instead of running until cancelled.
    pub fn with_max_samples(mut self, max_samples: Option<u64>) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Runs until `token` is cancelled, the sample limit is hit, or an error
    /// occurs, and returns how many rows were written.
    ///
    /// The delay is a fixed wait after each row; there is no drift
    /// compensation. The sink is closed on every non-error exit.
    pub fn run(mut self, token: &CancellationToken) -> error::Result<u64> {
        let mut written: u64 = 0;

        while !token.is_cancelled() && !self.is_done(written) {
            let sample = if self.verbose {
                let mut stdout = io::stdout().lock();
                self.collector.collect(Some(&mut stdout))?
            } else {
                self.collector.collect(None)?
            };

            self.sink.write_row(&sample)?;
            written += 1;
            log::debug!("Wrote sample {written} ({} fields).", sample.len());

            if self.verbose {
                writeln!(io::stdout()).map_err(|err| SamplerError::sink_write("console", err))?;
            }

            if self.is_done(written) || token.sleep_with_cancellation(self.delay) {
                break;
            }
        }

        log::info!("Sampling stopped after {written} samples.");
        self.sink.close()?;

        Ok(written)
    }

    fn is_done(&self, written: u64) -> bool {
        self.max_samples.is_some_and(|max| written >= max)
    }
}
