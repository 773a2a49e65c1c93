use std::{io, path::PathBuf, result};

use thiserror::Error;

/// A type alias for handling errors that occur while sampling.
pub type Result<T> = result::Result<T, SamplerError>;

/// An error that can occur while sampling sensors or writing rows.
///
/// None of these are retried; any of them ends the sampling loop.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// The sensor file is missing or could not be read.
    #[error("sensor '{}' is unavailable: {source}", .path.display())]
    SensorUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The sensor file did not contain a base-10 integer.
    #[error("sensor '{}' reported '{contents}', which is not an integer", .path.display())]
    SensorFormat { path: PathBuf, contents: String },
    /// Writing to the output destination failed.
    #[error("unable to write to '{destination}': {source}")]
    SinkWrite {
        destination: String,
        #[source]
        source: io::Error,
    },
}

impl SamplerError {
    pub(crate) fn sink_write(destination: impl Into<String>, source: io::Error) -> Self {
        SamplerError::SinkWrite {
            destination: destination.into(),
            source,
        }
    }
}
