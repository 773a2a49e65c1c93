//! Where CSV rows end up: a file, or stdout.

use std::{
    fmt,
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    collection::sample::{format_reading, Sample},
    constants::STREAM_SENTINEL,
    utils::error::{self, SamplerError},
};

/// The destination of the CSV rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout. The sink never closes it.
    Stream,
    File(PathBuf),
}

impl OutputTarget {
    /// Parses a `--logfile` value; [`STREAM_SENTINEL`] selects stdout.
    pub fn from_logfile(logfile: &str) -> Self {
        if logfile == STREAM_SENTINEL {
            OutputTarget::Stream
        } else {
            OutputTarget::File(PathBuf::from(logfile))
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stream => write!(f, "stdout"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// How file targets are written to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Open once, then append every row to the same handle.
    #[default]
    Append,
    /// Reopen and truncate the file for every write, so it only ever holds
    /// the latest row.
    Overwrite,
}

enum Handle {
    Stream(csv::Writer<io::Stdout>),
    File {
        path: PathBuf,
        /// Always `None` in [`WriteMode::Overwrite`].
        writer: Option<csv::Writer<File>>,
    },
}

/// Writes the CSV header once and then one row per [`Sample`].
pub struct CsvSink {
    target: OutputTarget,
    mode: WriteMode,
    header: Vec<String>,
    handle: Handle,
}

impl CsvSink {
    /// Opens the target and writes the header row.
    pub fn open(target: OutputTarget, mode: WriteMode, header: Vec<String>) -> error::Result<Self> {
        let handle = match &target {
            OutputTarget::Stream => Handle::Stream(csv_writer(io::stdout())),
            OutputTarget::File(path) => Handle::File {
                path: path.clone(),
                writer: None,
            },
        };

        let mut sink = Self {
            target,
            mode,
            header,
            handle,
        };

        let header = sink.header.clone();
        sink.write_record(&header)?;

        Ok(sink)
    }

    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Formats a sample in header order. Fields missing from the sample are
    /// left empty.
    pub fn row_fields(&self, sample: &Sample) -> Vec<String> {
        self.header
            .iter()
            .map(|field| sample.get(field).map(format_reading).unwrap_or_default())
            .collect()
    }

    /// Writes one data row.
    pub fn write_row(&mut self, sample: &Sample) -> error::Result<()> {
        let fields = self.row_fields(sample);
        self.write_record(&fields)
    }

    fn write_record(&mut self, record: &[String]) -> error::Result<()> {
        let result = match &mut self.handle {
            Handle::Stream(writer) => write_flushed(writer, record),
            Handle::File { path, writer } => match self.mode {
                WriteMode::Append => append_record(writer, path, record),
                WriteMode::Overwrite => overwrite_record(path, record),
            },
        };

        result.map_err(|err| SamplerError::sink_write(self.target.to_string(), err))
    }

    /// Flushes and releases the destination. Stdout stays open.
    pub fn close(mut self) -> error::Result<()> {
        let result = match &mut self.handle {
            Handle::Stream(writer) => writer.flush(),
            Handle::File {
                writer: Some(writer),
                ..
            } => writer.flush(),
            Handle::File { writer: None, .. } => Ok(()),
        };

        result.map_err(|err| SamplerError::sink_write(self.target.to_string(), err))
    }
}

/// Rows end in CRLF, as RFC 4180 writers emit them.
fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(inner)
}

/// Each record is flushed so the log can be followed live.
fn write_flushed<W: Write>(writer: &mut csv::Writer<W>, record: &[String]) -> io::Result<()> {
    writer.write_record(record)?;
    writer.flush()
}

/// Appends through a long-lived writer, creating (and truncating) the file
/// on first use.
fn append_record(
    handle: &mut Option<csv::Writer<File>>, path: &Path, record: &[String],
) -> io::Result<()> {
    let writer = match handle {
        Some(writer) => writer,
        None => handle.insert(csv_writer(File::create(path)?)),
    };

    write_flushed(writer, record)
}

fn overwrite_record(path: &Path, record: &[String]) -> io::Result<()> {
    write_flushed(&mut csv_writer(File::create(path)?), record)
}
