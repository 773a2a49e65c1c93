//! Sensor reads and per-tick sample assembly.
//!
//! Every read re-opens its sysfs file; nothing is cached between ticks.

pub mod cpu_freq;
pub mod sample;
pub mod thermal_zone;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use self::{
    cpu_freq::{core_frequency_path, scale_core_frequency},
    sample::{field_names, format_reading, Sample},
    thermal_zone::{scale_thermal_zone, thermal_zone_path},
};
use crate::utils::error::{self, SamplerError};

/// Reads raw sensor integers from a sysfs tree.
#[derive(Clone, Debug)]
pub struct SensorReader {
    sysfs_root: PathBuf,
}

impl SensorReader {
    pub fn new(sysfs_root: impl Into<PathBuf>) -> Self {
        Self {
            sysfs_root: sysfs_root.into(),
        }
    }

    /// Returns the raw current frequency of a core, in kHz.
    pub fn read_core_frequency(&self, core_id: usize) -> error::Result<i64> {
        read_integer(&core_frequency_path(&self.sysfs_root, core_id))
    }

    /// Returns the raw temperature of a thermal zone, in millidegrees Celsius.
    pub fn read_thermal_zone(&self, zone_id: usize) -> error::Result<i64> {
        read_integer(&thermal_zone_path(&self.sysfs_root, zone_id))
    }
}

/// Reads a whole sysfs file and parses it as a base-10 integer, ignoring
/// surrounding whitespace (sysfs values end in a newline).
fn read_integer(path: &Path) -> error::Result<i64> {
    let bytes = fs::read(path).map_err(|source| SamplerError::SensorUnavailable {
        path: path.to_owned(),
        source,
    })?;
    let contents = String::from_utf8_lossy(&bytes);
    let contents = contents.trim();

    contents
        .parse::<i64>()
        .map_err(|_| SamplerError::SensorFormat {
            path: path.to_owned(),
            contents: contents.to_string(),
        })
}

/// Collects one [`Sample`] per tick from a fixed range of cores and zones.
#[derive(Clone, Debug)]
pub struct SampleCollector {
    reader: SensorReader,
    core_count: usize,
    zone_count: usize,
    field_names: Vec<String>,
}

impl SampleCollector {
    pub fn new(reader: SensorReader, core_count: usize, zone_count: usize) -> Self {
        Self {
            reader,
            core_count,
            zone_count,
            field_names: field_names(core_count, zone_count),
        }
    }

    pub fn core_count(&self) -> usize {
        self.core_count
    }

    pub fn zone_count(&self) -> usize {
        self.zone_count
    }

    /// The field names of every sample, in CSV header order.
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Reads every configured sensor once.
    ///
    /// If `console` is set, each reading is echoed to it as it is read.
    /// The first failing sensor aborts the whole sample.
    pub fn collect(&self, mut console: Option<&mut dyn Write>) -> error::Result<Sample> {
        let mut sample = Sample::with_capacity(self.field_names.len());
        let (core_fields, zone_fields) = self.field_names.split_at(self.core_count);

        for (core_id, field) in core_fields.iter().enumerate() {
            let freq = scale_core_frequency(self.reader.read_core_frequency(core_id)?);
            if let Some(out) = console.as_deref_mut() {
                writeln!(out, "Core {core_id}: {} GHz", format_reading(freq))
                    .map_err(|err| SamplerError::sink_write("console", err))?;
            }
            sample.insert(field.as_str(), freq);
        }

        for (zone_id, field) in zone_fields.iter().enumerate() {
            let temp = scale_thermal_zone(self.reader.read_thermal_zone(zone_id)?);
            if let Some(out) = console.as_deref_mut() {
                writeln!(out, "Zone {zone_id}: {}*C", format_reading(temp))
                    .map_err(|err| SamplerError::sink_write("console", err))?;
            }
            sample.insert(field.as_str(), temp);
        }

        Ok(sample)
    }
}
