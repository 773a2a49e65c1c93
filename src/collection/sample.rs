use indexmap::IndexMap;

use crate::constants::{CORE_FIELD_PREFIX, THERMAL_ZONE_FIELD_PREFIX};

/// Returns the CSV field names for the given counts: all cores first,
/// then all thermal zones.
pub fn field_names(core_count: usize, zone_count: usize) -> Vec<String> {
    let cores = (0..core_count).map(|core_id| format!("{CORE_FIELD_PREFIX}{core_id}"));
    let zones = (0..zone_count).map(|zone_id| format!("{THERMAL_ZONE_FIELD_PREFIX}{zone_id}"));

    cores.chain(zones).collect()
}

/// Formats a reading as a decimal float. Whole numbers keep a trailing
/// `.0` (e.g. `2000.0`).
#[inline]
pub fn format_reading(value: f64) -> String {
    format!("{value:?}")
}

/// The readings of one tick, keyed by field name in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sample {
    readings: IndexMap<String, f64>,
}

impl Sample {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            readings: IndexMap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: f64) {
        self.readings.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.readings.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.readings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.readings.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
