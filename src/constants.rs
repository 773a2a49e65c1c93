//! Defaults and fixed locations.

// Output
pub const DEFAULT_LOGFILE: &str = "cpu_info.csv";
/// Passing this as the logfile writes rows to stdout instead of a file.
pub const STREAM_SENTINEL: &str = "-";

// Sampling
pub const DEFAULT_DELAY_SECONDS: f64 = 1.0;
pub const DEFAULT_CORE_COUNT: usize = 8;
pub const DEFAULT_THERMAL_ZONE_COUNT: usize = 4;

// Sensors
pub const DEFAULT_SYSFS_ROOT: &str = "/sys";
pub const CPU_DEVICES_DIR: &str = "devices/system/cpu";
pub const THERMAL_CLASS_DIR: &str = "class/thermal";
pub const CPU_FREQ_PROPERTY: &str = "scaling_cur_freq";
pub const THERMAL_ZONE_PROPERTY: &str = "temp";

/// Divisor applied to raw `scaling_cur_freq` values (kHz).
pub const CORE_FREQ_DIVISOR: f64 = 1_000.0;
/// Divisor applied to raw thermal zone values (millidegrees Celsius).
pub const THERMAL_ZONE_DIVISOR: f64 = 1_000.0;

// Field names
pub const CORE_FIELD_PREFIX: &str = "core_";
pub const THERMAL_ZONE_FIELD_PREFIX: &str = "thermal_zone_";

// Config
pub const DEFAULT_CONFIG_DIR: &str = "cputempfreq";
pub const DEFAULT_CONFIG_FILE: &str = "cputempfreq.toml";
