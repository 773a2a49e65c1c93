//! Temperatures from `/sys/class/thermal/thermal_zone*`.
//!
//! See [the Linux kernel documentation](https://www.kernel.org/doc/Documentation/ABI/testing/sysfs-class-thermal)
//! for more details.

use std::path::{Path, PathBuf};

use crate::constants::{THERMAL_CLASS_DIR, THERMAL_ZONE_DIVISOR, THERMAL_ZONE_PROPERTY};

pub fn thermal_zone_path(sysfs_root: &Path, zone_id: usize) -> PathBuf {
    sysfs_root
        .join(THERMAL_CLASS_DIR)
        .join(format!("thermal_zone{zone_id}"))
        .join(THERMAL_ZONE_PROPERTY)
}

/// Scales a raw reading in millidegrees Celsius to degrees Celsius.
#[inline]
pub fn scale_thermal_zone(raw_millidegrees: i64) -> f64 {
    raw_millidegrees as f64 / THERMAL_ZONE_DIVISOR
}
