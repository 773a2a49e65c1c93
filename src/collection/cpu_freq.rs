//! Core clock frequencies, read from the `cpufreq` interface.
//!
//! See [the Linux kernel documentation](https://www.kernel.org/doc/html/latest/admin-guide/pm/cpufreq.html)
//! for more details.

use std::path::{Path, PathBuf};

use crate::constants::{CORE_FREQ_DIVISOR, CPU_DEVICES_DIR, CPU_FREQ_PROPERTY};

/// Returns the `scaling_cur_freq` path for a core, e.g.
/// `/sys/devices/system/cpu/cpu3/cpufreq/scaling_cur_freq`.
pub fn core_frequency_path(sysfs_root: &Path, core_id: usize) -> PathBuf {
    sysfs_root
        .join(CPU_DEVICES_DIR)
        .join(format!("cpu{core_id}"))
        .join("cpufreq")
        .join(CPU_FREQ_PROPERTY)
}

/// Scales a raw `scaling_cur_freq` reading, which is in kHz.
#[inline]
pub fn scale_core_frequency(raw_khz: i64) -> f64 {
    raw_khz as f64 / CORE_FREQ_DIVISOR
}
