use serde::Deserialize;

/// The config file layout.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub(crate) flags: Option<ConfigFlags>,
}

/// A delay, written either as a number of seconds or as a human duration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub(crate) enum StringOrNum {
    String(String),
    Num(f64),
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFlags {
    pub(crate) logfile: Option<String>,
    pub(crate) delay: Option<StringOrNum>,
    pub(crate) core_count: Option<usize>,
    pub(crate) thermal_zone_count: Option<usize>,
    pub(crate) verbose: Option<bool>,
    pub(crate) sysfs_root: Option<String>,
    pub(crate) overwrite: Option<bool>,
    pub(crate) samples: Option<u64>,
    pub(crate) debug_log: Option<String>,
}
