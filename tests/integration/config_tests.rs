//! These tests are for config-file-specific options, valid and invalid.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{cputempfreq_command, csv_lines, FakeSysfs};

#[test]
fn test_toml_mismatch_type() {
    cputempfreq_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_unknown_flag_in_config() {
    cputempfreq_command(&["-C", "./tests/invalid_configs/unknown_flag.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn test_negative_delay_in_config() {
    cputempfreq_command(&["-C", "./tests/invalid_configs/negative_delay.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'delay' was set with an invalid value"));
}

/// This test isn't really needed as TOML parsing already rejects this.
/// However, I feel like it's worth checking anyways - not like it takes long.
#[test]
fn test_duplicate_key() {
    cputempfreq_command(&["-C", "./tests/invalid_configs/duplicate_key.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate key"));
}

#[test]
fn test_missing_config() {
    cputempfreq_command(&["-C", "./tests/invalid_configs/does_not_exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to properly parse or read the config file",
        ));
}

#[test]
fn test_config_values_are_used() {
    let sysfs = FakeSysfs::new(&["2000000\n", "1800000\n"], &["45000\n"]);

    let output = cputempfreq_command(&["-C", "./tests/valid_configs/stream_two_cores.toml"])
        .arg("--sysfs-root")
        .arg(sysfs.root())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        csv_lines(&stdout),
        [
            "core_0,core_1,thermal_zone_0",
            "2000.0,1800.0,45.0",
            "2000.0,1800.0,45.0"
        ]
    );
}

#[test]
fn test_args_override_config() {
    let sysfs = FakeSysfs::new(&["2000000\n", "1800000\n"], &["45000\n"]);

    let output = cputempfreq_command(&["-C", "./tests/valid_configs/stream_two_cores.toml"])
        .arg("--sysfs-root")
        .arg(sysfs.root())
        .arg("--core-count")
        .arg("1")
        .arg("--samples")
        .arg("1")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        csv_lines(&stdout),
        ["core_0,thermal_zone_0", "2000.0,45.0"]
    );
}

#[cfg(feature = "logging")]
#[test]
fn test_debug_log_from_config() {
    let sysfs = FakeSysfs::new(&["2000000\n"], &["45000\n"]);
    let dir = tempfile::tempdir().unwrap();
    let debug_log = dir.path().join("debug.log");
    let config_path = dir.path().join("cputempfreq.toml");
    fs::write(
        &config_path,
        format!(
            "[flags]\nlogfile = \"-\"\ndelay = 0\ncore_count = 1\nthermal_zone_count = 1\n\
            samples = 1\ndebug_log = {:?}\n",
            debug_log.to_str().unwrap()
        ),
    )
    .unwrap();

    cputempfreq_command(&["-C", config_path.to_str().unwrap()])
        .arg("--sysfs-root")
        .arg(sysfs.root())
        .assert()
        .success()
        .stdout("core_0,thermal_zone_0\r\n2000.0,45.0\r\n");

    let contents = fs::read_to_string(&debug_log).unwrap();
    assert!(contents.contains("[INFO] Sampling stopped after 1 samples."));
}
