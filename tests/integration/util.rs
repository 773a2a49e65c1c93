use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use tempfile::TempDir;

const CPUTEMPFREQ_EXE_PATH: &str = env!("CARGO_BIN_EXE_cputempfreq");
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

/// Returns the [`Command`] of a binary invocation of cputempfreq.
pub fn cputempfreq_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(CPUTEMPFREQ_EXE_PATH);

    let mut prev = "";
    for arg in args.iter() {
        if prev == "-C" {
            // This is the config file; make sure we set it to absolute path!
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}

/// Returns the [`Command`] of a binary invocation of cputempfreq with the
/// default, empty config file, so a user's own config never leaks in.
pub fn no_cfg_cputempfreq_command() -> Command {
    cputempfreq_command(&DEFAULT_CFG)
}

/// A fake sysfs tree holding `scaling_cur_freq` and thermal zone `temp` files.
pub struct FakeSysfs {
    dir: TempDir,
}

impl FakeSysfs {
    pub fn new(cores: &[&str], zones: &[&str]) -> Self {
        let sysfs = FakeSysfs {
            dir: tempfile::tempdir().unwrap(),
        };

        for (core_id, contents) in cores.iter().enumerate() {
            write_file(&sysfs.core_path(core_id), contents);
        }
        for (zone_id, contents) in zones.iter().enumerate() {
            write_file(&sysfs.zone_path(zone_id), contents);
        }

        sysfs
    }

    pub fn root(&self) -> &str {
        self.dir.path().to_str().unwrap()
    }

    pub fn core_path(&self, core_id: usize) -> PathBuf {
        self.dir
            .path()
            .join(format!("devices/system/cpu/cpu{core_id}/cpufreq/scaling_cur_freq"))
    }

    pub fn zone_path(&self, zone_id: usize) -> PathBuf {
        self.dir
            .path()
            .join(format!("class/thermal/thermal_zone{zone_id}/temp"))
    }
}

fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Splits CSV output into its lines.
pub fn csv_lines(contents: &str) -> Vec<&str> {
    contents.split_terminator("\r\n").collect()
}
