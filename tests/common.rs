#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timelog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Binary under test, pointed at a config path that does not exist
/// so the user's own configuration never leaks into a test.
pub fn tl(name: &str) -> Command {
    tl_with_config(&temp_path(name, "conf"))
}

pub fn tl_with_config(config_path: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("timelog");
    cmd.env_remove("RUST_LOG").args(["--config", config_path]);
    cmd
}

/// Write `lines` into a fresh log file inside the temp dir
pub fn write_log(name: &str, lines: &[&str]) -> String {
    let p = temp_path(name, "log");
    fs::write(&p, lines.join("\n")).expect("write log file");
    p
}

/// Write a config file with the given YAML content
pub fn write_config(name: &str, yaml: &str) -> String {
    let p = temp_path(name, "conf");
    fs::write(&p, yaml).expect("write config file");
    p
}

/// Temporary output path that is guaranteed not to exist yet
pub fn temp_out(name: &str, ext: &str) -> String {
    temp_path(&format!("{name}_out"), ext)
}

/// Unused config path (removed if left over from an earlier run)
pub fn temp_config(name: &str) -> String {
    temp_path(name, "conf")
}

pub const TWO_DAYS: &[&str] = &[
    "Start: 10.12.2018 07:00",
    "End: 10.12.2018 16:30",
    "Start: 11.12.2018 07:00",
    "End: 11.12.2018 15:30",
];

pub const OVERNIGHT: &[&str] = &["Start: 28.12.2018 23:00", "End: 29.12.2018 02:00"];
