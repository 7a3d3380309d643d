#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, FixedOffset};
use std::fs;
use std::path::PathBuf;
use talogo::models::session::Session;
use tempfile::TempDir;

/// `talogo` binary isolated from the user's config file.
pub fn tlg(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("talogo");
    cmd.env("TALOGO_CONFIG", dir.path().join("talogo.conf"));
    cmd
}

/// Fresh temp dir plus the path of a (not yet created) log inside it.
pub fn temp_log(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(format!("{name}.csv"));
    (dir, path)
}

/// Temp log pre-filled with `content`.
pub fn log_with(name: &str, content: &str) -> (TempDir, PathBuf) {
    let (dir, path) = temp_log(name);
    fs::write(&path, content).expect("write log");
    (dir, path)
}

pub fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("valid RFC 3339 timestamp")
}

pub fn session(titles: &[&str], start: &str, end: &str) -> Session {
    Session::new(
        titles.iter().map(|t| t.to_string()).collect(),
        ts(start),
        ts(end),
    )
    .expect("valid session")
}

pub fn read(path: &PathBuf) -> String {
    fs::read_to_string(path).expect("read log")
}
