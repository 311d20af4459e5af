#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};

pub fn pz() -> Command {
    cargo_bin_cmd!("presenza")
}

/// Base URL nothing listens on; commands that touch the network must fail
/// fast and cleanly against it.
pub const DEAD_API: &str = "http://127.0.0.1:9";
