// ABOUTME: Common utilities for texpand integration tests
// ABOUTME: Runs the compiled binary with arguments and piped stdin

#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Run the texpand binary with `args`, feeding `template` on stdin, and
/// collect its output and exit status.
pub fn run_texpand(args: &[&str], template: &str) -> Output {
    let mut child = Command::new("cargo")
        .args(["run", "--quiet", "--"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start texpand");

    child
        .stdin
        .take()
        .expect("child stdin is piped")
        .write_all(template.as_bytes())
        .expect("failed to write template to stdin");

    child
        .wait_with_output()
        .expect("failed to wait for texpand")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
