#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wtl() -> Command {
    cargo_bin_cmd!("wtimeline")
}

/// Config path inside the system temp dir that does not exist yet, so the
/// binary runs with default settings regardless of the user's home config.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wtimeline.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run a session fed with `script` on stdin, returning (stdout, stderr).
pub fn run_session(name: &str, script: &str) -> (String, String) {
    let cfg = temp_config(name);
    let output = wtl()
        .args(["--config", &cfg, "--no-color", "session"])
        .write_stdin(script.to_string())
        .output()
        .expect("run session");
    assert!(output.status.success(), "session failed: {:?}", output);

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}
