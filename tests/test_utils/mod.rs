#![allow(dead_code)]

use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use uuid::Uuid;

use twotone::testgen::ToneSequenceSpec;

pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_twotone"))
}

/// Fresh scratch directory under the system temp dir
pub fn scratch_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("twotone-{}-{}", prefix, Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}

/// Write the default page layout with the given tones
pub fn write_page(dir: &PathBuf, name: &str, tone1_hz: f64, tone2_hz: f64) -> PathBuf {
    let path = dir.join(name);
    ToneSequenceSpec::with_tones(tone1_hz, tone2_hz)
        .write_wav(&path)
        .expect("Failed to write test page");
    path
}

/// Binary invocation pinned to one catalog file
pub fn run_twotone<I, S>(catalog: &PathBuf, args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(get_binary_path())
        .arg("--catalog")
        .arg(catalog)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute twotone")
}

pub fn parse_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("Invalid JSON output ({}): {}", e, stdout))
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}
