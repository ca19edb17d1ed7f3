// tests/cli_test.rs
//
// End-to-end runs of the twotone binary.

mod test_utils;

use std::fs;
use test_utils::*;

#[test]
fn test_synth_catalog_detect_json() {
    let dir = scratch_dir("cli");
    let catalog = dir.join("catalog.json");
    let page = dir.join("page.wav");

    let output = run_twotone(
        &catalog,
        ["synth", "--tone1", "1000", "--tone2", "1500", "-o"]
            .iter()
            .map(|s| s.to_string())
            .chain([page.display().to_string()]),
    );
    assert!(output.status.success(), "synth failed: {:?}", output);
    assert!(page.exists());

    let output = run_twotone(
        &catalog,
        ["catalog", "add", "--label", "Station 7", "--tone1", "1000", "--tone2", "1500"],
    );
    assert!(output.status.success(), "catalog add failed: {:?}", output);

    let output = run_twotone(&catalog, ["catalog", "list", "--json"]);
    let entries = parse_json(&output);
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["id"], 1);

    let output = run_twotone(
        &catalog,
        vec!["detect".to_string(), "--json".to_string(), page.display().to_string()],
    );
    assert!(output.status.success(), "detect failed: {:?}", output);
    let results = parse_json(&output);
    let first = &results[0];
    assert_eq!(first["status"], "matched");
    assert_eq!(first["matched_entry"]["label"], "Station 7");
    assert_close(first["tone1_detected_hz"].as_f64().unwrap(), 1000.0, 1.0);
    assert_close(first["tone2_detected_hz"].as_f64().unwrap(), 1500.0, 1.0);
    assert!(first["confidence"].as_f64().unwrap() > 0.8);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_detect_directory_reports_failures() {
    let dir = scratch_dir("cli-dir");
    let catalog = dir.join("catalog.json");
    let inputs = dir.join("inputs");
    fs::create_dir_all(&inputs).unwrap();
    write_page(&inputs, "a.wav", 600.0, 900.0);
    fs::write(inputs.join("b.wav"), b"not audio").unwrap();
    fs::write(inputs.join("notes.txt"), b"ignored").unwrap();

    let output = run_twotone(
        &catalog,
        vec!["detect".to_string(), "--json".to_string(), inputs.display().to_string()],
    );
    assert!(!output.status.success());

    let results = parse_json(&output);
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["status"], "unmatched");
    assert_eq!(results[0]["message"], "Tones detected but no matching entry in catalog");
    assert_eq!(results[1]["bad_input"], true);

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn test_catalog_show_missing_entry_fails() {
    let dir = scratch_dir("cli-missing");
    let catalog = dir.join("catalog.json");

    let output = run_twotone(&catalog, ["catalog", "show", "42"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("42"), "stderr: {}", stderr);

    let _ = fs::remove_dir_all(dir);
}
