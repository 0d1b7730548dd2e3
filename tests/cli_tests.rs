//! CLI integration tests.
//!
//! These tests invoke the `schema2ld` binary via `std::process::Command`
//! and verify the files it writes.

use std::path::PathBuf;
use std::process::Command;

/// Path to the built binary (set by cargo test).
fn binary_path() -> PathBuf {
    // `cargo test` places the test binary next to the main binary
    let mut path = std::env::current_exe()
        .expect("current_exe")
        .parent()
        .expect("parent")
        .parent()
        .expect("grandparent")
        .to_path_buf();
    path.push("schema2ld");
    path
}

#[test]
fn generates_all_term_documents() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(binary_path())
        .args(["-o", dir.path().to_str().unwrap(), "-q"])
        .output()
        .expect("failed to execute binary");

    assert!(
        output.status.success(),
        "schema2ld failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert!(
        files.len() >= 30,
        "expected a document per record type, got {files:?}"
    );
    assert!(files.contains(&"DandisetMeta.yaml".to_string()));
    assert!(files.contains(&"BioSample.yaml".to_string()));

    let dandiset = std::fs::read_to_string(dir.path().join("DandisetMeta.yaml")).unwrap();
    assert!(dandiset.starts_with("# AUTOGENERATED - DO NOT EDIT\n"));
}

#[test]
fn type_filter_selects_named_records() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(binary_path())
        .args([
            "-o",
            dir.path().to_str().unwrap(),
            "-t",
            "Digest",
            "-t",
            "Person",
            "-q",
        ])
        .output()
        .expect("failed to execute binary");
    assert!(output.status.success());

    let mut files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    files.sort();
    assert_eq!(files, ["Digest.yaml", "Person.yaml"]);
}

#[test]
fn unknown_type_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(binary_path())
        .args(["-o", dir.path().to_str().unwrap(), "-t", "NoSuchType"])
        .output()
        .expect("failed to execute binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown record type"), "stderr: {stderr}");
}

#[test]
fn json_format_writes_json_files() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(binary_path())
        .args([
            "-o",
            dir.path().to_str().unwrap(),
            "-f",
            "json",
            "-t",
            "Digest",
            "-q",
        ])
        .output()
        .expect("failed to execute binary");
    assert!(output.status.success());

    let text = std::fs::read_to_string(dir.path().join("Digest.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["@graph"][0]["@id"], "dandi:Digest");
}

#[test]
fn unknown_format_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(binary_path())
        .args(["-o", dir.path().to_str().unwrap(), "-f", "turtle"])
        .output()
        .expect("failed to execute binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown format"), "stderr: {stderr}");
}

#[test]
fn list_prints_record_names() {
    let output = Command::new(binary_path())
        .arg("--list")
        .output()
        .expect("failed to execute binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|l| l == "DandisetMeta"));
    assert!(stdout.lines().any(|l| l == "AssayType"));
}

#[test]
fn quiet_suppresses_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(binary_path())
        .args(["-o", dir.path().to_str().unwrap(), "-t", "Digest", "-q"])
        .output()
        .expect("failed to execute binary");
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(
        stderr.is_empty(),
        "Quiet mode should produce no stderr output, got: {stderr}"
    );
}

#[test]
fn verbose_reports_each_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(binary_path())
        .args(["-o", dir.path().to_str().unwrap(), "-t", "Digest", "-v"])
        .output()
        .expect("failed to execute binary");
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Wrote "), "stderr: {stderr}");
    assert!(stderr.contains("Generated 1 term documents"), "stderr: {stderr}");
}
