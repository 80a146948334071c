use projpatch::config::patterns::{NEW_QUERY, NEW_QUERY_ALT, OLD_QUERY, OLD_QUERY_ALT};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn get_test_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test executable name
    path.pop(); // Remove 'deps' directory
    path.push("projpatch");

    if cfg!(target_os = "windows") {
        path.set_extension("exe");
    }

    path
}

fn run_in(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(get_test_binary())
        .args(args)
        .current_dir(dir.path())
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_test_binary())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("project_id"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(get_test_binary())
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
}

#[test]
fn test_default_target_with_only_old_query() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("api_server.py"), OLD_QUERY).unwrap();

    let output = run_in(&temp_dir, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("✓ SQL query updated to include project_id"));
    assert!(!stdout.contains("alternative format"));
    assert!(stdout.contains("⚠ Old payload not found"));
    assert!(stdout.contains("New file created: api_server.py.updated"));

    let updated = fs::read_to_string(temp_dir.path().join("api_server.py.updated")).unwrap();
    assert_eq!(updated, NEW_QUERY);
}

#[test]
fn test_no_patterns_copies_input_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let content = "from flask import Flask\napp = Flask(__name__)\n";
    fs::write(temp_dir.path().join("server.py"), content).unwrap();

    let output = run_in(&temp_dir, &["server.py"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("⚠ Old query not found - checking alternative format..."));
    assert!(stdout.contains("⚠ Old payload not found"));
    assert!(stdout.contains("✅ File updated successfully!"));

    let updated = fs::read(temp_dir.path().join("server.py.updated")).unwrap();
    assert_eq!(updated, content.as_bytes());
}

#[test]
fn test_alternate_format_message() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("api_server.py"), OLD_QUERY_ALT).unwrap();

    let output = run_in(&temp_dir, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let warning = stdout
        .find("⚠ Old query not found - checking alternative format...")
        .unwrap();
    let success = stdout.find("✓ SQL query updated (alternative format)").unwrap();
    assert!(warning < success);

    let updated = fs::read_to_string(temp_dir.path().join("api_server.py.updated")).unwrap();
    assert_eq!(updated, NEW_QUERY_ALT);
}

#[test]
fn test_missing_target_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(&temp_dir, &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to read"));
    assert!(!temp_dir.path().join("api_server.py.updated").exists());
}

#[test]
fn test_write_failure_after_status_lines() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("api_server.py"), OLD_QUERY).unwrap();
    // a directory on the output path makes the write fail
    fs::create_dir(temp_dir.path().join("api_server.py.updated")).unwrap();

    let output = run_in(&temp_dir, &[]);

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("✓ SQL query updated to include project_id"));
    assert!(stdout.contains("⚠ Old payload not found"));
    assert!(!stdout.contains("File updated successfully"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to write"));
}

#[test]
fn test_dry_run_previews_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("api_server.py"), OLD_QUERY).unwrap();

    let output = run_in(&temp_dir, &["--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("DRY RUN"));
    assert!(stdout.contains("- OLD:"));
    assert!(stdout.contains("LEFT JOIN projects p ON rt.project_id = p.id"));
    assert!(!stdout.contains("File updated successfully"));
    assert!(!temp_dir.path().join("api_server.py.updated").exists());
}

#[test]
fn test_json_report() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("api_server.py"), OLD_QUERY).unwrap();

    let output = run_in(&temp_dir, &["--json"]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["changed"], true);
    assert_eq!(report["written"], true);
    assert_eq!(report["steps"][0]["name"], "query");
    assert_eq!(report["steps"][0]["status"], "primary");
    assert_eq!(report["steps"][0]["replacements"], 1);
    assert_eq!(report["steps"][1]["status"], "not_found");
    assert!(temp_dir.path().join("api_server.py.updated").exists());
}
