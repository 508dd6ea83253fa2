use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "hoopsim-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_hoopsim-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("half-court"));
}

#[test]
fn cli_runs_all_scenarios_to_json() {
    let exe = env!("CARGO_BIN_EXE_hoopsim-tester");
    let output_path = temp_path("scenarios");
    let status = Command::new(exe)
        .args([
            "--scenarios",
            "all",
            "--seeds",
            "1,0x2a",
            "--iterations",
            "2",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let results: serde_json::Value = serde_json::from_str(&content).expect("json report");
    let results = results.as_array().expect("array of results");
    assert_eq!(results.len(), 24);
    assert!(results.iter().all(|r| r["passed"] == true));
    assert!(results.iter().any(|r| r["seed"] == 42));
}

#[test]
fn cli_shot_mode_writes_progression_csv() {
    let exe = env!("CARGO_BIN_EXE_hoopsim-tester");
    let output_path = temp_path("shot");
    let status = Command::new(exe)
        .args([
            "--mode", "shot", "--x", "30.25", "--y", "25", "--trials", "25", "--seeds", "7",
            "--report", "csv", "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("shot,made,missed,percentage"));
    assert_eq!(lines.count(), 25);
}

#[test]
fn cli_shot_mode_json_reports_zone() {
    let exe = env!("CARGO_BIN_EXE_hoopsim-tester");
    let output = Command::new(exe)
        .args([
            "--mode",
            "shot",
            "--canvas-x",
            "550",
            "--canvas-y",
            "30",
            "--basket",
            "right",
            "--report",
            "json",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json on stdout");
    assert_eq!(report["basket"], "right");
    assert!(report["assessment"]["zone"].is_string());
    assert_eq!(report["result"]["trials"].as_array().map(Vec::len), Some(10));
}

#[test]
fn cli_shot_mode_without_position_fails() {
    let exe = env!("CARGO_BIN_EXE_hoopsim-tester");
    let output = Command::new(exe)
        .args(["--mode", "shot", "--x", "12", "--report", "json"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--canvas-x"));
}
