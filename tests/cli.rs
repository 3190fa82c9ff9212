/// End-to-end tests for the CLI.
///
/// The `analyze` command runs fully offline: reviews come from the
/// built-in sample feeds, scoring uses the lexicon engine and results
/// land in an in-memory database. Each test runs in its own temporary
/// working directory so config auto-discovery cannot leak between tests.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// A command with a scrubbed environment and an isolated working directory.
fn trust_lens_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("trust-lens");
    cmd.current_dir(dir.path())
        .env_remove("TRUST_LENS_BIND")
        .env_remove("TRUST_LENS_DB")
        .env_remove("TRUST_LENS_ENGINE")
        .env_remove("TRUST_LENS_GEMINI_MODEL")
        .env_remove("GOOGLE_API_KEY");
    cmd
}

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("trust-lens.config.yml"), content).unwrap();
}

// ============================================================================
// Exit Codes
// ============================================================================

mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        let dir = TempDir::new().unwrap();
        trust_lens_cmd(&dir).arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        let dir = TempDir::new().unwrap();
        trust_lens_cmd(&dir).arg("--version").assert().code(0);
    }

    /// Exit code 2: Unknown option
    #[test]
    fn test_exit_code_invalid_option() {
        let dir = TempDir::new().unwrap();
        trust_lens_cmd(&dir).arg("--invalid-option").assert().code(2);
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        let dir = TempDir::new().unwrap();
        trust_lens_cmd(&dir).assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        let dir = TempDir::new().unwrap();
        trust_lens_cmd(&dir)
            .args(["analyze", "--name", "Lamp", "--format", "yaml"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid engine value
    #[test]
    fn test_exit_code_invalid_engine() {
        let dir = TempDir::new().unwrap();
        trust_lens_cmd(&dir)
            .args(["analyze", "--name", "Lamp", "--engine", "llama"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - nothing to analyze
    #[test]
    fn test_exit_code_analyze_without_fields() {
        let dir = TempDir::new().unwrap();
        trust_lens_cmd(&dir)
            .arg("analyze")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("--name"));
    }
}

// ============================================================================
// Analyze Command
// ============================================================================

#[test]
fn test_analyze_prints_json_report_on_stdout() {
    let dir = TempDir::new().unwrap();

    let output = trust_lens_cmd(&dir)
        .args(["analyze", "--name", "Standing Desk"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["product"]["name"], "Standing Desk");
    assert_eq!(report["product"]["trust_score"]["total_reviews"], 5);
    assert_eq!(report["reviews"].as_array().unwrap().len(), 5);
}

#[test]
fn test_analyze_markdown_format() {
    let dir = TempDir::new().unwrap();

    let output = trust_lens_cmd(&dir)
        .args(["analyze", "--name", "Standing Desk", "--format", "markdown"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# Trust Report: Standing Desk"));
    assert!(stdout.contains("## Trust Score"));
    assert!(stdout.contains("## Reviews (5)"));
}

#[test]
fn test_analyze_reports_verdict_on_stderr() {
    let dir = TempDir::new().unwrap();

    trust_lens_cmd(&dir)
        .args(["analyze", "--name", "Standing Desk"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Trust score:"));
}

#[test]
fn test_analyze_writes_output_file() {
    let dir = TempDir::new().unwrap();

    trust_lens_cmd(&dir)
        .args([
            "analyze",
            "--name",
            "Standing Desk",
            "--output",
            "report.json",
        ])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Report written"));

    let written = fs::read_to_string(dir.path().join("report.json")).unwrap();
    let report: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(report["product"]["name"], "Standing Desk");
}

// ============================================================================
// Config File Handling
// ============================================================================

mod config_file_tests {
    use super::*;

    #[test]
    fn test_auto_discovered_config_is_announced() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "engine: lexicon\n");

        trust_lens_cmd(&dir)
            .args(["analyze", "--name", "Lamp"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Auto-discovered config file"));
    }

    #[test]
    fn test_unknown_config_field_warns() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "engine: lexicon\nscoring_mode: strict\n");

        trust_lens_cmd(&dir)
            .args(["analyze", "--name", "Lamp"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains(
                "Unknown config field 'scoring_mode'",
            ));
    }

    #[test]
    fn test_invalid_config_yaml_fails() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "engine: [unclosed\n");

        trust_lens_cmd(&dir)
            .args(["analyze", "--name", "Lamp"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_gemini_engine_without_api_key_fails() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "engine: gemini\n");

        trust_lens_cmd(&dir)
            .args(["analyze", "--name", "Lamp"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn test_cli_engine_flag_beats_config_file() {
        let dir = TempDir::new().unwrap();
        // Config asks for gemini, but the flag forces the offline engine
        write_config(&dir, "engine: gemini\n");

        trust_lens_cmd(&dir)
            .args(["analyze", "--name", "Lamp", "--engine", "lexicon"])
            .assert()
            .code(0);
    }
}
