//! Integration tests for command mode (-c/--command flag)

use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gridpad"));
    for arg in args {
        cmd.arg("-c").arg(arg);
    }
    run(cmd)
}

fn run(mut cmd: Command) -> (String, String, i32) {
    let output = cmd.output().expect("Failed to execute gridpad");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_set_and_print() {
    let (stdout, _, code) = run_command(&["set B2 hello"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("|   | 2 |"));
    assert!(stdout.contains("| B | hello |"));
}

#[test]
fn test_empty_sheet() {
    let (stdout, _, code) = run_command(&["new"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("*Empty sheet*"));
}

#[test]
fn test_numeric_sort() {
    let mut script = Vec::new();
    for (i, label) in ('A'..='Z').enumerate() {
        let value = match i {
            0 => "10".to_string(),
            1 => "2".to_string(),
            2 => "1".to_string(),
            _ => (100 + i).to_string(),
        };
        script.push(format!("set {}0 {}", label, value));
    }
    script.push("sort 0".to_string());
    let args: Vec<&str> = script.iter().map(String::as_str).collect();

    let (stdout, _, code) = run_command(&args);
    assert_eq!(code, 0);
    assert!(stdout.contains("| A | 1 |"));
    assert!(stdout.contains("| B | 2 |"));
    assert!(stdout.contains("| C | 10 |"));
}

#[test]
fn test_invalid_sort_column_fails() {
    let (stdout, stderr, code) = run_command(&["set A0 x", "sort 30"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("command 'sort 30'"));
    assert!(stderr.contains("Invalid column"));
}

#[test]
fn test_unknown_command_fails() {
    let (_, stderr, code) = run_command(&["launch rockets"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown command"));
}

#[test]
fn test_filter_output() {
    let (stdout, _, code) = run_command(&[
        "set A0 abc",
        "set B0 xyz",
        "set C0 cab",
        "filter 0 ab",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("| A | abc |"));
    assert!(stdout.contains("| C | cab |"));
    assert!(!stdout.contains("xyz"));
}

#[test]
fn test_cut_and_paste_moves_values() {
    let (stdout, _, code) = run_command(&[
        "set A0 one",
        "set A1 two",
        "select A0",
        "toggle A1",
        "cut",
        "select C0",
        "toggle C1",
        "paste",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("| C | one | two |"));
    assert!(!stdout.contains("| A |"));
}

#[test]
fn test_markdown_output_file() {
    use std::fs;

    let output_file = std::env::temp_dir().join("gridpad_test_output.md");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gridpad"));
    cmd.args(["-c", "set A0 42", "-o"]).arg(&output_file);
    let (_, stderr, code) = run(cmd);
    assert_eq!(code, 0);
    assert!(stderr.contains("Result written to"));

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("| A | 42 |"));

    fs::remove_file(&output_file).ok();
}

#[test]
fn test_missing_config_file_fails() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gridpad"));
    cmd.args(["--config", "/nonexistent/gridpad/config.toml", "-c", "new"]);
    let (_, stderr, code) = run(cmd);
    assert_eq!(code, 1);
    assert!(stderr.contains("Config file not found"));
}
