//! Integration tests for the range-mockgen binary.

use std::io::Write;
use std::process::Command;

fn run_mockgen(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_range-mockgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("MOCKGEN_SEED")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_mockgen(&["--help"]);

    assert!(success);
    assert!(stdout.contains("--nrows"));
    assert!(stdout.contains("--handles"));
    assert!(stdout.contains("--create-table"));
    assert!(stdout.contains("CREATE TABLE mock ("));
    assert!(stdout.contains("range_low <type> NOT NULL"));
}

#[test]
fn test_csv_output() {
    let (stdout, _, success) = run_mockgen(&["-n", "5", "--seed", "7"]);

    assert!(success);
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.lines().all(|l| l.split(',').count() == 4));
}

#[test]
fn test_seeded_output_is_reproducible() {
    let args = ["-n", "20", "--seed", "42", "--sql"];
    let (first, _, _) = run_mockgen(&args);
    let (second, _, _) = run_mockgen(&args);

    assert_eq!(first, second);
    assert!(first.starts_with("INSERT INTO mock"));
    assert!(first.ends_with(";\n"));
}

#[test]
fn test_create_table_output() {
    let (stdout, _, success) = run_mockgen(&["-n", "2", "--seed", "1", "--create-table"]);

    assert!(success);
    assert!(stdout.starts_with("CREATE TABLE mock ("));
    assert!(stdout.contains("COPY mock (handle, range_low, range_high, stuff) FROM stdin;"));
    assert!(stdout.ends_with("\\.\n\n"));
}

#[test]
fn test_verbose_banner_and_logs() {
    let (stdout, stderr, success) =
        run_mockgen(&["-n", "1", "--seed", "1", "--sql", "--verbose"]);

    assert!(success);
    assert!(stdout.starts_with("-- Generating 1 rows of mock data with 10000 handles\n"));
    assert!(stderr.contains("Generation complete"));
}

#[test]
fn test_invalid_bounds_fail() {
    let (stdout, stderr, success) = run_mockgen(&["--lowest", "10", "--highest", "10"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("highest (10) must be greater than lowest (10)"));
}

#[test]
fn test_create_table_conflicts_with_csv() {
    let (_, stderr, success) = run_mockgen(&["--create-table", "--format", "csv"]);

    assert!(!success);
    assert!(stderr.contains("--create-table implies sql-copy"));
}

#[test]
fn test_output_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("mock.csv");
    let path_str = path.to_str().unwrap();

    let (stdout, _, success) = run_mockgen(&["-n", "4", "--seed", "3", "-o", path_str]);

    assert!(success);
    assert!(stdout.is_empty());
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "row_count: 3\nhandle_count: 2\nlowest: 0\nhighest: 50\nseed: 9\noutput_format: sql_insert"
    )
    .unwrap();

    let (stdout, _, success) = run_mockgen(&["--config", file.path().to_str().unwrap()]);

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("INSERT INTO mock"));
}
