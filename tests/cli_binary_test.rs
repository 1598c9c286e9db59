#![cfg(feature = "cli")]

use anyhow::Result;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_binary(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_sample-fixtures"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn write_config(dir: &Path) -> Result<String> {
    let config_path = dir.join("fixtures.toml");
    std::fs::write(
        &config_path,
        r#"
[counter]
value = -5

[composite]
items = ["a", "b", "c"]
"#,
    )?;
    Ok(config_path.to_string_lossy().into_owned())
}

#[test]
fn test_default_run_prints_only_counter_line() -> Result<()> {
    let output = run_binary(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "Processing: 10\n");
    // the startup info log goes to stderr
    assert!(!output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_json_logs_keep_stdout_clean() -> Result<()> {
    let output = run_binary(&["--json-logs", "counter", "--value", "7"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "Processing: 7\n");
    assert!(String::from_utf8(output.stderr)?.trim_start().starts_with('{'));
    Ok(())
}

#[test]
fn test_empty_composite_is_not_an_error() -> Result<()> {
    let output = run_binary(&["composite"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "Items: 0\n");
    Ok(())
}

#[test]
fn test_counter_falls_back_to_config_value() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(temp_dir.path())?;

    let output = run_binary(&["--config", &config_path, "counter"])?;
    assert_eq!(String::from_utf8(output.stdout)?, "Processing: -5\n");

    let output = run_binary(&["--config", &config_path])?;
    assert_eq!(String::from_utf8(output.stdout)?, "Processing: -5\n");
    Ok(())
}

#[test]
fn test_command_line_value_beats_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(temp_dir.path())?;

    let output = run_binary(&["--config", &config_path, "counter", "--value", "3"])?;
    assert_eq!(String::from_utf8(output.stdout)?, "Processing: 3\n");
    Ok(())
}

#[test]
fn test_composite_uses_config_items_unless_given() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(temp_dir.path())?;

    let output = run_binary(&["--config", &config_path, "composite"])?;
    assert_eq!(String::from_utf8(output.stdout)?, "Items: 3\n");

    let output = run_binary(&["--config", &config_path, "composite", "x"])?;
    assert_eq!(String::from_utf8(output.stdout)?, "Items: 1\n");
    Ok(())
}

#[test]
fn test_missing_config_exits_with_io_code() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("absent.toml");

    let output = run_binary(&["--config", &missing.to_string_lossy(), "counter"])?;
    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    Ok(())
}
