//! End-to-end tests for the small-calc binary

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn small_calc() -> Command {
    let mut cmd = Command::cargo_bin("small-calc").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_prints_result() {
    small_calc()
        .args(["add", "2", "3"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_negative_operands() {
    small_calc()
        .args(["divide", "-7", "2"])
        .assert()
        .success()
        .stdout("-3\n");
}

#[test]
fn test_divide_by_zero_exit_code() {
    small_calc()
        .args(["divide", "1", "0"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Cannot divide by zero"));
}

#[test]
fn test_overflow_exit_code_and_policy_flag() {
    small_calc()
        .args(["factorial", "21"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not fit"));

    small_calc()
        .args(["--overflow", "saturate", "factorial", "21"])
        .assert()
        .success()
        .stdout(format!("{}\n", u64::MAX));
}

#[test]
fn test_text_commands() {
    small_calc()
        .args(["reverse", "héllo"])
        .assert()
        .success()
        .stdout("olléh\n");

    small_calc()
        .args(["is-palindrome", "A man a plan a canal Panama"])
        .assert()
        .success()
        .stdout("true\n");

    small_calc()
        .args(["count-words", "  hello   world  "])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_json_output() {
    small_calc()
        .args(["--format", "json", "gcd", "12", "18"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""operation":"gcd""#))
        .stdout(predicate::str::contains(r#""result":6"#));
}

#[test]
fn test_config_file_sets_policy() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("small-calc.toml");
    fs::write(&config_path, "[arithmetic]\noverflow = \"wrap\"\n").unwrap();

    small_calc()
        .args(["--config", config_path.to_str().unwrap()])
        .args(["add", "9223372036854775807", "1"])
        .assert()
        .success()
        .stdout("-9223372036854775808\n");
}

#[test]
fn test_invalid_config_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[arithmetic]\noverflow = \"explode\"\n").unwrap();

    small_calc()
        .args(["--config", config_path.to_str().unwrap(), "add", "1", "2"])
        .assert()
        .code(3);
}

#[test]
fn test_truncate_width_is_range_checked() {
    small_calc()
        .args(["truncate", "hello world", "--width", "0"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("width must be between 1 and 10000"));

    small_calc()
        .args(["truncate", "hello world", "--width", "8"])
        .assert()
        .success()
        .stdout("hello...\n");
}
