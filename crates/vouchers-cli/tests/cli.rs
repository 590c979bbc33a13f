use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ROWS: &str = "Order No\tContact\tVoucher\n\
                    A100\t171111111\t50\n\
                    A101\t01722222222\t50\n\
                    A102\t01733333333\t100\n";

/// A `vouchers` command that never sees the real user config.
fn vouchers(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vouchers").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path());
    cmd
}

#[test]
fn test_generate_to_stdout() {
    let home = TempDir::new().unwrap();

    vouchers(&home)
        .args(["generate", "--stdout", "--no-prompt"])
        .args(["--start", "01/01/2026", "--end", "05/01/2026"])
        .write_stdin(ROWS)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Need to send notification for the coupon list below:\n\n1. SORRY50\n",
        ))
        .stdout(predicate::str::contains("A100\u{a0}\u{a0}\u{a0}0171111111"))
        .stdout(predicate::str::contains("2. SORRY100"))
        .stdout(predicate::str::contains("Minimum order: 149 taka"))
        .stdout(predicate::str::contains("Validity: 1st January to 5th January"));
}

#[test]
fn test_generate_writes_file() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let input = home.path().join("rows.tsv");
    fs::write(&input, ROWS).unwrap();

    vouchers(&home)
        .arg("generate")
        .arg(&input)
        .args(["-s", "01/01/2026", "-e", "05/01/2026", "--session", "morning", "--no-prompt"])
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Notification file generated"));

    let written = out.path().join("Morning_1_January_to_5_January.txt");
    let body = fs::read_to_string(written).unwrap();
    assert!(body.starts_with("Need to send notification"));
    assert!(body.contains("Use coupon SORRY50 to get 50 taka off"));
}

#[test]
fn test_generate_rejects_blocking_rows() {
    let home = TempDir::new().unwrap();
    let rows = "Order No\tContact\tVoucher\n\
                A100\t01711111111\tfifty\n\
                \t01722222222\t50\n";

    vouchers(&home)
        .args(["generate", "--stdout", "--no-prompt", "-s", "01/01/2026", "-e", "02/01/2026"])
        .write_stdin(rows)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be fixed before generating"))
        .stderr(predicate::str::contains(
            "1 invalid voucher(s), 1 missing order id(s)",
        ));
}

#[test]
fn test_duplicates_need_consent() {
    let home = TempDir::new().unwrap();
    let rows = "Order No\tContact\tVoucher\n\
                A100\t01711111111\t50\n\
                A101\t01711111111\t100\n";

    vouchers(&home)
        .args(["generate", "--stdout", "--no-prompt", "-s", "01/01/2026", "-e", "02/01/2026"])
        .write_stdin(rows)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--allow-duplicates"))
        .stderr(predicate::str::contains("share a contact number"));

    vouchers(&home)
        .args(["generate", "--stdout", "--no-prompt", "--allow-duplicates"])
        .args(["-s", "01/01/2026", "-e", "02/01/2026"])
        .write_stdin(rows)
        .assert()
        .success()
        .stdout(predicate::str::contains("2. SORRY100"));
}

#[test]
fn test_generate_requires_dates_without_prompt() {
    let home = TempDir::new().unwrap();

    vouchers(&home)
        .args(["generate", "--stdout", "--no-prompt"])
        .write_stdin(ROWS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--start is required"));
}

#[test]
fn test_all_issued_rows() {
    let home = TempDir::new().unwrap();
    let rows = "Order No\tContact\tVoucher\tVoucher Given\n\
                A100\t01711111111\t50\tYes\n";

    vouchers(&home)
        .args(["generate", "--stdout", "--no-prompt", "-s", "01/01/2026", "-e", "02/01/2026"])
        .write_stdin(rows)
        .assert()
        .failure()
        .stderr(predicate::str::contains("All vouchers have already been given"));
}

#[test]
fn test_preview_json() {
    let home = TempDir::new().unwrap();

    let output = vouchers(&home)
        .args(["preview", "--format", "json"])
        .write_stdin(ROWS)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_rows"], 3);
    assert_eq!(report["valid"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["valid"][0]["contact"], "0171111111");
}

#[test]
fn test_preview_text_reports_headers() {
    let home = TempDir::new().unwrap();

    vouchers(&home)
        .arg("preview")
        .write_stdin("A100\t01711111111\t50\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("headers not found"));
}

#[test]
fn test_config_overrides_coupon_prefix() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.json");
    fs::write(&config, r#"{"notification": {"coupon_prefix": "OOPS"}}"#).unwrap();

    vouchers(&home)
        .arg("-c")
        .arg(&config)
        .args(["generate", "--stdout", "--no-prompt", "-s", "01/01/2026", "-e", "05/01/2026"])
        .write_stdin(ROWS)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. OOPS50"))
        .stdout(predicate::str::contains("Minimum order: 99 taka"));
}

#[test]
fn test_config_init_and_get() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("vouchers.json");

    vouchers(&home)
        .arg("-c")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created"));

    vouchers(&home)
        .arg("-c")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    vouchers(&home)
        .arg("-c")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    vouchers(&home)
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "notification.coupon_prefix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"SORRY\""));

    vouchers(&home)
        .arg("-c")
        .arg(&config)
        .args(["config", "get", "notification.nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn test_generate_with_index_column() {
    let home = TempDir::new().unwrap();
    let rows = "\tOrder No\tContact\tVoucher\n\
                1\tA100\t01711111111\t50\n\
                2\tA101\t01722222222\t50\n";

    vouchers(&home)
        .args(["generate", "--stdout", "--no-prompt", "-s", "01/01/2026", "-e", "05/01/2026"])
        .write_stdin(rows)
        .assert()
        .success()
        .stdout(predicate::str::contains("A100\u{a0}\u{a0}\u{a0}01711111111"))
        .stdout(predicate::str::contains("A101\u{a0}\u{a0}\u{a0}01722222222"))
        .stdout(predicate::str::contains("1. SORRY50"));
}

#[test]
fn test_sheet_fetch_failure_is_reported() {
    let home = TempDir::new().unwrap();

    vouchers(&home)
        .args(["preview", "--sheet-date", "25/12/2025"])
        .args(["--sheet-url", "http://127.0.0.1:9/export.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch data from the sheet"));
}
