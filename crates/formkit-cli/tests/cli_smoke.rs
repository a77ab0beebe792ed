//! End-to-end checks of the `formkit` binary: exit codes and stdout.

use std::fs;
use std::process::{Command, Output};

fn formkit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_formkit"))
        .args(args)
        .output()
        .expect("failed to spawn formkit")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn date_exit_codes() {
    assert_eq!(formkit(&["date", "29/02/2012"]).status.code(), Some(0));
    assert_eq!(formkit(&["date", "29/02/2013"]).status.code(), Some(1));
    assert_eq!(formkit(&["date", "31/04/2015"]).status.code(), Some(1));
}

#[test]
fn date_gt_prints_verdict() {
    let out = formkit(&["date-gt", "01/04/2015", "30/03/2015"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "true");

    let out = formkit(&["date-gt", "30/03/2015", "01/04/2015"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "false");

    let out = formkit(&["date-gt", "32/01/2015", "01/04/2015"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).contains("first date"));
}

#[test]
fn identifier_commands() {
    assert_eq!(formkit(&["cpf", "11144477735"]).status.code(), Some(0));
    assert_eq!(formkit(&["cpf", "12345678901"]).status.code(), Some(1));
    assert_eq!(formkit(&["cpf", "111.444.777-35"]).status.code(), Some(1));
    assert_eq!(
        formkit(&["cpf", "--punctuated", "111.444.777-35"]).status.code(),
        Some(0)
    );
    assert_eq!(formkit(&["cnpj", "11222333000181"]).status.code(), Some(0));
    assert_eq!(formkit(&["cnpj", "11111111111111"]).status.code(), Some(1));

    let out = formkit(&["tax-id", "11222333000181"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("CNPJ"));
    assert_eq!(formkit(&["tax-id", "123"]).status.code(), Some(1));
}

#[test]
fn check_digits_completes_base() {
    let out = formkit(&["check-digits", "111444777"]);
    assert_eq!(stdout(&out), "11144477735");
    let out = formkit(&["check-digits", "112223330001"]);
    assert_eq!(stdout(&out), "11222333000181");
    assert_eq!(formkit(&["check-digits", "1234"]).status.code(), Some(2));
}

#[test]
fn interval_respects_policy() {
    let out = formkit(&["interval", "7:30", "11:30"]);
    assert_eq!(stdout(&out), "04:00");

    assert_eq!(formkit(&["interval", "22:00", "01:00"]).status.code(), Some(2));
    let out = formkit(&["interval", "--wrap", "22:00", "01:00"]);
    assert_eq!(stdout(&out), "03:00");
}

#[test]
fn config_file_switches_policy() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("formkit.yaml");
    fs::write(&config, "interval_policy: wrap_midnight\n").unwrap();

    let out = formkit(&["--config", config.to_str().unwrap(), "interval", "22:00", "01:00"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "03:00");

    let missing = dir.path().join("absent.yaml");
    let out = formkit(&["--config", missing.to_str().unwrap(), "date", "01/01/2000"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn config_file_switches_leap_rule() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("formkit.yaml");
    fs::write(&config, "leap_year_rule: gregorian\n").unwrap();
    let config = config.to_str().unwrap();

    assert_eq!(formkit(&["date", "29/02/1900"]).status.code(), Some(0));
    assert_eq!(
        formkit(&["--config", config, "date", "29/02/1900"]).status.code(),
        Some(1)
    );
    assert_eq!(
        formkit(&["--config", config, "date", "29/02/2000"]).status.code(),
        Some(0)
    );

    let out = formkit(&["date-gt", "29/02/1900", "28/02/1900"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "true");
    let out = formkit(&["--config", config, "date-gt", "29/02/1900", "28/02/1900"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).contains("first date"));

    let batch = dir.path().join("checks.json");
    fs::write(
        &batch,
        r#"[{"check": "date_greater_than", "args": ["01/03/1900", "29/02/1900"]}]"#,
    )
    .unwrap();
    let out = formkit(&["--config", config, "batch", batch.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let outcomes: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert!(outcomes[0]["error"]
        .as_str()
        .unwrap()
        .contains("second date"));
}

#[test]
fn merge_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    fs::write(&a, r#"{"name": "Ana", "city": "Salvador"}"#).unwrap();
    fs::write(&b, r#"{"city": "Recife"}"#).unwrap();

    let out = formkit(&["merge", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(0));
    let merged: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(merged, serde_json::json!({"name": "Ana", "city": "Recife"}));

    fs::write(&b, "[1, 2]").unwrap();
    let out = formkit(&["merge", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn batch_reports_each_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checks.yaml");
    fs::write(
        &path,
        "- check: cpf\n  args: [\"11144477735\"]\n- check: date\n  args: [42]\n",
    )
    .unwrap();

    let out = formkit(&["batch", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let outcomes: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(outcomes[0], serde_json::json!({"check": "cpf", "result": true}));
    assert_eq!(outcomes[1]["check"], "date");
    assert!(outcomes[1]["error"].as_str().unwrap().contains("must be a string"));
}
