//! End-to-end: run the plugin binaries as the watchtower would.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const IN_FLIGHT_BIN: &str = env!("CARGO_BIN_EXE_max-value-in-flight");
const PER_DAY_BIN: &str = env!("CARGO_BIN_EXE_max-value-per-day");

fn write_config(dir: &Path) -> std::path::PathBuf {
    let cfg = format!(
        "version: 1\nin_flight:\n  datadir: \"{}\"\n  max_value: 1000000000\nper_window:\n  datadir: \"{}\"\n  max_value: 5000000000\n",
        dir.join("flight").display(),
        dir.join("day").display(),
    );
    let path = dir.join("wtpolicy.yaml");
    fs::write(&path, cfg).unwrap();
    path
}

fn invoke(bin: &str, config: &Path, stdin: &str) -> Output {
    let mut child = Command::new(bin)
        .env("WTPOLICY_CONFIG", config)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The plugin may exit before reading (bad config), so a broken pipe is fine.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

#[test]
fn in_flight_binary_scenario() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = write_config(tmp.path());

    let req1 = r#"{"block_height":1,"block_info":{"new_attempts":[{"deposit_outpoint":"A","value":600000000}],"successful_attempts":[],"revaulted_attempts":[]}}"#;
    let out = invoke(IN_FLIGHT_BIN, &cfg, &format!("{req1}\n"));
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), r#"{"revault":[]}"#);

    let req2 = r#"{"block_height":2,"block_info":{"new_attempts":[{"deposit_outpoint":"B","value":500000000}],"successful_attempts":[],"revaulted_attempts":[]}}"#;
    let out = invoke(IN_FLIGHT_BIN, &cfg, &format!("{req2}\n"));
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), r#"{"revault":["A","B"]}"#);

    let stored = fs::read_to_string(tmp.path().join("flight").join("datastore.json")).unwrap();
    assert_eq!(stored, r#"{"in_flight":{"A":600000000,"B":500000000}}"#);
}

#[test]
fn per_day_binary_scenario() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = write_config(tmp.path());
    fs::create_dir_all(tmp.path().join("day")).unwrap();
    fs::write(
        tmp.path().join("day").join("datastore.json"),
        r#"{"counter":4800000000,"block_height":100}"#,
    )
    .unwrap();

    let req = r#"{"block_height":120,"block_info":{"new_attempts":[{"deposit_outpoint":"C","value":500000000},{"deposit_outpoint":"D","value":100000000}],"successful_attempts":[],"revaulted_attempts":[]}}"#;
    let out = invoke(PER_DAY_BIN, &cfg, &format!("{req}\n"));
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), r#"{"revault":["C"]}"#);

    let stored = fs::read_to_string(tmp.path().join("day").join("datastore.json")).unwrap();
    assert_eq!(stored, r#"{"counter":4900000000,"block_height":100}"#);
}

#[test]
fn truncated_request_fails_without_response() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = write_config(tmp.path());

    let out = invoke(IN_FLIGHT_BIN, &cfg, r#"{"block_height":1,"block_info":"#);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn corrupt_state_fails_without_response() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = write_config(tmp.path());
    fs::create_dir_all(tmp.path().join("day")).unwrap();
    fs::write(tmp.path().join("day").join("datastore.json"), "{\"counter\":").unwrap();

    let req = r#"{"block_height":1,"block_info":{"new_attempts":[],"successful_attempts":[],"revaulted_attempts":[]}}"#;
    let out = invoke(PER_DAY_BIN, &cfg, &format!("{req}\n"));
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stdout.is_empty());
}

#[test]
fn bad_config_fails_without_response() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = tmp.path().join("wtpolicy.yaml");
    fs::write(&cfg, "version: 1\nin_flight:\n  max_value: 0\n").unwrap();

    let req = r#"{"block_height":1,"block_info":{"new_attempts":[],"successful_attempts":[],"revaulted_attempts":[]}}"#;
    let out = invoke(IN_FLIGHT_BIN, &cfg, &format!("{req}\n"));
    assert_eq!(out.status.code(), Some(5));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_state_file_fails_without_response() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = write_config(tmp.path());
    fs::create_dir_all(tmp.path().join("day")).unwrap();

    let req = r#"{"block_height":1,"block_info":{"new_attempts":[],"successful_attempts":[],"revaulted_attempts":[]}}"#;
    let out = invoke(PER_DAY_BIN, &cfg, &format!("{req}\n"));
    assert_eq!(out.status.code(), Some(3));
    assert!(out.stdout.is_empty());
    assert!(!tmp.path().join("day").join("datastore.json").exists());
}
