//! Smoke tests for the `botutils` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn botutils() -> Command {
    let mut cmd = Command::cargo_bin("botutils").unwrap();
    cmd.env_remove("PORT").env_remove("HOST").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_options() {
    botutils()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--no-docs"));
}

#[test]
fn version_is_reported() {
    botutils()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn print_config_uses_defaults() {
    let output = botutils().arg("--print-config").output().unwrap();
    assert!(output.status.success());
    let cfg: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(cfg["bind_addr"], "0.0.0.0:3000");
    assert_eq!(cfg["enable_docs"], true);
}

#[test]
fn print_config_reads_environment_and_flags() {
    let output = botutils()
        .env("PORT", "8123")
        .args(["--host", "127.0.0.1", "--no-docs", "--print-config"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let cfg: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(cfg["bind_addr"], "127.0.0.1:8123");
    assert_eq!(cfg["enable_docs"], false);
}

#[test]
fn invalid_port_is_rejected() {
    botutils()
        .args(["--port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--port"));
}
