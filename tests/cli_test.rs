//! Compiled-binary CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;

/// A command with every discovery hint scrubbed from its environment.
fn scrubbed_command() -> Command {
    let mut cmd = Command::cargo_bin("jdk-scout").unwrap();
    cmd.env_remove("JDK_SCOUT_JDK")
        .env_remove("JDK_SCOUT_PROBE_TIMEOUT")
        .env_remove("JAVA_HOME")
        .env("PATH", "/usr/bin");
    cmd
}

#[test]
fn empty_environment_succeeds_with_empty_json_document() {
    scrubbed_command()
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"runtimes\": []"))
        .stdout(predicate::str::contains("\"errors\": []"));
}

#[test]
fn empty_environment_renders_zero_summary() {
    scrubbed_command()
        .assert()
        .success()
        .stdout(predicate::str::contains("0 identified, 0 broken (0 candidates)"));
}

#[test]
fn quiet_flag_prints_only_the_summary_line() {
    let output = scrubbed_command().arg("--quiet").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("identified"));
}

#[test]
fn invalid_probe_timeout_env_is_rejected() {
    scrubbed_command()
        .env("JDK_SCOUT_PROBE_TIMEOUT", "not-a-number")
        .assert()
        .failure();
}

#[cfg(unix)]
#[test]
fn fake_runtime_shows_up_in_json_inventory() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::TempDir::new().unwrap();
    let root = temp.path().join("jdk17");
    let bin = root.join("bin");
    fs::create_dir_all(&bin).unwrap();
    let launcher = bin.join("java");
    fs::write(
        &launcher,
        "#!/bin/sh\necho '{\"home\":\"/probed/jdk17\",\"version\":\"17.0.99\"}'\n",
    )
    .unwrap();
    fs::set_permissions(&launcher, fs::Permissions::from_mode(0o755)).unwrap();

    scrubbed_command()
        .env("JAVA_HOME", &root)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"))
        .stdout(predicate::str::contains("17.0.99"))
        .stdout(predicate::str::contains("/probed/jdk17"));
}

#[cfg(unix)]
#[test]
fn launcherless_home_is_reported_broken_but_run_succeeds() {
    let temp = tempfile::TempDir::new().unwrap();
    let root = temp.path().join("jdk-missing");
    std::fs::create_dir_all(&root).unwrap();

    scrubbed_command()
        .env("JAVA_HOME", &root)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": false"))
        .stdout(predicate::str::contains("no java launcher"));
}
