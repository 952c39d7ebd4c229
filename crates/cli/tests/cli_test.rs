//! End-to-end tests for the react-runner binary

use assert_cmd::Command;
use predicates::prelude::*;
use react_runner_core::command::REACT_SCRIPTS_BIN;
use std::fs;
use tempfile::TempDir;

fn react_runner() -> Command {
    Command::cargo_bin("react-runner").unwrap()
}

fn workspace_with_config(config: serde_json::Value) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".react-runner.json"),
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();
    temp
}

#[test]
fn test_run_dry_run_prints_command() {
    let temp = TempDir::new().unwrap();

    react_runner()
        .args(["run", "src/App.test.js", "renders correctly", "--dry-run", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{REACT_SCRIPTS_BIN} test App.test.js --testNamePattern=\"renders correctly\" --no-cache --watchAll=false",
        )))
        .stdout(predicate::str::contains("Working directory:"));
}

#[test]
fn test_run_dry_run_uses_config_file() {
    let temp = workspace_with_config(serde_json::json!({
        "additionalArguments": "--coverage --silent",
        "environmentVariables": { "CI": "true" }
    }));

    react_runner()
        .args(["run", "App.test.js", "a.b*c", "--dry-run", "--verbose", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"--testNamePattern="a\.b\*c" --no-cache --watchAll=false --coverage --silent"#,
        ))
        .stdout(predicate::str::contains("CI=true"))
        .stdout(predicate::str::contains("Command breakdown"));
}

#[test]
fn test_debug_prints_launch_file() {
    let temp = workspace_with_config(serde_json::json!({
        "additionalArguments": "--foo --bar",
        "environmentVariables": { "NODE_ENV": "test" }
    }));

    let output = react_runner()
        .args(["debug", "/proj/src/App.test.js", "renders correctly", "--root"])
        .arg(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let launch: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let configuration = &launch["configurations"][0];
    assert_eq!(launch["version"], "0.2.0");
    assert_eq!(configuration["name"], "Debug Test");
    assert_eq!(configuration["env"]["NODE_ENV"], "test");
    assert_eq!(
        configuration["args"],
        serde_json::json!([
            "test",
            "App.test.js",
            "--testNamePattern=\"renders correctly\"",
            "--runInBand",
            "--no-cache",
            "--watchAll=false",
            "--foo",
            "--bar"
        ])
    );
}

#[test]
fn test_debug_writes_output_file() {
    let temp = TempDir::new().unwrap();

    react_runner()
        .args(["debug", "App.test.js", "renders", "--output", ".vscode/launch.json", "--root"])
        .arg(temp.path())
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join(".vscode/launch.json")).unwrap();
    assert!(written.contains("\"runtimeExecutable\""));
}

#[test]
fn test_config_reports_source() {
    let temp = workspace_with_config(serde_json::json!({ "additionalArguments": "--ci" }));

    react_runner()
        .args(["config", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".react-runner.json"))
        .stdout(predicate::str::contains("\"additionalArguments\": \"--ci\""));
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".react-runner.json"), "{ nope").unwrap();

    react_runner()
        .args(["run", "App.test.js", "renders", "--dry-run", "--root"])
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_missing_root_fails() {
    react_runner()
        .args(["run", "App.test.js", "renders", "--root", "/definitely/not/here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[cfg(unix)]
#[test]
fn test_run_executes_local_react_scripts() {
    use std::os::unix::fs::PermissionsExt;

    let temp = workspace_with_config(serde_json::json!({
        "environmentVariables": { "GREETING": "hello" }
    }));
    let bin_dir = temp.path().join("node_modules").join(".bin");
    fs::create_dir_all(&bin_dir).unwrap();
    let script = bin_dir.join("react-scripts");
    fs::write(&script, "#!/bin/sh\necho \"ARGS: $@\"\necho \"GREETING=$GREETING\"\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    react_runner()
        .args(["run", "src/App.test.js", "renders correctly", "--root"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ARGS: test App.test.js --testNamePattern=renders correctly --no-cache --watchAll=false",
        ))
        .stdout(predicate::str::contains("GREETING=hello"));
}

#[cfg(unix)]
#[test]
fn test_run_without_react_scripts_exits_with_shell_status() {
    let temp = TempDir::new().unwrap();

    react_runner()
        .args(["run", "App.test.js", "renders", "--root"])
        .arg(temp.path())
        .assert()
        .code(127);
}
