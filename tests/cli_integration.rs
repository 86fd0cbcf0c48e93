//! Integration tests for the opensem binary.
//!
//! These tests exercise the full CLI: argument parsing, output, and exit
//! codes against temporary workspaces.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Get a command for running opensem in `root`.
fn opensem(root: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("opensem").unwrap();
    cmd.env_remove("OPENSEM_ROOT")
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(root.path());
    cmd
}

fn new_project(root: &TempDir, name: &str) {
    opensem(root).args(["new", name]).assert().success();
}

#[test]
fn version_flag_works() {
    Command::cargo_bin("opensem")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("opensem"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    Command::cargo_bin("opensem")
        .unwrap()
        .assert()
        .code(2);
}

#[test]
fn add_data_without_files_is_usage_error() {
    let root = TempDir::new().unwrap();
    opensem(&root).arg("add-data").assert().code(2);
}

#[test]
fn root_from_environment() {
    let root = TempDir::new().unwrap();
    Command::cargo_bin("opensem")
        .unwrap()
        .env("OPENSEM_ROOT", root.path())
        .args(["new", "envroot"])
        .assert()
        .success();
    root.child("data/envroot/raw").assert(predicate::path::is_dir());
}

#[test]
fn init_no_env_creates_directories() {
    let root = TempDir::new().unwrap();
    opensem(&root)
        .args(["init", "--no-env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized OpenSEM workspace."));
    for dir in ["data", "models", "configs", "scripts", "src"] {
        root.child(dir).assert(predicate::path::is_dir());
    }
}

#[test]
fn init_without_manager_fails() {
    let root = TempDir::new().unwrap();
    let empty_path = TempDir::new().unwrap();
    opensem(&root)
        .env("PATH", empty_path.path())
        .arg("init")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not installed or not in PATH"));
    root.child("data").assert(predicate::path::is_dir());
}

#[test]
fn init_reports_settings_file() {
    let root = TempDir::new().unwrap();
    root.child("opensem.toml")
        .write_str("[environment]\nmanager = \"no-such-env-manager\"\n")
        .unwrap();

    opensem(&root)
        .arg("init")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Using settings from"))
        .stderr(predicate::str::contains("'no-such-env-manager' is not installed"));
}

#[test]
fn new_sets_current_and_writes_configs() {
    let root = TempDir::new().unwrap();
    opensem(&root)
        .args(["new", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created new SEM project: demo"));

    root.child(".openssme_project").assert("demo");
    root.child("configs/demo/data_config.yaml")
        .assert(predicate::str::contains("forge_class: \"opensem.forge.TextForge\""));
    root.child("configs/demo/train_config.yaml")
        .assert("# train_config.yaml for demo\n");
    root.child("models/demo/adapters")
        .assert(predicate::path::is_dir());

    opensem(&root)
        .arg("current")
        .assert()
        .success()
        .stdout("demo\n");
}

#[test]
fn invalid_project_name_fails() {
    let root = TempDir::new().unwrap();
    opensem(&root)
        .args(["new", "../oops"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid project name"));
}

#[test]
fn status_output() {
    let root = TempDir::new().unwrap();
    new_project(&root, "demo");
    std::fs::remove_dir(root.child("data/demo/golden").path()).unwrap();

    opensem(&root)
        .args(["status", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status for SEM project: demo"))
        .stdout(predicate::str::contains("golden: Missing"))
        .stdout(predicate::str::contains("models: Exists"));
}

#[test]
fn status_json() {
    let root = TempDir::new().unwrap();
    new_project(&root, "demo");

    let output = opensem(&root)
        .args(["status", "demo", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["raw"], true);
    assert_eq!(value["configs"], true);
}

#[test]
fn status_of_missing_project_fails() {
    let root = TempDir::new().unwrap();
    opensem(&root)
        .args(["status", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn list_projects_text_and_json() {
    let root = TempDir::new().unwrap();
    opensem(&root)
        .arg("list-projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data directory found."));

    new_project(&root, "beta");
    new_project(&root, "alpha");

    opensem(&root)
        .arg("list-projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("- alpha (current)\n- beta"));

    let output = opensem(&root)
        .args(["list-projects", "--json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({"alpha": true, "beta": true}));
}

#[test]
fn add_data_reports_missing_and_exits_nonzero() {
    let root = TempDir::new().unwrap();
    new_project(&root, "demo");
    let good = root.child("inbox/good.txt");
    good.write_str("hello").unwrap();

    opensem(&root)
        .arg("add-data")
        .arg(root.child("inbox/missing.txt").path())
        .arg(good.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File or folder not found"))
        .stderr(predicate::str::contains("1 of 2 input(s) not found"));

    root.child("data/demo/raw/good.txt").assert("hello");
}

#[test]
fn add_data_same_file_is_reported_not_truncated() {
    let root = TempDir::new().unwrap();
    new_project(&root, "demo");
    let inside = root.child("data/demo/raw/a.txt");
    inside.write_str("precious").unwrap();

    opensem(&root)
        .arg("add-data")
        .arg(inside.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already in the raw data folder"))
        .stderr(predicate::str::contains("1 file(s) could not be copied"));

    inside.assert("precious");
}

#[test]
fn add_data_without_project_fails() {
    let root = TempDir::new().unwrap();
    let file = root.child("a.txt");
    file.write_str("a").unwrap();

    opensem(&root)
        .arg("add-data")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "No project specified and no current project set.",
        ));
}

#[test]
fn run_forge_default_pipeline() {
    let root = TempDir::new().unwrap();
    new_project(&root, "demo");
    root.child("data/demo/raw/a.txt").write_str("alpha").unwrap();

    opensem(&root)
        .arg("run-forge")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running Data Forge for project: demo"))
        .stdout(predicate::str::contains("produced 1 record(s)"));

    root.child("data/demo/processed/forged.jsonl")
        .assert(predicate::str::contains("\"source\":\"a.txt\""));
}

#[test]
fn run_forge_unknown_class_fails() {
    let root = TempDir::new().unwrap();
    new_project(&root, "demo");
    root.child("configs/demo/data_config.yaml")
        .write_str("forge_class: opensem.forge.Nope\n")
        .unwrap();

    opensem(&root)
        .args(["run-forge", "--project", "demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("forge class 'Nope' not found"));
}

#[test]
fn run_forge_missing_config_warns() {
    let root = TempDir::new().unwrap();
    new_project(&root, "demo");
    std::fs::remove_file(root.child("configs/demo/data_config.yaml").path()).unwrap();

    opensem(&root)
        .arg("run-forge")
        .assert()
        .success()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn delete_confirmed_with_y() {
    let root = TempDir::new().unwrap();
    new_project(&root, "demo");

    opensem(&root)
        .args(["delete", "demo"])
        .write_stdin(" Y \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current project 'demo' removed from context."));

    root.child("data/demo").assert(predicate::path::missing());
    root.child("models/demo").assert(predicate::path::missing());
    root.child("configs/demo").assert(predicate::path::missing());
    root.child(".openssme_project").assert(predicate::path::missing());

    opensem(&root)
        .arg("current")
        .assert()
        .success()
        .stdout("none set\n");
}

#[test]
fn delete_declined_changes_nothing() {
    let root = TempDir::new().unwrap();
    new_project(&root, "demo");

    opensem(&root)
        .args(["delete", "demo"])
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));

    root.child("data/demo").assert(predicate::path::is_dir());
    root.child(".openssme_project").assert("demo");
}

#[test]
fn delete_missing_project() {
    let root = TempDir::new().unwrap();
    opensem(&root)
        .args(["delete", "ghost", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No directories found for project 'ghost'."));
}

#[test]
fn delete_non_interactive_requires_yes() {
    let root = TempDir::new().unwrap();
    new_project(&root, "demo");

    opensem(&root)
        .args(["--no-interactive", "delete", "demo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--yes"));
    root.child("data/demo").assert(predicate::path::is_dir());
}

#[test]
fn quiet_suppresses_output() {
    let root = TempDir::new().unwrap();
    opensem(&root)
        .args(["-q", "new", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn completion_generates_script() {
    let root = TempDir::new().unwrap();
    opensem(&root)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("opensem"));
}
