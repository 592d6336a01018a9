//! Integration tests for the `tt` binary.
//!
//! These tests exercise the document lifecycle end to end through the CLI:
//! create, edit, render, export, and the error paths a user can hit. No
//! network is involved; server commands are covered in store_integration.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `tt` command hermetically scoped to a temp home and document.
fn tt(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tt").unwrap();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env_remove("TAGTREE_CONFIG")
        .env_remove("TAGTREE_SERVER")
        .env_remove("XDG_CONFIG_HOME")
        .args(["-f", "tree.json"]);
    cmd
}

#[test]
fn new_creates_document() {
    let temp = TempDir::new().unwrap();

    tt(&temp)
        .args(["new"])
        .assert()
        .success()
        .stdout(predicate::str::contains("empty root 'root'"));

    assert!(temp.path().join("tree.json").exists());
}

#[test]
fn new_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();
    tt(&temp)
        .args(["new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    tt(&temp).args(["new", "--force"]).assert().success();
}

#[test]
fn edit_commands_fail_without_document() {
    let temp = TempDir::new().unwrap();

    tt(&temp)
        .args(["show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Run 'tt new'"));
}

#[test]
fn seed_edit_collapse_scenario() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();

    tt(&temp)
        .args(["add", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added a child under '.'"));

    tt(&temp)
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"New Child\""))
        .stdout(predicate::str::contains("\"data\": \"Data\""));

    tt(&temp).args(["data", "0", "hello"]).assert().success();

    tt(&temp)
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"data\": \"hello\""));

    // Deleting the last child collapses the root to a leaf
    tt(&temp)
        .args(["delete", ".", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("collapsed to a leaf"));

    let expected = "{\n  \"name\": \"root\",\n  \"data\": \"Data\"\n}\n";
    tt(&temp)
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[test]
fn empty_root_exports_name_only() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();

    let expected = "{\n  \"name\": \"root\"\n}\n";
    tt(&temp)
        .args(["export"])
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

#[test]
fn add_converts_leaf_and_discards_payload() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();
    tt(&temp).args(["add", "."]).assert().success();
    tt(&temp).args(["data", "0", "will be discarded"]).assert().success();

    tt(&temp)
        .args(["add", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted '0' to a parent"));

    let out = tt(&temp).args(["export"]).assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains("will be discarded"));
    assert!(stdout.contains("\"name\": \"New Child\""));
}

#[test]
fn rename_trims_and_falls_back() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();
    tt(&temp).args(["add", "."]).assert().success();

    tt(&temp)
        .args(["rename", "0", " Foo "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed '0' to 'Foo'"));

    tt(&temp)
        .args(["rename", "0", "   "])
        .assert()
        .success()
        .stderr(predicate::str::contains("coerced to 'Unnamed'"));

    tt(&temp)
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 Unnamed"));
}

#[test]
fn data_on_parent_is_rejected() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();
    tt(&temp).args(["add", "."]).assert().success();

    tt(&temp)
        .args(["data", ".", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a leaf"));
}

#[test]
fn delete_rejects_bad_index_and_leaf_target() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();
    tt(&temp).args(["add", "."]).assert().success();

    tt(&temp)
        .args(["delete", ".", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    tt(&temp)
        .args(["delete", "0", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a parent"));
}

#[test]
fn invalid_path_is_reported() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();

    tt(&temp)
        .args(["rename", "0.x", "name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid path '0.x'"));

    tt(&temp)
        .args(["rename", "5", "name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not resolve"));
}

#[test]
fn replace_splices_and_validates() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();
    tt(&temp).args(["add", "."]).assert().success();

    tt(&temp)
        .args(["replace", "0", "--json", r#"{"name":"intro","data":"hi"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced subtree at '0'"));

    tt(&temp)
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 intro = \"hi\""));

    // A node with both children and data violates leaf-xor-children
    tt(&temp)
        .args([
            "replace",
            "0",
            "--json",
            r#"{"name":"bad","children":[],"data":"x"}"#,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed node"));
}

#[test]
fn show_renders_paths() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();
    tt(&temp).args(["add", "."]).assert().success();
    tt(&temp).args(["add", "0"]).assert().success();

    tt(&temp)
        .args(["show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(". root"))
        .stdout(predicate::str::contains("0.0 New Child = \"Data\""));

    // Depth limit elides the grandchild
    tt(&temp)
        .args(["show", "--depth", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("…"));
}

#[test]
fn status_local_reports_unsaved() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();

    tt(&temp)
        .args(["status", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(unsaved)"))
        .stdout(predicate::str::contains("Fingerprint:"));
}

#[test]
fn export_is_deterministic() {
    let temp = TempDir::new().unwrap();

    tt(&temp).args(["new"]).assert().success();
    tt(&temp).args(["add", "."]).assert().success();
    tt(&temp).args(["data", "0", ""]).assert().success();

    let first = tt(&temp).args(["export"]).assert().success();
    let second = tt(&temp).args(["export"]).assert().success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);

    // Empty-string payload survives export
    let stdout = String::from_utf8(first.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("\"data\": \"\""));
}

#[test]
fn quiet_suppresses_success_output() {
    let temp = TempDir::new().unwrap();

    tt(&temp)
        .args(["-q", "new"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn completion_generates_script() {
    let temp = TempDir::new().unwrap();

    tt(&temp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tt"));
}
