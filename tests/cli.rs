#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const ONE_RECORD: &str = r#"[{"id":"1","email":"a@x.com","age":30}]"#;

fn recstore_cmd() -> Command {
    Command::new(cargo_bin("recstore"))
}

fn data_file(dir: &TempDir, content: Option<&str>) -> PathBuf {
    let path = dir.path().join("users.json");
    if let Some(content) = content {
        fs::write(&path, content).unwrap();
    }
    path
}

#[test]
fn add_appends_in_order_with_only_newline_output() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, Some(ONE_RECORD));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args([
            "-operation",
            "add",
            "-item",
            r#"{"id":"2","email":"b@x.com","age":25}"#,
        ])
        .assert()
        .success()
        .stdout("\n");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"[{"id":"1","email":"a@x.com","age":30},{"id":"2","email":"b@x.com","age":25}]"#
    );
}

#[test]
fn remove_then_find_by_id() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, Some(ONE_RECORD));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "remove", "-id", "1"])
        .assert()
        .success()
        .stdout("\n");
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "findById", "-id", "1"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn find_by_id_prints_record() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, Some(ONE_RECORD));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "findById", "-id", "1"])
        .assert()
        .success()
        .stdout("{\"id\":\"1\",\"email\":\"a@x.com\",\"age\":30}\n");
}

#[test]
fn list_prints_collection() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, Some(ONE_RECORD));

    recstore_cmd()
        .arg("--fileName")
        .arg(&path)
        .arg("--operation=list")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", ONE_RECORD)));
}

#[test]
fn list_on_new_file_creates_it_empty() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, None);

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "list"])
        .assert()
        .success()
        .stdout("\n");

    assert_eq!(fs::read(&path).unwrap().len(), 0);
}

#[test]
fn duplicate_add_reports_already_exists() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, Some(ONE_RECORD));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args([
            "-operation",
            "add",
            "-item",
            r#"{"id":"1","email":"changed@x.com","age":1}"#,
        ])
        .assert()
        .success()
        .stdout("Item with id 1 already exists\n");

    assert_eq!(fs::read_to_string(&path).unwrap(), ONE_RECORD);
}

#[test]
fn remove_missing_reports_not_found() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, Some(ONE_RECORD));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "remove", "-id", "7"])
        .assert()
        .success()
        .stdout("Item with id 7 not found\n");

    assert_eq!(fs::read_to_string(&path).unwrap(), ONE_RECORD);
}

#[test]
fn unsupported_operation_fails_and_names_it() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, Some(ONE_RECORD));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "bogus"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Operation bogus not allowed!"));

    assert_eq!(fs::read_to_string(&path).unwrap(), ONE_RECORD);
}

#[test]
fn missing_flags_fail() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, Some(ONE_RECORD));

    recstore_cmd()
        .args(["-operation", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("-fileName flag has to be specified"));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("-operation flag has to be specified"));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("-item flag has to be specified"));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "findById"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("-id flag has to be specified"));
}

#[test]
fn corrupt_file_is_a_decode_failure() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, Some("[{\"id\":"));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decode error"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, Some(ONE_RECORD));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "findById", "-id", "9", "-verbose"])
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::contains("loaded records"));
}

#[test]
fn hyphenated_id_is_taken_as_a_value() {
    let temp = TempDir::new().unwrap();
    let path = data_file(&temp, Some(r#"[{"id":"-1","email":"neg@x.com","age":5}]"#));

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "findById", "-id", "-1"])
        .assert()
        .success()
        .stdout("{\"id\":\"-1\",\"email\":\"neg@x.com\",\"age\":5}\n");

    recstore_cmd()
        .arg("-fileName")
        .arg(&path)
        .args(["-operation", "remove", "-id", "-1"])
        .assert()
        .success()
        .stdout("\n");

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}
