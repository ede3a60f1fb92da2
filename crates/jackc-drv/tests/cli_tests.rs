//! CLI-level tests driving the `jackc` binary end to end.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn jackc_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_jackc"))
}

const EMPTY_CLASS: &str = "class Empty {\n}\n";

const ANSWER_CLASS: &str = "\
class Main {
    function int answer() {
        return 42;
    }
}
";

const BROKEN_CLASS: &str = "\
class Broken {
    function int oops() {
        return 1
    }
}
";

#[test]
fn compiles_a_single_file_to_a_sibling_vm_file() {
    let dir = TempDir::new().expect("tempdir");
    let src = dir.path().join("Main.jack");
    fs::write(&src, ANSWER_CLASS).unwrap();

    Command::new(jackc_bin()).arg(&src).assert().success();

    let vm = fs::read_to_string(dir.path().join("Main.vm")).expect("Main.vm written");
    assert_eq!(vm, "function Main.answer 0\npush constant 42\nreturn");
}

#[test]
fn empty_class_produces_an_empty_vm_file() {
    let dir = TempDir::new().expect("tempdir");
    let src = dir.path().join("Empty.jack");
    fs::write(&src, EMPTY_CLASS).unwrap();

    Command::new(jackc_bin()).arg(&src).assert().success();

    let vm = fs::read_to_string(dir.path().join("Empty.vm")).expect("Empty.vm written");
    assert_eq!(vm, "");
}

#[test]
fn a_syntax_error_fails_and_prints_a_diagnostic_to_stderr() {
    let dir = TempDir::new().expect("tempdir");
    let src = dir.path().join("Broken.jack");
    fs::write(&src, BROKEN_CLASS).unwrap();

    Command::new(jackc_bin())
        .arg(&src)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));

    assert!(!dir.path().join("Broken.vm").exists());
}

#[test]
fn directory_mode_compiles_every_jack_child_non_recursively() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("Main.jack"), ANSWER_CLASS).unwrap();
    fs::write(dir.path().join("Empty.jack"), EMPTY_CLASS).unwrap();
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("Main.jack"), ANSWER_CLASS).unwrap();

    Command::new(jackc_bin()).arg(dir.path()).assert().success();

    assert!(dir.path().join("Main.vm").exists());
    assert!(dir.path().join("Empty.vm").exists());
    assert!(!nested.join("Main.vm").exists());
}

#[test]
fn one_failing_file_does_not_abort_the_rest_of_the_directory() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("Broken.jack"), BROKEN_CLASS).unwrap();
    fs::write(dir.path().join("Main.jack"), ANSWER_CLASS).unwrap();

    Command::new(jackc_bin())
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Broken.jack"));

    assert!(dir.path().join("Main.vm").exists());
    assert!(!dir.path().join("Broken.vm").exists());
}

#[test]
fn quiet_flag_still_prints_failures_to_stderr() {
    let dir = TempDir::new().expect("tempdir");
    let src = dir.path().join("Broken.jack");
    fs::write(&src, BROKEN_CLASS).unwrap();

    Command::new(jackc_bin())
        .arg("--quiet")
        .arg(&src)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
