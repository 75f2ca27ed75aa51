mod common;
use assert_fs::prelude::*;
use common::{GENESIS_1_1, osis};
use predicates::str::contains;

#[test]
fn file_name_without_underscore_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("modules/kjv.xml").write_str(&osis(GENESIS_1_1)).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("osis2json")
        .current_dir(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("kjv.xml"));

    dir.child("bibles/kjv.json").assert(predicates::path::missing());
}

#[test]
fn missing_input_dir_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("osis2json")
        .current_dir(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("modules"));
}

#[test]
fn malformed_xml_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("modules/en_bad.xml").write_str("<osis><a></b></osis>").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("osis2json")
        .current_dir(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("en_bad.xml"));
}

#[test]
fn keep_going_converts_good_modules_but_still_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("modules/en_kjv.xml").write_str(&osis(GENESIS_1_1)).unwrap();
    dir.child("modules/kjv.xml").write_str(&osis(GENESIS_1_1)).unwrap();

    let assert = assert_cmd::cargo::cargo_bin_cmd!("osis2json")
        .current_dir(&dir)
        .arg("--keep-going")
        .assert()
        .failure()
        .code(1)
        .stdout(contains("Converted en_kjv.xml"))
        .stderr(contains("1 of 2 modules failed"));

    // Each failure is reported once.
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("must have the form").count(), 1, "{stderr}");

    dir.child("bibles/en_kjv.json").assert(predicates::path::exists());
}

#[test]
fn invalid_books_file_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("modules").create_dir_all().unwrap();
    dir.child("names.json").write_str("[1, 2]").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("osis2json")
        .current_dir(&dir)
        .args(["--books", "names.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("names.json"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("osis2json")
        .arg("--no-such-flag")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn lookup_of_missing_file_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("osis2json")
        .current_dir(&dir)
        .args(["lookup", "bibles/none.json", "Genesis", "1", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("none.json"));
}
