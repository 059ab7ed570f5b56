mod common;

use assert_cmd::Command;
use common::vorbis_file;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("ogginfo").unwrap();
    cmd.env_remove("OGGINFO_VERIFY_CRC")
        .env_remove("OGGINFO_LOG_LEVEL")
        .env_remove("OGGINFO_LOG");
    cmd
}

#[test]
fn no_files_prints_usage() {
    cmd()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("Usage"));
}

#[test]
fn files_are_processed_in_order() {
    let dir = TempDir::new().unwrap();
    let first = vorbis_file(1, 2).write_to(&dir, "first.ogg");
    let second = vorbis_file(2, 0).write_to(&dir, "second.ogg");

    let output = cmd().arg(&first).arg(&second).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let first_at = stdout.find("first.ogg").unwrap();
    let second_at = stdout.find("second.ogg").unwrap();
    assert!(first_at < second_at);
    // Each file starts its own count
    assert_eq!(stdout.matches("New logical stream #1,").count(), 2);
    assert!(stdout.contains("(4 mid-stream packets of 1)"));
    assert!(stdout.contains("(2 mid-stream packets of 2)"));
}

#[test]
fn missing_file_stops_the_run() {
    let dir = TempDir::new().unwrap();
    let good = vorbis_file(1, 1).write_to(&dir, "good.ogg");
    let later = vorbis_file(2, 1).write_to(&dir, "later.ogg");
    let missing = dir.path().join("missing.ogg");

    cmd()
        .arg(&good)
        .arg(&missing)
        .arg(&later)
        .assert()
        .failure()
        .stdout(contains("good.ogg"))
        .stdout(contains("later.ogg").not())
        .stderr(contains("file not found"));
}
