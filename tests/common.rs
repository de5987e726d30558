#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's configuration.
pub fn bk() -> Command {
    let mut cmd = cargo_bin_cmd!("bakdag");
    cmd.env(bakdag::config::CONFIG_DIR_ENV, config_dir());
    cmd.env("NO_COLOR", "1");
    cmd
}

fn config_dir() -> PathBuf {
    let mut path = env::temp_dir();
    path.push("bakdag_test_config");
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bakdag.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB, start a bakdag and check in an IPA and a custom 2-unit drink.
pub fn init_db_with_session(db_path: &str) {
    bk().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    bk().args([
        "--db", db_path, "drinks", "--add", "--name", "Dubbel", "--units", "2",
    ])
    .assert()
    .success();

    bk().args(["--db", db_path, "start"]).assert().success();

    bk().args(["--db", db_path, "checkin", "IPA", "--notes", "first one"])
        .assert()
        .success();

    bk().args(["--db", db_path, "checkin", "dubbel"])
        .assert()
        .success();
}
