#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, with colors off so output can be matched literally.
pub fn gr() -> Command {
    let mut cmd = cargo_bin_cmd!("gratitude");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gratitude.sqlite", name));
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

pub fn init_db(db_path: &str) {
    gr().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    gr().args([
        "--db",
        db_path,
        "add",
        "--date",
        "2025-09-01",
        "My family\nand a sunny morning",
    ])
    .assert()
    .success();

    gr().args([
        "--db",
        db_path,
        "add",
        "--date",
        "2025-09-15",
        "A friend said \"thanks\", twice",
    ])
    .assert()
    .success();
}

/// Populate entries directly through the library store, bypassing the CLI
pub fn populate_many_entries(db_path: &str, n: usize) {
    use gratitude::db::{DbPool, EntryStore};

    let mut pool = DbPool::new(db_path);
    for i in 0..n {
        let day = (i % 28) + 1;
        let month = (i / 28) % 12 + 1;
        let date = format!("2024-{month:02}-{day:02}");
        pool.save_entry(&date, &format!("entry number {i}"))
            .expect("save entry");
    }
}
