mod common;
use common::{gr, init_db, init_db_with_data, populate_many_entries, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");
    gr().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_then_show() {
    let db_path = setup_test_db("add_then_show");
    init_db_with_data(&db_path);

    gr().args(["--db", &db_path, "show", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday, September 1, 2025"))
        .stdout(predicate::str::contains("My family"))
        .stdout(predicate::str::contains("and a sunny morning"));
}

#[test]
fn test_add_twice_updates_same_day() {
    let db_path = setup_test_db("add_twice");
    init_db(&db_path);

    gr().args(["--db", &db_path, "add", "-d", "2024-03-10", "first"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved"));

    gr().args(["--db", &db_path, "add", "-d", "2024-03-10", "second"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry updated"));

    gr().args(["--db", &db_path, "show", "2024-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("second"))
        .stdout(predicate::str::contains("first").not());
}

#[test]
fn test_add_rejects_blank_content() {
    let db_path = setup_test_db("add_blank");
    init_db(&db_path);

    gr().args(["--db", &db_path, "add", "-d", "2024-03-10", "   "])
        .assert()
        .failure();
}

#[test]
fn test_add_rejects_impossible_date() {
    let db_path = setup_test_db("add_bad_date");
    init_db(&db_path);

    gr().args(["--db", &db_path, "add", "-d", "2024-02-30", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_show_missing_day() {
    let db_path = setup_test_db("show_missing");
    init_db(&db_path);

    gr().args(["--db", &db_path, "show", "2020-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry"));
}

#[test]
fn test_list_newest_first() {
    let db_path = setup_test_db("list_order");
    init_db_with_data(&db_path);

    let out = gr()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);

    let newer = text.find("September 15, 2025").expect("newer row");
    let older = text.find("September 1, 2025").expect("older row");
    assert!(newer < older);
    assert!(text.contains("2 entries"));
}

#[test]
fn test_list_period_filter() {
    let db_path = setup_test_db("list_period");
    init_db(&db_path);
    populate_many_entries(&db_path, 60);

    gr().args(["--db", &db_path, "list", "--period", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("28 entries"));
}

#[test]
fn test_calendar_marks_days() {
    let db_path = setup_test_db("calendar_marks");
    init_db_with_data(&db_path);

    gr().args(["--db", &db_path, "calendar", "2025-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("September 2025"))
        .stdout(predicate::str::contains("[ 1]"))
        .stdout(predicate::str::contains("[15]"))
        .stdout(predicate::str::contains("2 of 30 days journaled"));
}

#[test]
fn test_del_one_entry() {
    let db_path = setup_test_db("del_one");
    init_db_with_data(&db_path);

    gr().args(["--db", &db_path, "del", "2025-09-01", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    gr().args(["--db", &db_path, "show", "2025-09-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry"));

    gr().args(["--db", &db_path, "del", "2025-09-01", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry"));
}

#[test]
fn test_del_all_entries() {
    let db_path = setup_test_db("del_all");
    init_db_with_data(&db_path);

    gr().args(["--db", &db_path, "del", "--all", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 entries."));

    gr().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn test_del_requires_target() {
    gr().args(["del", "--yes"]).assert().failure();
}

#[test]
fn test_db_check_and_info() {
    let db_path = setup_test_db("db_check_info");
    init_db_with_data(&db_path);

    gr().args(["--db", &db_path, "db", "--check", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("integrity check passed"))
        .stdout(predicate::str::contains("Total entries"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_data(&db_path);

    gr().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add (2025-09-01)"));
}

#[test]
fn test_no_color_output_is_plain() {
    let db_path = setup_test_db("no_color_plain");
    init_db_with_data(&db_path);

    for args in [
        vec!["--db", &db_path, "list"],
        vec!["--db", &db_path, "calendar", "2025-09"],
        vec!["--db", &db_path, "log", "--print"],
        vec!["--db", &db_path, "show", "2025-09-01"],
        vec!["--db", &db_path, "db", "--info"],
    ] {
        gr().args(&args)
            .assert()
            .success()
            .stdout(predicate::str::contains("\x1b[").not());
    }
}
