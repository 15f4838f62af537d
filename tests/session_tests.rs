mod common;
use common::{run_session, temp_config, wtl};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_blur_on_last_row_appends() {
    let (stdout, _) = run_session("session_blur", "blur 0\nshow\n");

    assert!(stdout.contains("Row 1 added at 9:30 AM"));
    assert!(stdout.contains("2 rows, 9:00 AM → 10:00 AM"));
}

#[test]
fn test_set_does_not_append_but_edit_does() {
    let (stdout, _) = run_session("session_set_edit", "set 0 duration 45\nshow\n");
    assert!(stdout.contains("Row 0: 9:00 AM | (no event) | 45 min"));
    assert!(stdout.contains("1 rows, 9:00 AM → 9:45 AM"));

    let (stdout, _) = run_session("session_edit", "edit 0 duration 45\nshow\n");
    assert!(stdout.contains("Row 1 added at 9:45 AM"));
    assert!(stdout.contains("2 rows"));
}

#[test]
fn test_editing_location_never_appends() {
    let (stdout, _) = run_session("session_location", "edit 0 location \"St. Mary's\"\nshow\n");
    assert!(stdout.contains("St. Mary's"));
    assert!(!stdout.contains("added at"));
    assert!(stdout.contains("1 rows"));
}

#[test]
fn test_drop_block_on_row() {
    let (stdout, _) = run_session(
        "session_drop",
        "drop \"Ceremony: Average::30\" row-0\ndrop \"Reception: Dinner::30\" row-1\nshow\n",
    );

    assert!(stdout.contains("Row 0: 9:00 AM | Ceremony: Average | 30 min"));
    assert!(stdout.contains("Row 1: 9:30 AM | Reception: Dinner | 30 min"));
    assert!(stdout.contains("3 rows, 9:00 AM → 10:30 AM"));
}

#[test]
fn test_drop_outside_rows_warns() {
    let (stdout, _) = run_session("session_drop_outside", "drop \"Ceremony: Average::30\" sidebar\n");
    assert!(stdout.contains("nothing dropped"));
}

#[test]
fn test_time_edit_rechains_later_rows() {
    let script = "place 21 0\nplace 27 1\nset 0 hour 2\nset 0 period PM\nshow\n";
    let (stdout, _) = run_session("session_time_edit", script);

    assert!(stdout.contains("Row 0: 2:00 PM | Ceremony: Average | 30 min"));
    // Grand Entrances (10 min) follows the ceremony
    assert!(stdout.contains("2:30 PM"));
    assert!(stdout.contains("2:40 PM"));
}

#[test]
fn test_delete_rows() {
    let script = "blur 0\nedit 1 duration 15\ndelete 1\nshow\n";
    let (stdout, _) = run_session("session_delete", script);

    assert!(stdout.contains("Row 1 deleted (2 rows left)"));
    assert!(stdout.contains("2 rows, 9:00 AM → 10:00 AM"));
}

#[test]
fn test_errors_do_not_end_the_session() {
    let script = "delete 0\nset 4 event Dinner\nset 0 duration soon\nbogus\nset 0 event Dinner\nshow\n";
    let (stdout, stderr) = run_session("session_errors", script);

    assert!(stderr.contains("Cannot delete the only row"));
    assert!(stderr.contains("Row 4 does not exist"));
    assert!(stderr.contains("Invalid number: 'soon'"));
    assert!(stderr.contains("bogus"));
    assert!(stdout.contains("Row 0: 9:00 AM | Dinner | 30 min"));
}

#[test]
fn test_negative_minute_is_accepted_as_typed() {
    let (stdout, _) = run_session("session_negative", "set 0 minute -5\n");
    assert!(stdout.contains("Row 0: 8:55 AM"));
}

#[test]
fn test_huge_numbers_are_reported_and_session_continues() {
    let script = "set 0 duration 9223372036854775807\nblur 0\nset 1 minute 9223372036854775807\nshow\n";
    let (stdout, stderr) = run_session("session_huge", script);

    assert!(stderr.contains("Invalid number: '9223372036854775807'"));
    assert!(stdout.contains("Row 1 added at 9:30 AM"));
    assert!(stdout.contains("2 rows, 9:00 AM → 10:00 AM"));
}

#[test]
fn test_duration_hint_warning() {
    let (stdout, _) = run_session("session_hint", "set 0 duration 7\nheader date tomorrow\n");
    assert!(stdout.contains("not a multiple of 5"));
    assert!(stdout.contains("not in MM/DD/YYYY format"));
}

#[test]
fn test_quit_stops_reading() {
    let (stdout, _) = run_session("session_quit", "quit\nblur 0\n");
    assert!(!stdout.contains("added at"));
    assert!(stdout.contains("Session closed (1 rows discarded)"));
}

#[test]
fn test_log_lists_operations() {
    let (stdout, _) = run_session(
        "session_log",
        "place 21 0\ndelete 1\nheader bride Ann\nlog\n",
    );

    assert!(stdout.contains("drop (row 0)"));
    assert!(stdout.contains("append (row 1)"));
    assert!(stdout.contains("delete (row 1)"));
    assert!(stdout.contains("header"));
    assert!(!stdout.contains("\x1b["));
}

#[test]
fn test_session_from_script_file() {
    let cfg = temp_config("session_script");
    let mut script = std::env::temp_dir();
    script.push("session_script_wtimeline.txt");
    fs::write(&script, "# ceremony first\nplace 21 0\n\nshow\n").unwrap();

    wtl()
        .args(["--config", &cfg, "--no-color", "session", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ceremony: Average"))
        .stdout(predicate::str::contains("2 rows"));
}

#[test]
fn test_initial_row_from_config() {
    let cfg = temp_config("session_cfg_initial");
    fs::write(&cfg, "default_duration: 45\ninitial_time: \"08:30\"\n").unwrap();

    wtl()
        .args(["--config", &cfg, "--no-color", "session"])
        .write_stdin("blur 0\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Row 1 added at 9:15 AM"))
        .stdout(predicate::str::contains("45 Minutes"));
}

#[test]
fn test_malformed_config_is_rejected() {
    let cfg = temp_config("session_cfg_bad");
    fs::write(&cfg, "default_duration: [oops\n").unwrap();

    wtl()
        .args(["--config", &cfg, "session"])
        .write_stdin("show\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_oversized_default_duration_is_rejected() {
    let cfg = temp_config("session_cfg_huge");
    fs::write(&cfg, "default_duration: 9223372036854775807\n").unwrap();

    wtl()
        .args(["--config", &cfg, "session"])
        .write_stdin("blur 0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_duration must be between 1 and 1000000"));
}

#[test]
fn test_blocks_command() {
    let cfg = temp_config("blocks_all");
    wtl()
        .args(["--config", &cfg, "--no-color", "blocks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Details: Drone & Venue Shots"))
        .stdout(predicate::str::contains("Evening: Boquette Toss"))
        .stdout(predicate::str::contains("38"));

    wtl()
        .args(["--config", &cfg, "--no-color", "blocks", "--category", "ceremony"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ceremony: Catholic"))
        .stdout(predicate::str::contains("Reception: Dinner").not());

    wtl()
        .args(["--config", &cfg, "blocks", "--category", "brunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn test_config_init_and_print() {
    let cfg = temp_config("config_init");

    wtl()
        .args(["--config", &cfg, "--no-color", "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default configuration"))
        .stdout(predicate::str::contains("export_file: timeline.txt"));

    wtl()
        .args(["--config", &cfg, "--no-color", "config", "--init"])
        .assert()
        .success();
    assert!(fs::read_to_string(&cfg).unwrap().contains("default_duration: 30"));

    wtl()
        .args(["--config", &cfg, "config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    wtl()
        .args(["--config", &cfg, "--no-color", "config", "--init", "--force", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current configuration"));
}
