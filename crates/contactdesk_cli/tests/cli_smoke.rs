use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn desk_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("contacts.csv"),
        "display_name,skype_id\nAlice +vip +ops,a1\nBob +ops,b1\nCarol,c1\n",
    )
    .unwrap();
    dir
}

fn contactdesk(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("contactdesk").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn help_lists_the_panels() {
    Command::cargo_bin("contactdesk")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tags"))
        .stdout(predicate::str::contains("matrix"))
        .stdout(predicate::str::contains("shell"));
}

#[test]
fn tags_are_listed_sorted() {
    let dir = desk_dir();
    contactdesk(dir.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 tags\n+ops\n+vip\n"));
}

#[test]
fn filter_any_and_all_differ() {
    let dir = desk_dir();
    contactdesk(dir.path())
        .args(["filter", "vip", "ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#0 Alice +vip +ops"))
        .stdout(predicate::str::contains("Bob").not());

    contactdesk(dir.path())
        .args(["filter", "vip", "ops", "--mode", "any"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Bob +ops"))
        .stdout(predicate::str::contains("Carol").not());
}

#[test]
fn missing_contact_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    contactdesk(dir.path())
        .arg("tags")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load contacts"));
}

#[test]
fn saved_list_round_trip_through_the_file() {
    let dir = desk_dir();
    contactdesk(dir.path())
        .args(["lists", "save", "Team", "#0", "#2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved list 'Team' with 2 contacts."));

    let json = fs::read_to_string(dir.path().join("saved_lists.json")).unwrap();
    let lists: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(lists["Team"], serde_json::json!(["Alice +vip +ops", "Carol"]));

    contactdesk(dir.path())
        .args(["lists", "show", "Team"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Carol"));
}

#[test]
fn rejected_actions_exit_with_two() {
    let dir = desk_dir();
    contactdesk(dir.path())
        .args(["lists", "delete", "Ghost"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Ghost"));

    contactdesk(dir.path())
        .args(["lists", "save", "Team", "#9"])
        .assert()
        .code(2);
    assert!(!dir.path().join("saved_lists.json").exists());
}

#[test]
fn missing_reference_files_do_not_fail_the_run() {
    let dir = desk_dir();
    contactdesk(dir.path())
        .arg("matrix")
        .assert()
        .success()
        .stderr(predicate::str::contains("Matrix load failed"));

    contactdesk(dir.path())
        .arg("doc")
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not load document"));
}

#[test]
fn shell_keeps_tags_stale_until_reload() {
    let dir = desk_dir();
    contactdesk(dir.path())
        .arg("shell")
        .write_stdin("contacts add \"Dave +night\"\ntags\nreload\ntags\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("2 tags (reload to include recently added contacts)"))
        .stdout(predicate::str::contains("3 tags\n+night\n+ops\n+vip\n"));

    let csv = fs::read_to_string(dir.path().join("contacts.csv")).unwrap();
    assert!(csv.contains("Dave +night"));
}

#[test]
fn shell_accepts_row_references() {
    let dir = desk_dir();
    contactdesk(dir.path())
        .arg("shell")
        .write_stdin("lists save Team #1 Carol\nlists show Team\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved list 'Team' with 2 contacts."))
        .stdout(predicate::str::contains("Bob +ops\nCarol\n"));
}

#[test]
fn version_reports_the_core_version() {
    Command::cargo_bin("contactdesk")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(contactdesk_core::core_version()));
}
