/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary against a scratch data directory.
mod common;

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use common::{JournalDirBuilder, three_entry_dir};
use predicates::prelude::*;
use prompt_journal::{DataDirLock, FileBackend, STORAGE_KEY};

fn journal_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_prompt-journal"));
    cmd.env_remove("PROMPT_JOURNAL_DIR").env_remove("RUST_LOG").arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_prompt-journal"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prompted journal"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_prompt-journal"));
    cmd.arg("--version").assert().success().stdout(predicate::str::contains("prompt-journal"));
}

#[test]
fn test_cli_stats_empty_directory() {
    let dir = JournalDirBuilder::new().build();

    journal_cmd(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal Statistics"))
        .stdout(predicate::str::contains("Total entries: 0"))
        .stdout(predicate::str::contains("%40journal_app%3Ajournals.json"));
}

#[test]
fn test_cli_stats_with_data() {
    let dir = three_entry_dir();

    journal_cmd(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries: 3"))
        .stdout(predicate::str::contains("Oldest entry: Nov"))
        .stdout(predicate::str::contains("Newest entry: Nov"))
        .stdout(predicate::str::contains("2023"));
}

#[test]
fn test_cli_list_empty() {
    let dir = JournalDirBuilder::new().build();

    journal_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No journals yet. Start writing!"));
}

#[test]
fn test_cli_list_newest_first() {
    let dir = three_entry_dir();

    let output = journal_cmd(dir.path()).arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("1700000300000") && lines[0].ends_with("Third day"));
    assert!(lines[2].starts_with("1700000100000") && lines[2].ends_with("First day"));
}

#[test]
fn test_cli_show_entry() {
    let dir = three_entry_dir();

    journal_cmd(dir.path())
        .args(["show", "1700000300000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("What is something you've been thinking about today?"))
        .stdout(predicate::str::contains("Third day\nfelt rested"));
}

#[test]
fn test_cli_show_missing_entry_fails() {
    let dir = three_entry_dir();

    journal_cmd(dir.path())
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry with id 42"));
}

#[test]
fn test_cli_add_then_list() {
    let dir = JournalDirBuilder::new().build();

    journal_cmd(dir.path())
        .args(["add", "Had a good day"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Saved entry "));

    journal_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Had a good day"));
}

#[test]
fn test_cli_add_blank_fails_without_writing() {
    let builder = JournalDirBuilder::new();
    let journal_file = builder.journal_file();
    let dir = builder.build();

    journal_cmd(dir.path())
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry text is empty"));

    assert!(!journal_file.exists());
}

#[test]
fn test_cli_add_refuses_corrupt_storage() {
    let builder = JournalDirBuilder::new().with_raw("not json");
    let journal_file = builder.journal_file();
    let dir = builder.build();

    journal_cmd(dir.path())
        .args(["add", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing to add"));

    assert_eq!(fs::read_to_string(journal_file).unwrap(), "not json");
}

#[test]
fn test_cli_list_corrupt_storage_fails() {
    let dir = JournalDirBuilder::new().with_raw("{oops").build();

    journal_cmd(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read saved journals"));
}

#[test]
fn test_cli_data_dir_from_environment() {
    let dir = three_entry_dir();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_prompt-journal"));
    cmd.env("PROMPT_JOURNAL_DIR", dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries: 3"));
}

#[test]
fn test_cli_ephemeral_writes_nothing() {
    let dir = JournalDirBuilder::new().build();

    journal_cmd(dir.path())
        .args(["--ephemeral", "add", "gone soon"])
        .assert()
        .success();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cli_add_fails_while_dir_is_locked() {
    let dir = three_entry_dir();
    let journal_file = FileBackend::new(dir.path()).path_for(STORAGE_KEY);
    let before = fs::read_to_string(&journal_file).unwrap();

    let _session = DataDirLock::acquire(dir.path()).unwrap();

    journal_cmd(dir.path())
        .args(["add", "written while the TUI is open"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Another prompt-journal session is using"))
        .stderr(predicate::str::contains("locked by another process"));

    assert_eq!(fs::read_to_string(&journal_file).unwrap(), before);
}

#[test]
fn test_cli_reads_ignore_the_lock() {
    let dir = three_entry_dir();
    let _session = DataDirLock::acquire(dir.path()).unwrap();

    journal_cmd(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Third day"));
}

#[test]
fn test_cli_add_after_lock_released() {
    let dir = JournalDirBuilder::new().build();
    drop(DataDirLock::acquire(dir.path()).unwrap());

    journal_cmd(dir.path()).args(["add", "now it works"]).assert().success();
}
