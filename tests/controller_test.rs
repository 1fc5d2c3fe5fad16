/// End-to-end controller flows over real file storage
mod common;

use chrono::DateTime;
use common::{FailingBackend, JournalDirBuilder, three_entry_dir};
use prompt_journal::controller::ScreenKind;
use prompt_journal::{
    DEFAULT_PROMPT, FileBackend, JournalStore, SaveOutcome, Screen, StorageError, ViewController,
};

fn file_controller(dir: &std::path::Path) -> ViewController<FileBackend> {
    let mut controller = ViewController::new(JournalStore::new(FileBackend::new(dir)));
    controller.start();
    controller
}

fn at(ms: i64) -> DateTime<chrono::Utc> {
    DateTime::from_timestamp_millis(ms).unwrap()
}

#[test]
fn test_first_run_starts_composing() {
    let dir = JournalDirBuilder::new().build();
    let controller = file_controller(dir.path());

    assert_eq!(controller.screen().kind(), ScreenKind::Entry);
    assert_eq!(controller.draft(), Some(""));
    assert!(controller.journals().is_empty());
}

#[test]
fn test_existing_journals_start_on_list() {
    let dir = three_entry_dir();
    let controller = file_controller(dir.path());

    assert_eq!(controller.screen(), &Screen::List);
    assert_eq!(controller.journals().len(), 3);
    assert_eq!(controller.cursor(), 0);
}

#[test]
fn test_had_a_good_day_then_blank() {
    let dir = JournalDirBuilder::new().build();
    let mut controller = file_controller(dir.path());

    controller.set_draft("Had a good day");
    let outcome = controller.save_entry_at(at(1_700_000_000_000));
    assert!(matches!(outcome, SaveOutcome::Saved { .. }));
    assert_eq!(controller.screen(), &Screen::List);

    controller.new_entry();
    controller.set_draft("  ");
    assert!(matches!(controller.save_entry_at(at(1_700_000_060_000)), SaveOutcome::Ignored));

    assert_eq!(controller.screen().kind(), ScreenKind::Entry);
    assert_eq!(controller.journals().len(), 1);

    let stored = JournalStore::new(FileBackend::new(dir.path())).load().unwrap();
    assert_eq!(stored.len(), 1);
    let entry = stored.get(0).unwrap();
    assert_eq!(entry.text(), "Had a good day");
    assert_eq!(entry.prompt(), DEFAULT_PROMPT);
    assert_eq!(entry.timestamp(), at(1_700_000_000_000));
}

#[test]
fn test_saved_entries_survive_restart() {
    let dir = JournalDirBuilder::new().build();
    {
        let mut controller = file_controller(dir.path());
        for (i, text) in ["one", "two", "three"].iter().enumerate() {
            if controller.screen() == &Screen::List {
                controller.new_entry();
            }
            for c in text.chars() {
                controller.insert_char(c);
            }
            controller.save_entry_at(at(1_000 * (i as i64 + 1)));
        }
    }

    let controller = file_controller(dir.path());
    assert_eq!(controller.screen(), &Screen::List);
    let texts: Vec<&str> = controller.journals().iter().map(|e| e.text()).collect();
    assert_eq!(texts, ["three", "two", "one"]);
}

#[test]
fn test_select_then_back_keeps_collection() {
    let dir = three_entry_dir();
    let mut controller = file_controller(dir.path());
    let before = controller.journals().clone();

    controller.move_cursor(2);
    assert!(controller.select_current());
    assert_eq!(controller.selected().unwrap().text(), "First day");

    assert!(controller.back());
    assert_eq!(controller.screen(), &Screen::List);
    assert_eq!(controller.journals(), &before);
}

#[test]
fn test_ignored_triggers_leave_state() {
    let dir = three_entry_dir();
    let mut controller = file_controller(dir.path());

    assert!(!controller.back());
    assert!(!controller.cancel());
    assert!(!controller.insert_char('x'));
    assert!(matches!(controller.save_entry(), SaveOutcome::Ignored));
    assert_eq!(controller.screen(), &Screen::List);

    controller.select(0);
    assert!(!controller.new_entry());
    assert!(!controller.select(1));
    assert_eq!(controller.selected().unwrap().text(), "Third day\nfelt rested");
}

#[test]
fn test_corrupt_file_recovers_and_next_save_replaces_it() {
    let dir = JournalDirBuilder::new().with_raw("definitely not json").build();
    let mut controller = file_controller(dir.path());

    assert_eq!(controller.screen().kind(), ScreenKind::Entry);
    assert!(matches!(controller.load_error(), Some(StorageError::Read { .. })));

    controller.set_draft("fresh start");
    assert!(matches!(controller.save_entry(), SaveOutcome::Saved { .. }));

    let stored = JournalStore::new(FileBackend::new(dir.path())).load().unwrap();
    assert_eq!(stored.len(), 1);
}

#[test]
fn test_unavailable_storage_keeps_entry_in_memory() {
    let mut controller = ViewController::new(JournalStore::new(FailingBackend));
    controller.start();
    assert!(controller.load_error().is_some());

    controller.set_draft("kept anyway");
    let outcome = controller.save_entry_at(at(5));

    assert!(matches!(outcome, SaveOutcome::NotPersisted { ref id, .. } if id == "5"));
    assert_eq!(controller.screen(), &Screen::List);
    assert_eq!(controller.journals().get(0).unwrap().text(), "kept anyway");
}

#[test]
fn test_same_millisecond_saves_get_distinct_ids() {
    let dir = JournalDirBuilder::new().build();
    let mut controller = file_controller(dir.path());

    controller.set_draft("a");
    controller.save_entry_at(at(7_000));
    controller.new_entry();
    controller.set_draft("b");
    controller.save_entry_at(at(7_000));

    let stored = JournalStore::new(FileBackend::new(dir.path())).load().unwrap();
    assert_eq!(stored.get(0).unwrap().text(), "b");
    assert_eq!(stored.get(0).unwrap().id(), "7001");
    assert_eq!(stored.get(1).unwrap().id(), "7000");
}
