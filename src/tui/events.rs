use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::ScreenKind;

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    // Composer
    Insert(char),
    Newline,
    DeleteChar,
    Save,
    Cancel,
    // List
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Open,
    NewEntry,
    // Detail
    Back,
    ScrollUp,
    ScrollDown,
    CopyToClipboard,
    None,
}

/// Poll for keyboard events and convert to actions for the given screen
pub fn poll_event(timeout: Duration, screen: ScreenKind) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(key_to_action(key, screen));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent, screen: ScreenKind) -> Action {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return Action::Quit;
    }

    match screen {
        ScreenKind::Loading => Action::None,
        ScreenKind::Entry => entry_action(key),
        ScreenKind::List => list_action(key),
        ScreenKind::Detail => detail_action(key),
    }
}

fn entry_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Save,
        (KeyCode::Esc, _) => Action::Cancel,
        (KeyCode::Enter, _) => Action::Newline,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Tab, _) => Action::Insert('\t'),
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Insert(c)
        }
        _ => Action::None,
    }
}

fn list_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => Action::Quit,

        // Navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,

        (KeyCode::Enter, _) => Action::Open,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NewEntry,
        _ => Action::None,
    }
}

fn detail_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) | (KeyCode::Backspace, _) | (KeyCode::Left, _) => Action::Back,
        (KeyCode::Char('b'), KeyModifiers::NONE) => Action::Back,
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyToClipboard,
        _ => Action::None,
    }
}
