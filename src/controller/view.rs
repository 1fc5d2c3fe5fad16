//! Screen state machine.
//!
//! [`ViewController`] owns the journal collection, the store it persists
//! through and the current [`Screen`]. Every user action goes through one of
//! its methods, which either performs the transition listed below or leaves
//! the state untouched and returns `false`:
//!
//! | From    | Action                        | To     |
//! |---------|-------------------------------|--------|
//! | Loading | `start`, journals found       | List   |
//! | Loading | `start`, nothing (or failure) | Entry  |
//! | Entry   | `save_entry`, non-blank draft | List   |
//! | Entry   | `cancel`, journals exist      | List   |
//! | List    | `new_entry`                   | Entry  |
//! | List    | `select`                      | Detail |
//! | Detail  | `back`                        | List   |
//!
//! Storage failures never block a transition. A failed load starts from an
//! empty collection; a failed save keeps the new entry in memory and reports
//! [`SaveOutcome::NotPersisted`].

use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};

use super::screen::{Screen, ScreenKind};
use crate::models::{DEFAULT_PROMPT, JournalCollection, JournalEntry};
use crate::store::{JournalStore, KeyValueBackend, StorageError};

/// Upper bound on draft size (1MB), well under what the file backend reads back
const MAX_DRAFT_BYTES: usize = 1024 * 1024;

/// Result of a save request
#[derive(Debug)]
pub enum SaveOutcome {
    /// Not composing, or the draft is blank. Nothing changed.
    Ignored,
    /// Entry created and persisted
    Saved { id: String },
    /// Entry created and shown, but the write failed
    NotPersisted { id: String, error: StorageError },
}

pub struct ViewController<B> {
    store: JournalStore<B>,
    journals: JournalCollection,
    screen: Screen,
    cursor: usize,
    load_error: Option<StorageError>,
}

impl<B: KeyValueBackend> ViewController<B> {
    pub fn new(store: JournalStore<B>) -> Self {
        Self {
            store,
            journals: JournalCollection::new(),
            screen: Screen::Loading,
            cursor: 0,
            load_error: None,
        }
    }

    /// Run the initial load and leave `Loading`. Does nothing once started.
    pub fn start(&mut self) -> &Screen {
        if self.screen != Screen::Loading {
            return &self.screen;
        }

        match self.store.load() {
            Ok(journals) => self.journals = journals,
            Err(e) => {
                warn!(key = e.key(), error = %e.summary(), "could not load journals, starting empty");
                self.journals = JournalCollection::new();
                self.load_error = Some(e);
            }
        }

        self.cursor = 0;
        let next = if self.journals.is_empty() { Screen::compose() } else { Screen::List };
        self.transition(next);
        &self.screen
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn journals(&self) -> &JournalCollection {
        &self.journals
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &JournalStore<B> {
        &self.store
    }

    /// Error from the initial load, if it failed
    pub fn load_error(&self) -> Option<&StorageError> {
        self.load_error.as_ref()
    }

    /// Highlighted row on the list screen
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Draft text while composing
    pub fn draft(&self) -> Option<&str> {
        match &self.screen {
            Screen::Entry { draft } => Some(draft),
            _ => None,
        }
    }

    /// Entry being read on the detail screen
    pub fn selected(&self) -> Option<&JournalEntry> {
        match &self.screen {
            Screen::Detail { entry } => Some(entry),
            _ => None,
        }
    }

    /// Whether a save right now would create an entry
    pub fn can_save(&self) -> bool {
        self.draft().is_some_and(|draft| !draft.trim().is_empty())
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        let Screen::Entry { draft } = &mut self.screen else {
            return false;
        };
        if draft.len() + c.len_utf8() > MAX_DRAFT_BYTES {
            return false;
        }
        draft.push(c);
        true
    }

    pub fn insert_newline(&mut self) -> bool {
        self.insert_char('\n')
    }

    pub fn delete_char(&mut self) -> bool {
        match &mut self.screen {
            Screen::Entry { draft } => draft.pop().is_some(),
            _ => false,
        }
    }

    /// Replace the whole draft (non-interactive callers)
    pub fn set_draft(&mut self, text: &str) -> bool {
        let Screen::Entry { draft } = &mut self.screen else {
            return false;
        };
        if text.len() > MAX_DRAFT_BYTES {
            return false;
        }
        draft.clear();
        draft.push_str(text);
        true
    }

    /// Save the draft as a new entry created now
    pub fn save_entry(&mut self) -> SaveOutcome {
        self.save_entry_at(Utc::now())
    }

    /// Save the draft as a new entry created at `now`.
    ///
    /// The entry goes to the head of the collection, the full collection is
    /// written through the store and the list screen is shown whether or not
    /// the write succeeded.
    pub fn save_entry_at(&mut self, now: DateTime<Utc>) -> SaveOutcome {
        let text = match &self.screen {
            Screen::Entry { draft } if !draft.trim().is_empty() => draft.clone(),
            _ => return SaveOutcome::Ignored,
        };

        let id = self.journals.next_id(now);
        self.journals.prepend(JournalEntry::new(id.clone(), DEFAULT_PROMPT, text, now));
        let persisted = self.store.save(&self.journals);

        self.cursor = 0;
        self.transition(Screen::List);

        match persisted {
            Ok(()) => {
                debug!(id = %id, "entry saved");
                SaveOutcome::Saved { id }
            }
            Err(error) => {
                // The entry stays in memory; the next successful save writes it too
                error!(id = %id, error = %error.summary(), "entry not persisted");
                SaveOutcome::NotPersisted { id, error }
            }
        }
    }

    /// Start composing from the list. The draft always starts empty.
    pub fn new_entry(&mut self) -> bool {
        if self.screen != Screen::List {
            return false;
        }
        self.transition(Screen::compose());
        true
    }

    /// Leave the composer without saving. Only possible when there is a list
    /// to go back to.
    pub fn cancel(&mut self) -> bool {
        if self.screen.kind() != ScreenKind::Entry || self.journals.is_empty() {
            return false;
        }
        self.transition(Screen::List);
        true
    }

    /// Open the entry at `index` of the list
    pub fn select(&mut self, index: usize) -> bool {
        if self.screen != Screen::List {
            return false;
        }
        let Some(entry) = self.journals.get(index).cloned() else {
            return false;
        };
        self.cursor = index;
        self.transition(Screen::Detail { entry });
        true
    }

    /// Open the entry under the cursor
    pub fn select_current(&mut self) -> bool {
        self.select(self.cursor)
    }

    /// Return from the detail screen to the list
    pub fn back(&mut self) -> bool {
        if self.screen.kind() != ScreenKind::Detail {
            return false;
        }
        self.transition(Screen::List);
        true
    }

    /// Move the list cursor by `delta`, clamped to the list bounds
    pub fn move_cursor(&mut self, delta: isize) -> bool {
        if self.screen != Screen::List || self.journals.is_empty() {
            return false;
        }

        let old = self.cursor;
        let new = (self.cursor as isize + delta).max(0) as usize;
        self.cursor = new.min(self.journals.len() - 1);
        old != self.cursor
    }

    fn transition(&mut self, next: Screen) {
        debug!(from = ?self.screen.kind(), to = ?next.kind(), "screen transition");
        self.screen = next;
    }
}
