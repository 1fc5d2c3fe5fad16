use crate::models::JournalEntry;

/// Screen the application is showing. State that only makes sense on one
/// screen lives in that variant: the draft exists only while composing and
/// the selected entry only while reading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Initial load has not finished yet
    Loading,
    /// Composing a new entry
    Entry { draft: String },
    /// Browsing every saved entry
    List,
    /// Reading one entry in full
    Detail { entry: JournalEntry },
}

/// Fieldless tag for [`Screen`], for key mapping and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Loading,
    Entry,
    List,
    Detail,
}

impl Screen {
    pub(crate) fn compose() -> Self {
        Screen::Entry { draft: String::new() }
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Loading => ScreenKind::Loading,
            Screen::Entry { .. } => ScreenKind::Entry,
            Screen::List => ScreenKind::List,
            Screen::Detail { .. } => ScreenKind::Detail,
        }
    }
}
