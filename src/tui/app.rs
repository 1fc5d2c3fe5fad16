//! TUI application state and event handling.
//!
//! The `App` struct wraps a [`ViewController`] and runs the main event loop
//! via `run()`. It adds the concerns that only exist on a terminal:
//!
//! - **Key routing**: keys are mapped per screen, then forwarded to the controller
//! - **Status messages**: transient feedback for saves, clipboard and storage errors
//! - **Detail scrolling**: scroll offset for long entries
//! - **Dirty state tracking**: redraw only when state changes (or every 100ms for resizes)
//!
//! # Example
//!
//! ```rust,ignore
//! let controller = ViewController::new(JournalStore::new(backend));
//! let mut app = App::new(controller);
//! app.run(&mut terminal)?;
//! ```

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use tracing::info;

use super::events::{Action, poll_event};
use super::layout::AppLayout;
use super::rendering::{RenderState, detail_max_scroll, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::controller::{SaveOutcome, ScreenKind, ViewController};
use crate::store::KeyValueBackend;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 8000;
/// Rows moved by PageUp/PageDown on the list
const PAGE_SIZE: isize = 10;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App<B> {
    controller: ViewController<B>,
    should_quit: bool,
    detail_scroll: u16,
    // Body area of the last frame; bounds detail scrolling
    body_area: Rect,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<B: KeyValueBackend> App<B> {
    pub fn new(controller: ViewController<B>) -> Self {
        Self {
            controller,
            should_quit: false,
            detail_scroll: 0,
            body_area: Rect::default(),
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn controller(&self) -> &ViewController<B> {
        &self.controller
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages (marks dirty if cleared)
    fn check_and_clear_expired_status(&mut self) {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B2: Backend>(&mut self, terminal: &mut Terminal<B2>) -> Result<()> {
        // Show the loading screen before the (blocking) initial load
        self.draw(terminal)?;
        self.start();

        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            if self.needs_redraw || self.last_draw_time.elapsed() >= Duration::from_millis(100) {
                self.draw(terminal)?;
            }

            let action = poll_event(Duration::from_millis(100), self.controller.screen().kind())?;
            self.handle_action(action);
        }

        info!(entries = self.controller.journals().len(), "exiting");
        Ok(())
    }

    fn draw<B2: Backend>(&mut self, terminal: &mut Terminal<B2>) -> Result<()> {
        terminal.draw(|f| {
            self.body_area = AppLayout::new(f.area()).body_area;
            let state = RenderState {
                screen: self.controller.screen(),
                journals: self.controller.journals(),
                cursor: self.controller.cursor(),
                detail_scroll: self.detail_scroll,
                status_message: self.status_message.as_ref(),
            };
            render_ui(f, &state);
        })?;
        self.needs_redraw = false;
        self.last_draw_time = Instant::now();
        Ok(())
    }

    /// Initial load; a failed read is shown once in the status bar
    fn start(&mut self) {
        self.controller.start();
        if let Some(error) = self.controller.load_error() {
            let text = format!("✗ Could not read saved journals, starting empty: {}", error.failure());
            self.set_status(text, MessageType::Error, STATUS_ERROR_DURATION_MS);
        }
        self.needs_redraw = true;
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        let changed = match action {
            Action::Quit => {
                self.should_quit = true;
                false
            }
            Action::Insert(c) => self.controller.insert_char(c),
            Action::Newline => self.controller.insert_newline(),
            Action::DeleteChar => self.controller.delete_char(),
            Action::Save => self.save(),
            Action::Cancel => self.controller.cancel(),
            Action::MoveUp => self.controller.move_cursor(-1),
            Action::MoveDown => self.controller.move_cursor(1),
            Action::PageUp => self.controller.move_cursor(-PAGE_SIZE),
            Action::PageDown => self.controller.move_cursor(PAGE_SIZE),
            Action::Open => {
                self.detail_scroll = 0;
                self.controller.select_current()
            }
            Action::NewEntry => self.controller.new_entry(),
            Action::Back => self.controller.back(),
            Action::ScrollUp => self.scroll_detail(-1),
            Action::ScrollDown => self.scroll_detail(1),
            Action::CopyToClipboard => {
                self.copy_selected();
                false
            }
            Action::None => false,
        };

        if changed {
            self.needs_redraw = true;
        }
    }

    fn save(&mut self) -> bool {
        match self.controller.save_entry() {
            SaveOutcome::Ignored => false,
            SaveOutcome::Saved { .. } => {
                self.set_status("✓ Journal saved", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
                true
            }
            SaveOutcome::NotPersisted { error, .. } => {
                self.set_status(
                    format!("✗ Entry not saved to disk: {}", error.failure()),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
                true
            }
        }
    }

    fn scroll_detail(&mut self, delta: i32) -> bool {
        let Some(entry) = self.controller.selected() else {
            return false;
        };
        let max_scroll = detail_max_scroll(entry, self.body_area);

        let old = self.detail_scroll;
        self.detail_scroll = self.detail_scroll.saturating_add_signed(delta as i16).min(max_scroll);
        old != self.detail_scroll
    }

    fn copy_selected(&mut self) {
        if self.controller.screen().kind() != ScreenKind::Detail {
            return;
        }
        let Some(text) = self.controller.selected().map(|entry| entry.text().to_string()) else {
            return;
        };

        match copy_to_clipboard(&text) {
            Ok(()) => {
                self.set_status("✓ Copied to clipboard", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }
}
