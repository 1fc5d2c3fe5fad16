use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::{AppLayout, EntryLayout};
use super::timestamps::{format_full_timestamp, format_timestamp};
use crate::controller::Screen;
use crate::models::{DEFAULT_PROMPT, JournalCollection, JournalEntry};
use crate::utils::sanitize_for_display;

const BRIGHT: Color = Color::Rgb(250, 250, 250);
const MUTED: Color = Color::Rgb(113, 113, 122);
const ACCENT: Color = Color::Rgb(74, 144, 226);
const SURFACE: Color = Color::Rgb(24, 24, 27);
const DISABLED: Color = Color::Rgb(61, 61, 92);
const ERROR: Color = Color::Rgb(239, 68, 68);
const SUCCESS: Color = Color::Rgb(16, 185, 129);

const PLACEHOLDER: &str = "Start writing your journal entry...";
const EMPTY_LIST: &str = "No journals yet. Start writing!";

/// Everything the renderer reads
pub struct RenderState<'a> {
    pub screen: &'a Screen,
    pub journals: &'a JournalCollection,
    pub cursor: usize,
    pub detail_scroll: u16,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header_area, state.screen);

    match state.screen {
        Screen::Loading => render_loading(frame, layout.body_area),
        Screen::Entry { draft } => render_entry(frame, layout.body_area, draft),
        Screen::List => render_list(frame, layout.body_area, state.journals, state.cursor),
        Screen::Detail { entry } => render_detail(frame, layout.body_area, entry, state.detail_scroll),
    }

    render_status_bar(frame, layout.status_area, state);
}

fn render_header(frame: &mut Frame, area: Rect, screen: &Screen) {
    let title = match screen {
        Screen::Loading => {
            Line::from(Span::styled("Journal", Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)))
        }
        Screen::Entry { .. } => {
            Line::from(Span::styled("New Entry", Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)))
        }
        Screen::List => Line::from(vec![
            Span::styled("My Journals", Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)),
            Span::raw("   "),
            Span::styled("+ New Entry (n)", Style::default().fg(ACCENT)),
        ]),
        Screen::Detail { .. } => {
            Line::from(Span::styled("← Back (Esc)", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)))
        }
    };

    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(DISABLED)));

    frame.render_widget(header, area);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Loading journals…")
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, centered_row(area));
}

fn render_entry(frame: &mut Frame, area: Rect, draft: &str) {
    let layout = EntryLayout::new(area);
    let can_save = !draft.trim().is_empty();

    let prompt = Paragraph::new(DEFAULT_PROMPT)
        .style(Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, layout.prompt_area);

    let content = if draft.is_empty() {
        Text::from(vec![Line::from(vec![
            Span::styled("▏", Style::default().fg(ACCENT)),
            Span::styled(PLACEHOLDER, Style::default().fg(MUTED)),
        ])])
    } else {
        let mut lines: Vec<Line> = draft.split('\n').map(|line| Line::from(expand_tabs(line))).collect();
        // Cursor marker after the last character
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▏", Style::default().fg(ACCENT)));
        }
        Text::from(lines)
    };

    // Keep the last wrapped row (the typing point) in view
    let inner = inner_size(layout.editor_area);
    let editor = Paragraph::new(content).wrap(Wrap { trim: false });
    let scroll = overflow_rows(&editor, inner);

    let editor = editor
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DISABLED))
                .title(" Entry "),
        )
        .style(Style::default().fg(BRIGHT))
        .scroll((scroll, 0));
    frame.render_widget(editor, layout.editor_area);

    let button_style = if can_save {
        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED).bg(DISABLED)
    };
    let button = Paragraph::new("Save Journal (Ctrl+S)")
        .style(button_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(button_style));
    frame.render_widget(button, layout.button_area);
}

fn render_list(frame: &mut Frame, area: Rect, journals: &JournalCollection, cursor: usize) {
    if journals.is_empty() {
        let empty = Paragraph::new(EMPTY_LIST)
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center);
        frame.render_widget(empty, centered_row(area));
        return;
    }

    let items: Vec<ListItem> = journals
        .iter()
        .map(|entry| {
            let preview: String = sanitize_for_display(entry.headline()).chars().take(60).collect();
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    sanitize_for_display(entry.prompt()),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(format_timestamp(&entry.timestamp()), Style::default().fg(MUTED)),
                    Span::raw("  "),
                    Span::raw(preview),
                ]),
                Line::from(""),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(format!(" {} entries ", journals.len())),
        )
        .style(Style::default().fg(BRIGHT))
        .highlight_style(Style::default().fg(BRIGHT).bg(SURFACE).add_modifier(Modifier::BOLD))
        .highlight_symbol("▌ ");

    let mut list_state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(frame: &mut Frame, area: Rect, entry: &JournalEntry, scroll: u16) {
    // The terminal may have shrunk since the offset was chosen
    let scroll = scroll.min(detail_max_scroll(entry, area));

    let paragraph = detail_paragraph(entry)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(DISABLED)))
        .style(Style::default().fg(BRIGHT))
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

fn detail_paragraph(entry: &JournalEntry) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            sanitize_for_display(entry.prompt()),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format_full_timestamp(&entry.timestamp()), Style::default().fg(MUTED))),
        Line::from(""),
    ];

    for line in sanitize_for_display(entry.text()).lines() {
        lines.push(Line::from(expand_tabs(line)));
    }

    Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false })
}

/// Largest useful scroll offset for `entry` shown in `area` (borders included):
/// the last wrapped row sits on the bottom line
pub fn detail_max_scroll(entry: &JournalEntry, area: Rect) -> u16 {
    overflow_rows(&detail_paragraph(entry), inner_size(area))
}

/// Width and height inside a one-cell border
fn inner_size(area: Rect) -> (u16, u16) {
    (area.width.saturating_sub(2), area.height.saturating_sub(2))
}

/// Wrapped rows that do not fit in `height`
fn overflow_rows(paragraph: &Paragraph, (width, height): (u16, u16)) -> u16 {
    if width == 0 {
        return 0;
    }
    let rows = u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX);
    rows.saturating_sub(height)
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => SUCCESS,
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), Style::default().fg(fg).bg(SURFACE))
    } else {
        let hints = match state.screen {
            Screen::Loading => "Ctrl+C: quit",
            Screen::Entry { .. } if state.journals.is_empty() => "Ctrl+S: save | Ctrl+C: quit",
            Screen::Entry { .. } => "Ctrl+S: save | Esc: discard | Ctrl+C: quit",
            Screen::List => "↑/↓: move | Enter: open | n: new entry | q: quit",
            Screen::Detail { .. } => "↑/↓: scroll | Ctrl+Y: copy | Esc: back | q: quit",
        };

        let mut parts = vec![];
        if let Screen::List = state.screen
            && !state.journals.is_empty()
        {
            parts.push(format!("entry {}/{}", state.cursor + 1, state.journals.len()));
        }
        parts.push(hints.to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(SURFACE))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

// ratatui gives '\t' no width
fn expand_tabs(line: &str) -> String {
    line.replace('\t', "    ")
}

/// Single row in the vertical middle of `area`
fn centered_row(area: Rect) -> Rect {
    Rect { y: area.y + area.height / 2, height: area.height.min(1), ..area }
}
