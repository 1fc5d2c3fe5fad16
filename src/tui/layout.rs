use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Full-screen layout shared by every screen
pub struct AppLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create stacked layout:
    /// - Header: 3 rows (title between borders)
    /// - Body: remaining rows
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Body (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { header_area: chunks[0], body_area: chunks[1], status_area: chunks[2] }
    }
}

/// Composer body: prompt line, text box, save button
pub struct EntryLayout {
    pub prompt_area: Rect,
    pub editor_area: Rect,
    pub button_area: Rect,
}

impl EntryLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Prompt + spacing
                Constraint::Min(3),    // Editor
                Constraint::Length(3), // Save button
            ])
            .split(area);

        Self { prompt_area: chunks[0], editor_area: chunks[1], button_area: chunks[2] }
    }
}
