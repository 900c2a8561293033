//! Screen layout calculation

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The fixed vertical split of the main screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with account context
    pub header: Rect,
    /// Search filter input
    pub search: Rect,
    /// Opportunity table
    pub table: Rect,
    /// Page-number strip with prev/next
    pub pager: Rect,
    /// Key hints
    pub footer: Rect,
}

/// Split the terminal into the fixed screen areas.
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // search
            Constraint::Min(5),    // table
            Constraint::Length(1), // pager
            Constraint::Length(1), // footer
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        table: chunks[2],
        pager: chunks[3],
        footer: chunks[4],
    }
}

/// A centered rect of `width` x `height` within `area`, clipped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
