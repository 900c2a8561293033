//! Search filter input

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::palette;

/// The search filter line. `active` means keystrokes currently edit it.
pub struct SearchBar<'a> {
    search_key: &'a str,
    active: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(search_key: &'a str, active: bool) -> Self {
        Self { search_key, active }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.active {
            palette::BORDER_ACTIVE
        } else {
            palette::BORDER_DIM
        };

        let mut spans = vec![Span::styled(
            "/",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        )];

        if self.search_key.is_empty() && !self.active {
            spans.push(Span::styled(
                " press / to filter by name",
                Style::default().fg(palette::TEXT_MUTED),
            ));
        } else {
            spans.push(Span::styled(
                self.search_key,
                Style::default().fg(palette::TEXT_PRIMARY),
            ));
        }

        if self.active {
            spans.push(Span::styled("_", Style::default().fg(palette::STATUS_YELLOW)));
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(" Search "),
            )
            .render(area, buf);
    }
}
