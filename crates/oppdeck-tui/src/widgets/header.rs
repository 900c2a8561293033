//! Title bar with account context

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::palette;

/// One-line header: product name, account, record count.
pub struct MainHeader<'a> {
    account_id: &'a str,
    total_records: u64,
    pagination_ready: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(account_id: &'a str, total_records: u64, pagination_ready: bool) -> Self {
        Self {
            account_id,
            total_records,
            pagination_ready,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = if self.pagination_ready {
            format!("{} records", self.total_records)
        } else {
            "…".to_string()
        };

        let line = Line::from(vec![
            Span::styled(
                " oppdeck ",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("· Urgent Opportunities · ", Style::default().fg(palette::TEXT_MUTED)),
            Span::styled(
                format!("Account {}", self.account_id),
                Style::default().fg(palette::TEXT_PRIMARY),
            ),
            Span::styled(format!("  {count}"), Style::default().fg(palette::TEXT_SECONDARY)),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
