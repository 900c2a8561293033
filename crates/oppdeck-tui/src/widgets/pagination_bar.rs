//! Page-number strip with previous/next controls

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use oppdeck_core::pagination::PageState;

use crate::theme::palette;

/// `‹ Prev  1 [2] 3  Next ›` - built from the pure page derivations.
pub struct PaginationBar<'a> {
    page: &'a PageState,
    total_records: u64,
    ready: bool,
}

impl<'a> PaginationBar<'a> {
    pub fn new(page: &'a PageState, total_records: u64, ready: bool) -> Self {
        Self {
            page,
            total_records,
            ready,
        }
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.ready {
            Paragraph::new("…")
                .style(Style::default().fg(palette::TEXT_MUTED))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let enabled = Style::default().fg(palette::TEXT_PRIMARY);
        let disabled = Style::default().fg(palette::PAGE_DISABLED);

        let mut spans = vec![Span::styled(
            "‹ Prev ",
            if self.page.disable_previous() {
                disabled
            } else {
                enabled
            },
        )];

        for link in self.page.page_links(self.total_records) {
            spans.push(Span::raw(" "));
            if link.active {
                spans.push(Span::styled(
                    format!(" {} ", link.number),
                    Style::default()
                        .fg(palette::PAGE_ACTIVE_FG)
                        .bg(palette::PAGE_ACTIVE_BG)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {} ", link.number),
                    Style::default().fg(palette::TEXT_SECONDARY),
                ));
            }
        }

        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            " Next ›",
            if self.page.disable_next(self.total_records) {
                disabled
            } else {
                enabled
            },
        ));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
