//! Toast notification cards

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use oppdeck_core::types::{Toast, ToastVariant};

use crate::theme::palette;

/// One toast rendered as a single colored line, e.g. `✕ Error: boom`.
pub struct ToastCard<'a> {
    toast: &'a Toast,
}

impl<'a> ToastCard<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn color(&self) -> ratatui::style::Color {
        match self.toast.variant {
            ToastVariant::Success => palette::STATUS_GREEN,
            ToastVariant::Error => palette::STATUS_RED,
            ToastVariant::Warning => palette::STATUS_YELLOW,
            ToastVariant::Info => palette::STATUS_BLUE,
        }
    }

    fn icon(&self) -> &'static str {
        match self.toast.variant {
            ToastVariant::Success => "✓",
            ToastVariant::Error => "✕",
            ToastVariant::Warning => "!",
            ToastVariant::Info => "i",
        }
    }

    /// Width the card wants, borders of the host area permitting.
    pub fn desired_width(&self) -> u16 {
        let text = format!(" {} {}: {} ", self.icon(), self.toast.title, self.toast.message);
        text.width().min(u16::MAX as usize) as u16
    }
}

impl Widget for ToastCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let line = Line::from(vec![
            Span::styled(
                format!(" {} {}: ", self.icon(), self.toast.title),
                Style::default()
                    .fg(palette::DEEPEST_BG)
                    .bg(self.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} ", self.toast.message),
                Style::default().fg(palette::DEEPEST_BG).bg(self.color()),
            ),
        ]);
        Paragraph::new(line)
            .style(Style::default().bg(self.color()))
            .render(area, buf);
    }
}
