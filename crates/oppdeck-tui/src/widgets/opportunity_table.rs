//! The urgent-opportunities data table

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

use oppdeck_core::types::Opportunity;

use crate::theme::palette;

/// One page of records with column headers; shows a loading/empty state
/// when there is nothing to render.
pub struct OpportunityTable<'a> {
    opportunities: &'a [Opportunity],
    loading: bool,
}

impl<'a> OpportunityTable<'a> {
    pub fn new(opportunities: &'a [Opportunity], loading: bool) -> Self {
        Self {
            opportunities,
            loading,
        }
    }

    fn block() -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::BORDER_DIM))
    }
}

impl Widget for OpportunityTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.opportunities.is_empty() {
            let text = if self.loading {
                "Loading urgent opportunities…"
            } else {
                "No urgent opportunities found."
            };
            Paragraph::new(text)
                .style(Style::default().fg(palette::TEXT_MUTED))
                .alignment(Alignment::Center)
                .block(Self::block())
                .render(area, buf);
            return;
        }

        let header = Row::new(vec![
            Cell::from("Opportunity Name"),
            Cell::from("Stage"),
            Cell::from("Amount"),
            Cell::from("Close Date"),
        ])
        .style(
            Style::default()
                .fg(palette::TABLE_HEADER)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.opportunities.iter().enumerate().map(|(i, opp)| {
            let style = if i % 2 == 1 {
                Style::default().bg(palette::ROW_ALT)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(opp.name.clone()),
                Cell::from(opp.stage_name.clone()),
                Cell::from(format!("{:>12.2}", opp.amount)),
                Cell::from(opp.close_date.format("%Y-%m-%d").to_string()),
            ])
            .style(style.fg(palette::TEXT_PRIMARY))
        });

        let widths = [
            Constraint::Percentage(40),
            Constraint::Percentage(22),
            Constraint::Percentage(18),
            Constraint::Percentage(20),
        ];

        Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .block(Self::block())
            .render(area, buf);
    }
}
