//! New-opportunity modal form

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use oppdeck_app::form::FormState;
use oppdeck_core::types::StageOption;
use oppdeck_core::validate::FormField;

use crate::layout::centered_rect;
use crate::theme::palette;

const MODAL_WIDTH: u16 = 54;

/// The modal creation form: four fields, inline validation messages, and a
/// footer with key hints. Renders centered over whatever is below it.
pub struct FormModal<'a> {
    form: &'a FormState,
    options: &'a [StageOption],
    options_loading: bool,
}

impl<'a> FormModal<'a> {
    pub fn new(form: &'a FormState, options: &'a [StageOption], options_loading: bool) -> Self {
        Self {
            form,
            options,
            options_loading,
        }
    }

    fn field_value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.form.name.clone(),
            FormField::Amount => self.form.amount.clone(),
            FormField::CloseDate => self.form.close_date.clone(),
            FormField::Stage => {
                if self.options_loading {
                    "loading stages…".to_string()
                } else if self.options.is_empty() {
                    "no stages available".to_string()
                } else if self.form.stage_index.is_none() {
                    "select with ↑/↓".to_string()
                } else {
                    self.form.stage_label(self.options).to_string()
                }
            }
        }
    }

    /// Whether the value text is a placeholder rather than user input.
    fn is_placeholder(&self, field: FormField) -> bool {
        field == FormField::Stage && self.form.stage_index.is_none()
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for field in FormField::ALL {
            let focused = self.form.focus == field;

            let label = match field {
                FormField::CloseDate => format!("{} (YYYY-MM-DD)", field.label()),
                _ => field.label().to_string(),
            };
            lines.push(Line::from(Span::styled(
                format!(" {label}"),
                Style::default().fg(if focused {
                    palette::FIELD_FOCUS
                } else {
                    palette::TEXT_SECONDARY
                }),
            )));

            let marker = if focused { " ┃ " } else { "   " };
            let value_style = if self.is_placeholder(field) || self.field_value(field).is_empty() {
                Style::default().fg(palette::TEXT_MUTED)
            } else {
                Style::default().fg(palette::TEXT_PRIMARY)
            };
            let mut value_spans = vec![
                Span::styled(
                    marker.to_string(),
                    Style::default().fg(palette::FIELD_FOCUS),
                ),
                Span::styled(self.field_value(field), value_style),
            ];
            if focused && field != FormField::Stage {
                value_spans.push(Span::styled(
                    "_",
                    Style::default().fg(palette::STATUS_YELLOW),
                ));
            }
            lines.push(Line::from(value_spans));

            if let Some(message) = self.form.error_for(field) {
                lines.push(Line::from(Span::styled(
                    format!("   {message}"),
                    Style::default().fg(palette::FIELD_ERROR),
                )));
            }
        }

        lines.push(Line::from(""));
        let footer = if self.form.submitting {
            Line::from(Span::styled(
                " Saving…",
                Style::default()
                    .fg(palette::STATUS_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(vec![
                Span::styled(" Enter", Style::default().fg(palette::STATUS_YELLOW)),
                Span::styled(" save  ", Style::default().fg(palette::TEXT_MUTED)),
                Span::styled("Esc", Style::default().fg(palette::STATUS_YELLOW)),
                Span::styled(" cancel  ", Style::default().fg(palette::TEXT_MUTED)),
                Span::styled("Tab", Style::default().fg(palette::STATUS_YELLOW)),
                Span::styled(" next field", Style::default().fg(palette::TEXT_MUTED)),
            ])
        };
        lines.push(footer);

        lines
    }
}

impl Widget for FormModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        // +2 for the borders
        let height = (lines.len() as u16).saturating_add(2);
        let modal_area = centered_rect(area, MODAL_WIDTH, height);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette::BORDER_ACTIVE))
            .title(" New Urgent Opportunity ")
            .style(Style::default().bg(palette::POPUP_BG));

        Paragraph::new(lines).block(block).render(modal_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages() -> Vec<StageOption> {
        vec![StageOption::new("Prospecting", "Prospecting")]
    }

    #[test]
    fn test_lines_cover_all_fields() {
        let form = FormState::new();
        let modal = FormModal::new(&form, &[], false);
        let lines = modal.lines();
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.clone()))
            .collect();
        assert!(text.contains("Opportunity Name"));
        assert!(text.contains("Stage"));
        assert!(text.contains("Amount"));
        assert!(text.contains("Close Date"));
    }

    #[test]
    fn test_error_lines_rendered_inline() {
        let mut form = FormState::new();
        let stages = stages();
        form.validate(&stages, chrono::NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        let modal = FormModal::new(&form, &stages, false);
        let text: String = modal
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.clone()))
            .collect();
        assert!(text.contains("This field is required"));
    }

    #[test]
    fn test_submitting_shows_saving() {
        let mut form = FormState::new();
        form.submitting = true;
        let stages = stages();
        let modal = FormModal::new(&form, &stages, false);
        let text: String = modal
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.clone()))
            .collect();
        assert!(text.contains("Saving"));
    }

    #[test]
    fn test_stage_placeholder_while_loading() {
        let form = FormState::new();
        let modal = FormModal::new(&form, &[], true);
        let text: String = modal
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.clone()))
            .collect();
        assert!(text.contains("loading stages"));
    }
}
