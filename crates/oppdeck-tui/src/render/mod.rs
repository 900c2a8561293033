//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use oppdeck_app::state::{AppState, UiMode};

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    FormModal, MainHeader, OpportunityTable, PaginationBar, SearchBar, ToastCard,
};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it does not modify state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        MainHeader::new(
            &state.account_id,
            state.table.total_records,
            state.table.pagination_ready,
        ),
        areas.header,
    );

    frame.render_widget(
        SearchBar::new(&state.page.search_key, state.ui_mode == UiMode::Search),
        areas.search,
    );

    frame.render_widget(
        OpportunityTable::new(&state.table.opportunities, state.table.loading),
        areas.table,
    );

    frame.render_widget(
        PaginationBar::new(
            &state.page,
            state.table.total_records,
            state.table.pagination_ready,
        ),
        areas.pager,
    );

    frame.render_widget(footer_hints(state.ui_mode), areas.footer);

    // Modal overlay
    if let Some(form) = &state.form {
        frame.render_widget(
            FormModal::new(form, &state.stage_options, state.stage_options_loading),
            area,
        );
    }

    render_toasts(frame, areas.table, state);
}

/// Key hints for the footer, contextual per mode.
fn footer_hints(mode: UiMode) -> Paragraph<'static> {
    let hints = match mode {
        UiMode::Table => " / search  n new  ‹ › page  1-9 page #  r refresh  q quit",
        UiMode::Search => " type to filter  Enter apply  Esc clear",
        UiMode::NewOpportunity => " Tab fields  ↑↓ stage  Enter save  Esc cancel",
    };
    Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(palette::TEXT_MUTED),
    )))
}

/// Stack toasts in the top-right corner of the table area, newest last.
fn render_toasts(frame: &mut Frame, host: Rect, state: &AppState) {
    for (i, toast) in state.toasts.iter().enumerate() {
        let card = ToastCard::new(toast);
        let width = card.desired_width().min(host.width.saturating_sub(4));
        if width == 0 {
            continue;
        }
        let y = host.y + 1 + i as u16;
        if y >= host.y + host.height.saturating_sub(1) {
            break;
        }
        let x = host.x + host.width.saturating_sub(width + 2);
        frame.render_widget(card, Rect::new(x, y, width, 1));
    }
}
