use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use crate::ui::render_loading;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Row, Table, TableState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(records) = state.contacts.ready() else {
        render_loading(frame, area, state, "contacts");
        return;
    };

    let focused = state.focus == FocusPanel::Content;
    let block = Block::default()
        .title(format!(" Contacts ({}) ", records.len()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .style(Theme::panel_bg());

    let header = Row::new(["Name", "Email", "Phone", "Company", "Created"])
        .style(Theme::table_header());

    let date_format = &state.config.ui.date_format;
    let rows: Vec<Row> = records
        .iter()
        .map(|c| {
            Row::new([
                c.name.clone(),
                c.email.clone().unwrap_or_default(),
                c.phone.clone().unwrap_or_default(),
                c.company_name.clone().unwrap_or_default(),
                c.created_at.format(date_format).to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(15),
            Constraint::Percentage(18),
            Constraint::Percentage(12),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Theme::selected_row())
    .highlight_symbol("▸ ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.selection));
    frame.render_stateful_widget(table, area, &mut table_state);
}
