use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use crate::ui::{format_money, render_loading};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(records) = state.deals.ready() else {
        render_loading(frame, area, state, "deals");
        return;
    };

    let focused = state.focus == FocusPanel::Content;
    let block = Block::default()
        .title(format!(" Deals ({}) ", records.len()))
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

    let header =
        Row::new(["Name", "Company", "Value", "Stage", "Created"]).style(Theme::table_header());

    let date_format = &state.config.ui.date_format;
    let rows: Vec<Row> = records
        .iter()
        .map(|d| {
            Row::new(vec![
                Cell::from(d.name.clone()),
                Cell::from(d.company_name.clone().unwrap_or_default()),
                Cell::from(Span::styled(format_money(d.value()), Theme::value_text())),
                Cell::from(Span::styled(
                    d.stage.label(),
                    Style::default().fg(Theme::stage_color(d.stage)),
                )),
                Cell::from(d.created_at.format(date_format).to_string()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(22),
            Constraint::Percentage(14),
            Constraint::Percentage(16),
            Constraint::Percentage(18),
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
