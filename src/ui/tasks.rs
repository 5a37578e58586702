use crate::app::state::{AppState, FocusPanel};
use crate::store::records::TaskStatus;
use crate::ui::render_loading;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(records) = state.tasks.ready() else {
        render_loading(frame, area, state, "tasks");
        return;
    };

    let focused = state.focus == FocusPanel::Content;
    let done = records.iter().filter(|t| t.is_completed()).count();
    let block = Block::default()
        .title(format!(" Tasks ({}/{} done) ", done, records.len()))
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
        Row::new(["", "Title", "Due", "Priority", "Status"]).style(Theme::table_header());

    let rows: Vec<Row> = records
        .iter()
        .map(|t| {
            let title_style = if t.is_completed() {
                Style::default()
                    .fg(Theme::TEXT_MUTED)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Theme::TEXT_PRIMARY)
            };
            let due = match t.due_date {
                Some(date) => date.format("%m/%d").to_string(),
                None => "—".to_string(),
            };
            let status_style = match t.status {
                TaskStatus::Completed => Style::default().fg(Theme::ACCENT_GREEN),
                TaskStatus::InProgress => Style::default().fg(Theme::ACCENT_AMBER),
                TaskStatus::Pending => Style::default().fg(Theme::TEXT_SECONDARY),
            };
            Row::new(vec![
                Cell::from(Span::styled(
                    "●",
                    Style::default().fg(Theme::priority_color(t.priority)),
                )),
                Cell::from(Span::styled(t.title.clone(), title_style)),
                Cell::from(due),
                Cell::from(t.priority.label()),
                Cell::from(Span::styled(t.status.label(), status_style)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Percentage(45),
            Constraint::Percentage(15),
            Constraint::Percentage(18),
            Constraint::Percentage(20),
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
