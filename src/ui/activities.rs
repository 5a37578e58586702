use crate::app::state::{AppState, FocusPanel};
use crate::ui::render_loading;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(entries) = state.activities.ready() else {
        render_loading(frame, area, state, "activities");
        return;
    };

    let focused = state.focus == FocusPanel::Content;
    let block = Block::default()
        .title(format!(" Activity ({}) ", entries.len()))
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

    let mut items: Vec<ListItem> = Vec::new();
    if entries.is_empty() {
        items.push(ListItem::new(Span::styled(
            " No activity recorded",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
    } else {
        for entry in entries {
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!(
                        " {} ",
                        entry
                            .timestamp
                            .with_timezone(&chrono::Local)
                            .format(&state.config.ui.timestamp_format)
                    ),
                    Theme::timestamp(),
                ),
                Span::styled(
                    format!("{:<8}", entry.kind.label()),
                    Style::default().fg(Theme::activity_color(entry.kind)),
                ),
                Span::styled(entry.describe(), Style::default().fg(Theme::TEXT_PRIMARY)),
            ])));
        }
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::selected_row())
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selection));
    frame.render_stateful_widget(list, area, &mut list_state);
}
