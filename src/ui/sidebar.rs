use crate::app::state::{AppState, FocusPanel, Page};
use crate::store::client;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Sidebar;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" crmdash ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(Theme::panel_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Navigation
            Constraint::Length(3), // Store / session footer
        ])
        .split(inner);

    render_nav(frame, chunks[0], state, focused);
    render_footer(frame, chunks[1], state);
}

fn render_nav(frame: &mut Frame, area: Rect, state: &AppState, focused: bool) {
    let mut items: Vec<ListItem> = Vec::new();

    for (i, page) in Page::ALL.iter().enumerate() {
        let is_active = *page == state.page;
        let is_cursor = focused && i == state.sidebar_cursor;

        let marker = if is_active { "▸" } else { " " };
        let mut style = if is_active {
            Theme::nav_active()
        } else {
            Theme::nav_normal()
        };
        if is_cursor {
            style = style.bg(Theme::BG_ELEVATED);
        }

        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", i + 1), Style::default().fg(Theme::TEXT_MUTED)),
            Span::styled(page.title(), style),
        ])));
    }

    frame.render_widget(List::new(items), area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let host = client::host_of(&state.config.store.url);
    let user_line = match &state.user {
        Some(user) => Span::styled(
            format!(" {}", crate::ui::fit_width(user.display(), area.width.saturating_sub(2) as usize)),
            Style::default().fg(Theme::TEXT_SECONDARY),
        ),
        None => Span::styled(" not signed in", Style::default().fg(Theme::TEXT_MUTED)),
    };

    let lines = vec![
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(Theme::BORDER_DIM),
        )),
        Line::from(Span::styled(
            format!(" {}", crate::ui::fit_width(host, area.width.saturating_sub(2) as usize)),
            Style::default().fg(Theme::TEXT_MUTED),
        )),
        Line::from(user_line),
    ];

    frame.render_widget(ratatui::widgets::Paragraph::new(lines), area);
}
