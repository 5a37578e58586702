use crate::app::state::{AppState, FocusPanel};
use crate::store::client;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = " 1-6 pages · Tab focus · r refresh · q quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", client::host_of(&state.config.store.url)),
        Style::default()
            .fg(Theme::ACCENT_GREEN)
            .bg(Theme::BG_ELEVATED),
    ));

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let focus_name = match state.focus {
        FocusPanel::Sidebar => "NAV",
        FocusPanel::Content => state.page.title(),
    };
    let right = format!("{}[{}] ", KEY_HINTS, focus_name);

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));

    parts.push(Span::styled(
        right,
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
