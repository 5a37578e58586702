use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = vec![Span::styled(
        format!(" {} ", state.page.title()),
        Theme::title(),
    )];

    let today = chrono::Local::now()
        .format(&state.config.ui.date_format)
        .to_string();
    let mut right = today;
    if let Some(user) = &state.user {
        right = format!("{} · {}", user.display(), right);
    }
    right.push(' ');

    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.width());
    parts.push(Span::raw(" ".repeat(remaining)));
    parts.push(Span::styled(right, Style::default().fg(Theme::TEXT_MUTED)));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
