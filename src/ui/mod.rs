mod activities;
mod companies;
mod contacts;
mod dashboard;
mod deals;
mod header;
mod layout;
mod sidebar;
mod status_bar;
mod tasks;
mod theme;

use crate::app::state::{AppState, Page};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use theme::Theme;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::BG_DARK)),
        area,
    );

    let app_layout = layout::compute_layout(area);

    sidebar::render(frame, app_layout.sidebar, state);
    header::render(frame, app_layout.header, state);
    match state.page {
        Page::Dashboard => dashboard::render(frame, app_layout.content, state),
        Page::Contacts => contacts::render(frame, app_layout.content, state),
        Page::Companies => companies::render(frame, app_layout.content, state),
        Page::Deals => deals::render(frame, app_layout.content, state),
        Page::Tasks => tasks::render(frame, app_layout.content, state),
        Page::Activities => activities::render(frame, app_layout.content, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Bordered placeholder shown while a page's fetch cycle is in flight.
fn render_loading(frame: &mut Frame, area: Rect, state: &AppState, what: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let text = format!(
        "\n\n{} Loading {}…",
        spinner_frame(state.tick_count),
        what
    );
    let paragraph = Paragraph::new(text)
        .style(Theme::loading())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Truncate to a terminal cell width, appending an ellipsis when cut.
fn fit_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Whole-currency display with thousands separators, e.g. `$1,250,000`.
fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let whole = value.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0");
        assert_eq!(format_money(1000.0), "$1,000");
        assert_eq!(format_money(1234567.4), "$1,234,567");
        assert_eq!(format_money(-2500.0), "-$2,500");
    }

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("short", 10), "short");
        assert_eq!(fit_width("a longer label", 7), "a long…");
        // Wide characters count as two cells.
        assert_eq!(fit_width("日本語テキスト", 7), "日本語…");
    }
}
