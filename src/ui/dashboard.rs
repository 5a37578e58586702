use crate::app::state::AppState;
use crate::store::aggregate::DashboardData;
use crate::ui::theme::Theme;
use crate::ui::{fit_width, format_money, render_loading};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.dashboard.ready() {
        None => render_loading(frame, area, state, "dashboard"),
        Some(data) => render_data(frame, area, state, data),
    }
}

fn render_data(frame: &mut Frame, area: Rect, state: &AppState, data: &DashboardData) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Stat cards
            Constraint::Min(6),     // Recent deals | upcoming tasks
            Constraint::Length(12), // Activity feed
        ])
        .split(area);

    render_cards(frame, rows[0], data);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    render_recent_deals(frame, middle[0], data);
    render_upcoming_tasks(frame, middle[1], data);
    render_feed(frame, rows[2], state, data);
}

fn render_cards(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stats = &data.stats;
    render_card(
        frame,
        cards[0],
        "Contacts",
        stats.contacts.to_string(),
        Theme::ACCENT_BLUE,
    );
    render_card(
        frame,
        cards[1],
        "Companies",
        stats.companies.to_string(),
        Theme::ACCENT_PURPLE,
    );
    render_card(
        frame,
        cards[2],
        "Deals",
        stats.deals.to_string(),
        Theme::ACCENT_GREEN,
    );
    render_card(
        frame,
        cards[3],
        "Pipeline value",
        format_money(stats.deals_value),
        Theme::ACCENT_ORANGE,
    );
}

fn render_card(frame: &mut Frame, area: Rect, label: &str, value: String, accent: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(accent))
        .style(Theme::panel_bg());

    let lines = vec![
        Line::from(Span::styled(format!(" {}", value), Theme::stat_value())),
        Line::from(Span::styled(format!(" {}", label), Theme::stat_label())),
    ];
    frame.render_widget(ratatui::widgets::Paragraph::new(lines).block(block), area);
}

fn render_recent_deals(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let block = panel_block(" Recent deals ");

    let mut items: Vec<ListItem> = Vec::new();
    if data.recent_deals.is_empty() {
        items.push(ListItem::new(Span::styled(
            " No deals yet",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
    } else {
        let name_width = (area.width as usize).saturating_sub(26).max(8);
        for deal in &data.recent_deals {
            let company = deal.company_name.as_deref().unwrap_or("no company");
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", fit_width(&deal.name, name_width)),
                    Style::default().fg(Theme::TEXT_PRIMARY),
                ),
                Span::styled(
                    format!("· {} ", fit_width(company, 16)),
                    Style::default().fg(Theme::TEXT_MUTED),
                ),
                Span::styled(format_money(deal.value()), Theme::value_text()),
                Span::styled(
                    format!(" [{}]", deal.stage.label()),
                    Style::default().fg(Theme::stage_color(deal.stage)),
                ),
            ])));
        }
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn render_upcoming_tasks(frame: &mut Frame, area: Rect, data: &DashboardData) {
    let title = format!(
        " Upcoming tasks ({}/{} done) ",
        data.stats.completed_tasks, data.stats.tasks
    );
    let block = panel_block(&title);

    let mut items: Vec<ListItem> = Vec::new();
    if data.upcoming_tasks.is_empty() {
        items.push(ListItem::new(Span::styled(
            " Nothing due",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
    } else {
        for task in &data.upcoming_tasks {
            let due = match task.due_date {
                Some(date) => date.format("%m/%d").to_string(),
                None => "no due date".to_string(),
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    " ● ",
                    Style::default().fg(Theme::priority_color(task.priority)),
                ),
                Span::styled(
                    fit_width(&task.title, (area.width as usize).saturating_sub(16).max(8)),
                    Style::default().fg(Theme::TEXT_PRIMARY),
                ),
                Span::styled(format!("  {}", due), Style::default().fg(Theme::TEXT_MUTED)),
            ])));
        }
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn render_feed(frame: &mut Frame, area: Rect, state: &AppState, data: &DashboardData) {
    let block = panel_block(" Recent activity ");

    let mut items: Vec<ListItem> = Vec::new();
    if data.activities.is_empty() {
        items.push(ListItem::new(Span::styled(
            " No activity yet",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
    } else {
        for entry in &data.activities {
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
                Span::styled("● ", Style::default().fg(Theme::activity_color(entry.kind))),
                Span::styled(
                    entry.describe(),
                    Style::default().fg(Theme::TEXT_PRIMARY),
                ),
            ])));
        }
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title.to_string())
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg())
}
