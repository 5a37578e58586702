use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use crate::store::aggregate::ActivityKind;
use crate::store::records::{DealStage, TaskPriority};

pub struct Theme;

impl Theme {
    // Base palette, echoing the slate scheme of the web dashboard.
    pub const BG_DARK: Color = Color::Rgb(15, 23, 42);
    pub const BG_PANEL: Color = Color::Rgb(20, 29, 50);
    pub const BG_ELEVATED: Color = Color::Rgb(30, 41, 59);
    pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
    pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85);

    pub const ACCENT_BLUE: Color = Color::Rgb(59, 130, 246);
    pub const ACCENT_TEAL: Color = Color::Rgb(45, 212, 191);
    pub const ACCENT_GREEN: Color = Color::Rgb(34, 197, 94);
    pub const ACCENT_AMBER: Color = Color::Rgb(234, 179, 8);
    pub const ACCENT_ORANGE: Color = Color::Rgb(249, 115, 22);
    pub const ACCENT_RED: Color = Color::Rgb(239, 68, 68);
    pub const ACCENT_PURPLE: Color = Color::Rgb(168, 85, 247);
    pub const ACCENT_INDIGO: Color = Color::Rgb(99, 102, 241);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Thick
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_PANEL)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn nav_active() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_normal() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn stat_value() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn stat_label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn table_header() -> Style {
        Style::default()
            .fg(Self::TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn value_text() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn stage_color(stage: DealStage) -> Color {
        match stage {
            DealStage::New => Self::ACCENT_BLUE,
            DealStage::Contacted => Self::ACCENT_AMBER,
            DealStage::Qualified => Self::ACCENT_PURPLE,
            DealStage::Proposal => Self::ACCENT_ORANGE,
            DealStage::Negotiation => Self::ACCENT_INDIGO,
            DealStage::Won => Self::ACCENT_GREEN,
            DealStage::Lost => Self::ACCENT_RED,
        }
    }

    pub fn priority_color(priority: TaskPriority) -> Color {
        match priority {
            TaskPriority::High => Self::ACCENT_RED,
            TaskPriority::Medium => Self::ACCENT_AMBER,
            TaskPriority::Low => Self::ACCENT_BLUE,
        }
    }

    pub fn activity_color(kind: ActivityKind) -> Color {
        match kind {
            ActivityKind::Contact => Self::ACCENT_BLUE,
            ActivityKind::Company => Self::ACCENT_PURPLE,
            ActivityKind::Deal => Self::ACCENT_GREEN,
            ActivityKind::Task => Self::ACCENT_TEAL,
        }
    }
}
