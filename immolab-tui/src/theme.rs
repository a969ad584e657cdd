//! Neon-on-charcoal style tokens shared by every panel.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0, 255, 255);
const POSITIVE: Color = Color::Rgb(0, 255, 128);
const NEGATIVE: Color = Color::Rgb(255, 20, 147);
const WARNING: Color = Color::Rgb(255, 140, 0);
const NEUTRAL: Color = Color::Rgb(147, 112, 219);
const MUTED: Color = Color::Rgb(100, 149, 237);
const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Years-to-break-even gradient: cheap-to-own green, expensive pink.
pub fn ratio_style(years: f64) -> Style {
    match years {
        y if y < 20.0 => positive(),
        y if y < 30.0 => accent(),
        y if y < 40.0 => neutral(),
        _ => negative(),
    }
}

/// Gold, silver, and bronze for the medal ranks.
pub fn rank_style(rank_label: &str) -> Style {
    match rank_label {
        "🥇" => Style::default().fg(Color::Rgb(255, 215, 0)),
        "🥈" => Style::default().fg(Color::Rgb(192, 192, 192)),
        "🥉" => Style::default().fg(Color::Rgb(205, 127, 50)),
        _ => secondary(),
    }
}
