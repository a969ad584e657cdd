//! Top-level UI layout — filter sidebar, KPI strip, ranking, market
//! comparison, ratio table.

pub mod comparison_panel;
pub mod error_screen;
pub mod filters_panel;
pub mod kpi_panel;
pub mod ranking_panel;
pub mod ratio_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::App;
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &App) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    status_bar::render(f, chunks[1], app);

    if app.fatal_error.is_some() {
        error_screen::render(f, main_area, app);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(40)])
        .split(main_area);

    filters_panel::render(f, columns[0], app);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Min(8),
        ])
        .split(columns[1]);

    kpi_panel::render(f, rows[0], app);
    ranking_panel::render(f, rows[1], app);
    comparison_panel::render(f, rows[2], app);
    ratio_panel::render(f, rows[3], app);
}

/// Bordered block shared by all panels.
pub fn panel_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {title} "))
        .title_style(theme::panel_title(true))
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Format a CHF amount with Swiss apostrophe grouping (rounded to francs).
pub fn fmt_chf(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\'');
        }
        out.push(ch);
    }
    if rounded < 0 {
        format!("-{out}")
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chf_grouping() {
        assert_eq!(fmt_chf(950.0), "950");
        assert_eq!(fmt_chf(2450.4), "2'450");
        assert_eq!(fmt_chf(1_050_000.0), "1'050'000");
        assert_eq!(fmt_chf(-3500.0), "-3'500");
    }
}
