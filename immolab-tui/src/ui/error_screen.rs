//! Full-screen load-failure view shown until a reload succeeds.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{centered_rect, panel_block};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(70, 50, area);
    f.render_widget(Clear, popup);

    let block = panel_block("Failed to load datasets");
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let message = app.fatal_error.as_deref().unwrap_or("unknown error");
    let lines = vec![
        Line::from(Span::styled(message, theme::negative())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Fix the CSV files, then press ", theme::secondary()),
            Span::styled("r", theme::accent_bold()),
            Span::styled(" to retry. ", theme::secondary()),
            Span::styled("q", theme::accent_bold()),
            Span::styled(" quits.", theme::secondary()),
        ]),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, inner);
}
