//! Bottom status bar — key hints, last status message, load info.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " m:market space:canton a/n:all/none ,/.:rooms +/-:price r:reload q:quit",
        theme::muted(),
    ));
    spans.push(Span::raw(" | "));

    if let Some(message) = &app.status {
        spans.push(Span::styled(message.as_str(), theme::accent()));
    } else if let Some(loaded_at) = app.loaded_at {
        spans.push(Span::styled(
            format!(
                "rent {} · buy {} · loaded {}",
                app.rent_rows,
                app.buy_rows,
                loaded_at.format("%H:%M:%S")
            ),
            theme::secondary(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
