//! Left sidebar — market switch, canton checklist, room and price ranges.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{fmt_chf, panel_block};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = panel_block("Filters");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Market: ", theme::muted()),
        Span::styled(app.market.label(), theme::accent_bold()),
        Span::styled("  [m] switch", theme::muted()),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Cantons ", theme::secondary()),
        Span::styled(
            format!(
                "{}/{}",
                app.filters.selected.len(),
                app.filters.all_cantons.len()
            ),
            theme::accent(),
        ),
        Span::styled("  [Space] [a]ll [n]one", theme::muted()),
    ]));

    // Scroll the checklist so the cursor stays visible.
    let list_height = (inner.height as usize).saturating_sub(lines.len() + 4);
    let start = if app.cursor >= list_height && list_height > 0 {
        app.cursor + 1 - list_height
    } else {
        0
    };
    let end = (start + list_height).min(app.filters.all_cantons.len());

    for (i, canton) in app.filters.all_cantons[start..end].iter().enumerate() {
        let index = start + i;
        let is_cursor = index == app.cursor;
        let is_selected = app.filters.selected.contains(canton);
        let check = if is_selected { "[x]" } else { "[ ]" };

        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if is_selected {
            theme::accent()
        } else {
            theme::muted()
        };
        lines.push(Line::from(Span::styled(
            format!(" {check} {canton}"),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Rooms: ", theme::muted()),
        Span::styled(
            format!("{:.1} – {:.1}", app.filters.min_rooms, app.filters.max_rooms),
            theme::accent(),
        ),
        Span::styled("  [,/.] [[/]]", theme::muted()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Price: ", theme::muted()),
        Span::styled(
            format!(
                "{} – {}",
                fmt_chf(app.filters.min_price),
                fmt_chf(app.filters.max_price)
            ),
            theme::accent(),
        ),
        Span::styled(" CHF  [{/}] [+/-]", theme::muted()),
    ]));

    f.render_widget(Paragraph::new(lines), inner);
}
