//! Rent-vs-buy comparison — per-canton mean prices side by side.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{fmt_chf, panel_block};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = panel_block("Market Comparison: Rent vs. Buy");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.comparisons.is_empty() {
        let para = Paragraph::new(Line::from(Span::styled(
            "No canton data to compare under the current filters.",
            theme::muted(),
        )));
        f.render_widget(para, inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("{:<8} {:>12} {:>14}", "Canton", "Avg Rent/mo", "Avg Buy"),
        theme::accent_bold(),
    )));

    let visible = (inner.height as usize).saturating_sub(1);
    for row in app.comparisons.iter().take(visible) {
        let rent = row
            .rent_price
            .map(fmt_chf)
            .unwrap_or_else(|| "–".to_string());
        let buy = row
            .buy_price
            .map(fmt_chf)
            .unwrap_or_else(|| "–".to_string());
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", row.canton), theme::secondary()),
            Span::styled(format!(" {rent:>12}"), theme::negative()),
            Span::styled(format!("{buy:>14}"), theme::accent()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}
