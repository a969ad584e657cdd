//! Canton ranking — medal table on the left, bar chart on the right.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::panel_block;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = panel_block(&format!("Canton Ranking — {}", app.market.metric_label()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.ranking.is_empty() {
        let para = Paragraph::new(Line::from(Span::styled(
            "No listings match the current filters.",
            theme::muted(),
        )));
        f.render_widget(para, inner);
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    render_table(f, halves[0], app);
    render_bars(f, halves[1], app);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("{:<5} {:<10} {:>12}", "Rank", "Canton", "CHF/m²"),
        theme::accent_bold(),
    )));

    let visible = (area.height as usize).saturating_sub(1);
    for row in app.ranking.iter().take(visible) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<5}", row.rank_label), theme::rank_style(&row.rank_label)),
            Span::styled(format!(" {:<10}", row.canton), theme::secondary()),
            Span::styled(format!("{:>11.2}", row.value), theme::accent()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_bars(f: &mut Frame, area: Rect, app: &App) {
    // Bars need at least label + value width; cap at the widest that fits.
    let bar_width = 6u16;
    let capacity = (area.width / (bar_width + 1)).max(1) as usize;

    let bars: Vec<Bar> = app
        .ranking
        .iter()
        .take(capacity)
        .filter(|row| row.value.is_finite())
        .map(|row| {
            Bar::default()
                .label(Line::from(row.canton.clone()))
                .value(row.value.round().max(0.0) as u64)
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(theme::neutral())
        .value_style(theme::accent_bold())
        .label_style(theme::secondary());

    f.render_widget(chart, area);
}
