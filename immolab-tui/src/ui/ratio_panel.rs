//! Price-to-rent panel — per-zip table plus median break-even by canton.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{fmt_chf, panel_block};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = panel_block("Price-to-Rent (years of rent to buy)");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.ratios.is_empty() {
        let para = Paragraph::new(Line::from(Span::styled(
            "No postal codes present in both markets under the current filters.",
            theme::muted(),
        )));
        f.render_widget(para, inner);
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(inner);

    render_zip_table(f, halves[0], app);
    render_medians(f, halves[1], app);
}

fn render_zip_table(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(
            "{:>5} {:<7} {:>12} {:>10} {:>7}",
            "Zip", "Canton", "Buy", "Rent/mo", "Years"
        ),
        theme::accent_bold(),
    )));

    let visible = (area.height as usize).saturating_sub(1);
    for row in app.ratios.iter().take(visible) {
        let years_span = match row.ratio {
            Some(years) => Span::styled(format!("{years:>7.1}"), theme::ratio_style(years)),
            None => Span::styled(format!("{:>7}", "–"), theme::muted()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>5}", row.zip_code), theme::secondary()),
            Span::styled(
                format!(" {:<7}", row.canton.as_deref().unwrap_or("–")),
                theme::secondary(),
            ),
            Span::styled(format!("{:>12}", fmt_chf(row.buy_price)), theme::muted()),
            Span::styled(format!("{:>10}", fmt_chf(row.rent_price)), theme::muted()),
            years_span,
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_medians(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Median break-even by canton",
        theme::accent_bold(),
    )));

    if app.medians.is_empty() {
        lines.push(Line::from(Span::styled("(no canton data)", theme::muted())));
    }

    let visible = (area.height as usize).saturating_sub(1);
    for row in app.medians.iter().take(visible) {
        let years_span = match row.ratio {
            Some(years) => Span::styled(format!("{years:>6.1}y"), theme::ratio_style(years)),
            None => Span::styled(format!("{:>7}", "–"), theme::muted()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", row.canton), theme::secondary()),
            years_span,
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
