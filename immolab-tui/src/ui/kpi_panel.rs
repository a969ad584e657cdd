//! KPI strip — headline numbers for the filtered active market.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::theme;
use crate::ui::{fmt_chf, panel_block};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = panel_block("Overview");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mean_price = app
        .kpis
        .mean_price
        .map(fmt_chf)
        .unwrap_or_else(|| "–".to_string());
    let mean_ppm2 = app
        .kpis
        .mean_price_per_m2
        .map(|v| format!("{v:.1}"))
        .unwrap_or_else(|| "–".to_string());
    let mean_area = app
        .kpis
        .mean_area
        .map(|v| format!("{v:.0} m²"))
        .unwrap_or_else(|| "–".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled("Listings: ", theme::muted()),
            Span::styled(app.kpis.listing_count.to_string(), theme::accent_bold()),
            Span::styled("   Cantons: ", theme::muted()),
            Span::styled(app.kpis.canton_count.to_string(), theme::accent_bold()),
            Span::styled("   Mean area: ", theme::muted()),
            Span::styled(mean_area, theme::accent_bold()),
        ]),
        Line::from(vec![
            Span::styled(format!("Mean {}: ", app.market.price_label()), theme::muted()),
            Span::styled(mean_price, theme::positive()),
            Span::styled(format!("   {}: ", app.market.metric_label()), theme::muted()),
            Span::styled(mean_ppm2, theme::positive()),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
