//! Risk result view: gauge, category and factor breakdown.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::domain::{Assessment, RiskResult, MAX_PERCENTAGE};
use crate::tui::styles::HeartTheme;

use super::{key_hints, render_footer, render_header};

/// Render the results screen for a completed assessment
pub fn render_results(f: &mut Frame, area: Rect, assessment: &Assessment) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        "Your Results",
        "Estimated 10-year cardiovascular risk",
    );

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .margin(1)
        .split(chunks[1]);

    render_summary(f, content[0], &assessment.result);
    render_factor_chart(f, content[1], &assessment.result);

    render_footer(
        f,
        chunks[2],
        key_hints(&[
            ("R/Enter", "Recommendations"),
            ("N", "New Assessment"),
            ("Esc", "Home"),
        ]),
    );
}

fn render_summary(f: &mut Frame, area: Rect, result: &RiskResult) {
    let category = result.category();
    let category_style = HeartTheme::risk_category(category);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" 10-Year Risk ", HeartTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(HeartTheme::border()),
        )
        .gauge_style(category_style)
        .ratio((result.percentage / MAX_PERCENTAGE).clamp(0.0, 1.0))
        .label(format!("{:.2}%", result.percentage));
    f.render_widget(gauge, chunks[0]);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Category: ", HeartTheme::text_secondary()),
            Span::styled(category.label(), category_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(category.description(), HeartTheme::text())),
        Line::from(""),
    ];

    let top = result.top_factors();
    if top.is_empty() {
        lines.push(Line::from(Span::styled(
            "No elevated risk factors identified.",
            HeartTheme::success(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Main contributors:",
            HeartTheme::text_secondary(),
        )));
        for factor in top {
            let mut spans = vec![
                Span::styled("  • ", HeartTheme::danger()),
                Span::styled(factor.label(), HeartTheme::text()),
                Span::styled(
                    format!("  ×{:.1}", result.factors.get(factor)),
                    HeartTheme::text_muted(),
                ),
            ];
            if !factor.is_modifiable() {
                spans.push(Span::styled(" (non-modifiable)", HeartTheme::text_muted()));
            }
            lines.push(Line::from(spans));
        }
    }

    if result.is_capped() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Estimate capped at 100%.",
            HeartTheme::text_muted(),
        )));
    }

    let summary = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(" Summary ", HeartTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(HeartTheme::border()),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(summary, chunks[1]);
}

/// Horizontal bar chart of every factor multiplier, highest first.
fn render_factor_chart(f: &mut Frame, area: Rect, result: &RiskResult) {
    let ranked = result.factors.ranked();

    // Bars carry integer values; scale multipliers by 100 to keep one decimal of resolution.
    let bars: Vec<Bar> = ranked
        .iter()
        .map(|(factor, multiplier)| {
            Bar::default()
                .value(bar_value(*multiplier))
                .label(Line::from(factor.label()))
                .text_value(format!("{multiplier:.1}x"))
                .style(HeartTheme::factor_bar(*multiplier))
        })
        .collect();

    let max = ranked
        .first()
        .map_or(100, |(_, m)| bar_value(*m))
        .max(100);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(Span::styled(" Risk Factor Impact ", HeartTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(HeartTheme::border()),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(max)
        .value_style(HeartTheme::text())
        .label_style(HeartTheme::text_secondary())
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

fn bar_value(multiplier: f64) -> u64 {
    (multiplier * 100.0).round().max(0.0) as u64
}
