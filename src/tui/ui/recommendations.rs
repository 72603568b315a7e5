//! Personalized recommendations view with report export.

use std::path::PathBuf;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::application::report::{render_discussion_guide, GENERAL_ADVICE};
use crate::domain::{Assessment, Recommendation};
use crate::tui::styles::HeartTheme;

use super::{key_hints, render_footer, render_header};

/// Outcome of the last export attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Saved(PathBuf),
    Failed(String),
}

/// Recommendations screen state
#[derive(Debug, Default)]
pub struct RecommendationsState {
    pub selected: usize,
    pub show_guide: bool,
    pub show_general: bool,
    pub export_status: Option<ExportStatus>,
}

impl RecommendationsState {
    /// Select the next tab, wrapping around `count` tabs.
    pub fn next_tab(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Select the previous tab, wrapping around `count` tabs.
    pub fn prev_tab(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Show or hide the discussion guide pane. Only one side pane is open at a time.
    pub fn toggle_guide(&mut self) {
        self.show_guide = !self.show_guide;
        if self.show_guide {
            self.show_general = false;
        }
    }

    /// Show or hide the general heart-health advice pane.
    pub fn toggle_general(&mut self) {
        self.show_general = !self.show_general;
        if self.show_general {
            self.show_guide = false;
        }
    }
}

/// Render the recommendations screen
pub fn render_recommendations(
    f: &mut Frame,
    area: Rect,
    assessment: &Assessment,
    state: &RecommendationsState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        "Your Prevention Plan",
        "Personalized recommendations",
    );

    let titles: Vec<Line> = assessment
        .recommendations
        .iter()
        .map(|r| Line::from(format!(" {} ", r.key)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.selected)
        .style(HeartTheme::text_secondary())
        .highlight_style(HeartTheme::tab_selected())
        .divider(Span::styled("│", HeartTheme::text_muted()))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(HeartTheme::border()),
        );
    f.render_widget(tabs, chunks[1]);

    let body = if state.show_guide || state.show_general {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[2]);
        if state.show_guide {
            render_guide(f, split[1], assessment);
        } else {
            render_general(f, split[1]);
        }
        split[0]
    } else {
        chunks[2]
    };

    match assessment.recommendations.nth(state.selected) {
        Some(recommendation) => render_recommendation(f, body, recommendation),
        None => {
            let empty = Paragraph::new(Span::styled(
                "No recommendations available.",
                HeartTheme::text_muted(),
            ));
            f.render_widget(empty, body);
        }
    }

    render_footer(f, chunks[3], footer_line(state));
}

fn render_recommendation(f: &mut Frame, area: Rect, recommendation: &Recommendation) {
    let mut lines = vec![
        Line::from(Span::styled(
            recommendation.impact_statement.clone(),
            HeartTheme::info(),
        )),
        Line::from(""),
        Line::from(Span::styled("Action Steps:", HeartTheme::subtitle())),
    ];

    lines.extend(recommendation.tips.iter().enumerate().map(|(i, tip)| {
        Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), HeartTheme::key_hint()),
            Span::styled(tip.clone(), HeartTheme::text()),
        ])
    }));

    let content = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", recommendation.title),
                    HeartTheme::title(),
                ))
                .borders(Borders::ALL)
                .border_style(HeartTheme::border_focused()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(content, area);
}

fn render_guide(f: &mut Frame, area: Rect, assessment: &Assessment) {
    let guide = render_discussion_guide(assessment);
    let lines: Vec<Line> = guide.lines().map(guide_line).collect();

    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(" Discussion Guide ", HeartTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(HeartTheme::border()),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

/// Numbered items are section starts; indented bullets are plain text.
fn guide_line(line: &str) -> Line<'static> {
    let style = if line.starts_with(|c: char| c.is_ascii_digit()) {
        HeartTheme::subtitle()
    } else {
        HeartTheme::text()
    };
    Line::from(Span::styled(line.to_string(), style))
}

fn render_general(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for (i, (heading, items)) in GENERAL_ADVICE.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*heading, HeartTheme::subtitle())));
        lines.extend(items.iter().map(|item| {
            Line::from(vec![
                Span::styled("  • ", HeartTheme::key_hint()),
                Span::styled(*item, HeartTheme::text()),
            ])
        }));
    }

    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    " General Recommendations for Heart Health ",
                    HeartTheme::subtitle(),
                ))
                .borders(Borders::ALL)
                .border_style(HeartTheme::border()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(p, area);
}

fn footer_line(state: &RecommendationsState) -> Line<'static> {
    match &state.export_status {
        Some(ExportStatus::Saved(path)) => Line::from(vec![
            Span::styled("✓ ", HeartTheme::success()),
            Span::styled(
                format!("Report saved to {}", path.display()),
                HeartTheme::success(),
            ),
        ]),
        Some(ExportStatus::Failed(message)) => Line::from(vec![
            Span::styled("! ", HeartTheme::danger()),
            Span::styled(format!("Export failed: {message}"), HeartTheme::danger()),
        ]),
        None => key_hints(&[
            ("←→", "Switch"),
            ("E", "Export Report"),
            ("G", "Discussion Guide"),
            ("H", "General Advice"),
            ("N", "New Assessment"),
            ("Esc", "Back"),
        ]),
    }
}
