//! Home view: introduction and last-assessment summary.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::Assessment;
use crate::tui::styles::HeartTheme;

use super::render_header;

/// Render the home screen.
pub fn render_home(f: &mut Frame, area: Rect, last: Option<&Assessment>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        "Lifeline",
        "Heart Disease Risk Assessment & Prevention",
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_intro(f, columns[0], last.is_some());
    render_last_assessment(f, columns[1], last);
}

fn render_intro(f: &mut Frame, area: Rect, has_assessment: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .margin(1)
        .split(area);

    let about = vec![
        Line::from(Span::styled(
            "Estimate your 10-year risk of cardiovascular disease from your age, \
             vital measurements, medical history and lifestyle.",
            HeartTheme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "You will get a risk category, the factors that contribute most, and \
             a personalized prevention plan you can export and discuss with your doctor.",
            HeartTheme::text_secondary(),
        )),
    ];

    let about_block = Block::default()
        .title(Span::styled(" About ", HeartTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(HeartTheme::border());
    f.render_widget(
        Paragraph::new(about)
            .block(about_block)
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let mut actions = vec![action("N", "New Assessment")];
    if has_assessment {
        actions.push(action("R", "View Last Results"));
    }
    actions.push(action("Q", "Quit"));

    let actions_block = Block::default()
        .title(Span::styled(" Quick Actions ", HeartTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(HeartTheme::border());
    f.render_widget(Paragraph::new(actions).block(actions_block), chunks[1]);
}

fn action(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[{key}] "), HeartTheme::key_hint()),
        Span::styled(desc, HeartTheme::key_desc()),
    ])
}

fn render_last_assessment(f: &mut Frame, area: Rect, last: Option<&Assessment>) {
    let block = Block::default()
        .title(Span::styled(" Last Assessment ", HeartTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(HeartTheme::border());

    let Some(assessment) = last else {
        let empty_msg = Paragraph::new(Line::from(vec![Span::styled(
            "No assessment yet. Press [N] to start.",
            HeartTheme::text_muted(),
        )]))
        .block(block);
        f.render_widget(empty_msg, area);
        return;
    };

    let category = assessment.category();
    let top = assessment.result.top_factors();
    let contributors = if top.is_empty() {
        "None identified".to_string()
    } else {
        top.iter()
            .map(|factor| factor.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Risk: ", HeartTheme::text_secondary()),
            Span::styled(
                format!("{:.2}%", assessment.result.percentage),
                HeartTheme::risk_category(category),
            ),
            Span::styled(" · ", HeartTheme::text_muted()),
            Span::styled(category.label(), HeartTheme::risk_category(category)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Main contributors: ", HeartTheme::text_secondary()),
            Span::styled(contributors, HeartTheme::text()),
        ]),
        Line::from(vec![
            Span::styled("Recommendations: ", HeartTheme::text_secondary()),
            Span::styled(
                assessment.recommendations.len().to_string(),
                HeartTheme::text(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Assessed {}",
                assessment.assessed_at.format("%Y-%m-%d %H:%M UTC")
            ),
            HeartTheme::text_muted(),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
