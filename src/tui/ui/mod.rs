//! UI module: View components for the TUI.

pub mod form;
pub mod home;
pub mod recommendations;
pub mod results;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::HeartTheme;

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "DISCLAIMER: This tool provides an estimate of your risk and is not a substitute for professional medical advice.",
            HeartTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "Always consult a qualified healthcare provider for diagnosis and treatment.",
            HeartTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(HeartTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}

/// Header bar shared by every screen.
pub(crate) fn render_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", HeartTheme::text()),
        Span::styled(title.to_string(), HeartTheme::title()),
        Span::styled(" │ ", HeartTheme::text_muted()),
        Span::styled(subtitle.to_string(), HeartTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(HeartTheme::border()),
    );

    f.render_widget(header, area);
}

/// Footer line of `[key] description` pairs.
pub(crate) fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    Line::from(
        hints
            .iter()
            .flat_map(|(key, desc)| {
                [
                    Span::styled(format!("[{key}] "), HeartTheme::key_hint()),
                    Span::styled(format!("{desc} "), HeartTheme::key_desc()),
                ]
            })
            .collect::<Vec<_>>(),
    )
}

pub(crate) fn render_footer(f: &mut Frame, area: Rect, line: Line<'_>) {
    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(HeartTheme::border()),
    );
    f.render_widget(footer, area);
}

/// Flatten a rendered buffer into one string for content assertions.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content.iter().map(|c| c.symbol()).collect()
}
