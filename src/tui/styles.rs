//! Color palette and styles for the terminal interface.
//!
//! Dark background, rose accent for the heart-health theme, and one
//! semantic color per risk category.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::RiskCategory;

/// Theme palette.
pub struct HeartTheme;

impl HeartTheme {
    // === Accent ===

    /// Rose - Primary accent
    pub const PRIMARY: Color = Color::Rgb(255, 75, 75); // #FF4B4B

    /// Lighter rose for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(253, 164, 175); // #FDA4AF

    // === Status ===

    pub const SUCCESS: Color = Color::Rgb(34, 197, 94); // #22C55E
    pub const DANGER: Color = Color::Rgb(239, 68, 68); // #EF4444
    pub const INFO: Color = Color::Rgb(56, 189, 248); // #38BDF8

    // === Slate neutrals ===

    pub const BORDER: Color = Color::Rgb(71, 85, 105); // #475569
    pub const TEXT_PRIMARY: Color = Color::Rgb(241, 245, 249); // #F1F5F9
    pub const TEXT_SECONDARY: Color = Color::Rgb(203, 213, 225); // #CBD5E1
    pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Bar color for neutral factors
    pub const NEUTRAL_BAR: Color = Color::Rgb(100, 116, 139); // #64748B

    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    #[must_use]
    pub fn info() -> Style {
        Style::default().fg(Self::INFO)
    }

    /// Style for the focused form field title
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Style for the active tab
    #[must_use]
    pub fn tab_selected() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn cursor() -> Style {
        Style::default().fg(Self::PRIMARY_LIGHT)
    }

    /// Foreground style matching a risk category.
    #[must_use]
    pub fn risk_category(category: RiskCategory) -> Style {
        let (r, g, b) = category.color();
        Style::default().fg(Color::Rgb(r, g, b))
    }

    /// Bar style for a factor multiplier: neutral factors stay calm,
    /// elevated ones are highlighted.
    #[must_use]
    pub fn factor_bar(multiplier: f64) -> Style {
        if multiplier > crate::domain::NEUTRAL {
            Self::danger()
        } else {
            Style::default().fg(Self::NEUTRAL_BAR)
        }
    }
}
