//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Service integration

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::adapters::MarkdownFileExporter;
use crate::application::AssessmentService;
use crate::config::AppConfig;
use crate::domain::Assessment;

use super::ui::{
    form::{render_form, FormState},
    home::render_home,
    recommendations::{render_recommendations, ExportStatus, RecommendationsState},
    render_disclaimer,
    results::render_results,
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    AssessmentForm,
    Results,
    Recommendations,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Scoring and export service
    service: AssessmentService<MarkdownFileExporter>,

    /// Assessment form state
    form_state: FormState,

    /// Most recent completed assessment
    assessment: Option<Assessment>,

    /// Recommendations screen state
    recommendations_state: RecommendationsState,
}

impl App {
    /// Create a new application exporting reports to the configured directory.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let exporter = MarkdownFileExporter::new(config.report_dir.clone());
        Self::with_service(AssessmentService::new(Arc::new(exporter)))
    }

    /// Create application with an injected service (Composition Root pattern).
    #[must_use]
    pub fn with_service(service: AssessmentService<MarkdownFileExporter>) -> Self {
        Self {
            screen: Screen::Home,
            should_quit: false,
            service,
            form_state: FormState::default(),
            assessment: None,
            recommendations_state: RecommendationsState::default(),
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let content_area = chunks[0];

        match (self.screen, &self.assessment) {
            (Screen::AssessmentForm, _) => render_form(f, content_area, &self.form_state),
            (Screen::Results, Some(assessment)) => render_results(f, content_area, assessment),
            (Screen::Recommendations, Some(assessment)) => render_recommendations(
                f,
                content_area,
                assessment,
                &self.recommendations_state,
            ),
            _ => render_home(f, content_area, self.assessment.as_ref()),
        }

        render_disclaimer(f, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::AssessmentForm => self.handle_form_key(key),
            Screen::Results => self.handle_results_key(key),
            Screen::Recommendations => self.handle_recommendations_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('n') | KeyCode::Char('N') => self.start_assessment(),
            KeyCode::Char('r') | KeyCode::Char('R') if self.assessment.is_some() => {
                self.screen = Screen::Results;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.form_state.clear_sensitive();
                self.screen = Screen::Home;
            }
            KeyCode::Up | KeyCode::BackTab => self.form_state.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.form_state.next_field(),
            KeyCode::Left => self.form_state.cycle(false),
            KeyCode::Right => self.form_state.cycle(true),
            KeyCode::Char(' ') => self.form_state.toggle(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.form_state.load_sample_data(),
            KeyCode::Char(c) => self.form_state.input_char(c),
            KeyCode::Backspace => self.form_state.delete_char(),
            KeyCode::Delete => self.form_state.clear_field(),
            KeyCode::Enter => self.submit_form(),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                self.screen = Screen::Recommendations;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => self.start_assessment(),
            KeyCode::Esc => {
                self.screen = Screen::Home;
            }
            _ => {}
        }
    }

    fn handle_recommendations_key(&mut self, key: KeyCode) {
        let count = self
            .assessment
            .as_ref()
            .map_or(0, |a| a.recommendations.len());

        match key {
            KeyCode::Right | KeyCode::Tab => self.recommendations_state.next_tab(count),
            KeyCode::Left | KeyCode::BackTab => self.recommendations_state.prev_tab(count),
            KeyCode::Char('g') | KeyCode::Char('G') => self.recommendations_state.toggle_guide(),
            KeyCode::Char('h') | KeyCode::Char('H') => self.recommendations_state.toggle_general(),
            KeyCode::Char('e') | KeyCode::Char('E') => self.export_report(),
            KeyCode::Char('n') | KeyCode::Char('N') => self.start_assessment(),
            KeyCode::Esc => {
                self.screen = Screen::Results;
            }
            _ => {}
        }
    }

    fn start_assessment(&mut self) {
        self.form_state = FormState::default();
        self.screen = Screen::AssessmentForm;
    }

    fn submit_form(&mut self) {
        let input = match self.form_state.to_input() {
            Ok(input) => input,
            Err(e) => {
                self.form_state.error_message = Some(e);
                return;
            }
        };

        match self.service.assess(input) {
            Ok(assessment) => {
                self.assessment = Some(assessment);
                self.recommendations_state = RecommendationsState::default();
                self.screen = Screen::Results;

                // Clear plaintext buffers from the UI immediately.
                self.form_state.clear_sensitive();
            }
            Err(e) => {
                self.form_state.error_message = Some(e.to_string());
            }
        }
    }

    fn export_report(&mut self) {
        let Some(assessment) = &self.assessment else {
            return;
        };

        let status = match self.service.export(assessment) {
            Ok(path) => ExportStatus::Saved(path),
            Err(e) => {
                tracing::error!("Report export failed: {}", e);
                ExportStatus::Failed(e.to_string())
            }
        };
        self.recommendations_state.export_status = Some(status);
    }
}
