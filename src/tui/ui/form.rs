//! Assessment input form.

use std::fmt::Debug;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::{
    AlcoholConsumption, AssessmentInput, Choice, DietQuality, PhysicalActivity, Sex,
    SleepDuration,
};
use crate::tui::styles::HeartTheme;

use super::{key_hints, render_footer, render_header};

/// Identifies which input attribute a form row edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Age,
    Sex,
    BloodPressure,
    Cholesterol,
    Bmi,
    Smoking,
    Diabetes,
    AtrialFibrillation,
    RheumatoidArthritis,
    ChronicKidneyDisease,
    FamilyHistory,
    MentalHealth,
    Migraine,
    PhysicalActivity,
    DietQuality,
    Alcohol,
    Sleep,
}

/// Editable value of a form row.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Typed number; empty means "not provided"
    Number(String),
    /// Checkbox
    Flag(bool),
    /// Select box over a fixed option list
    Select {
        selected: usize,
        options: Vec<&'static str>,
    },
}

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: &'static str,
    pub hint: &'static str,
    pub value: FieldValue,
}

impl FormField {
    fn number(id: FieldId, label: &'static str, hint: &'static str) -> Self {
        Self {
            id,
            label,
            hint,
            value: FieldValue::Number(String::new()),
        }
    }

    fn flag(id: FieldId, label: &'static str) -> Self {
        Self {
            id,
            label,
            hint: "Space to toggle",
            value: FieldValue::Flag(false),
        }
    }

    fn select<C: Choice>(id: FieldId, label: &'static str) -> Self {
        Self {
            id,
            label,
            hint: "←→ to change",
            value: FieldValue::Select {
                selected: 0,
                options: C::OPTIONS.iter().map(|o| o.label()).collect(),
            },
        }
    }
}

/// Assessment form state
pub struct FormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField::number(FieldId::Age, "Age", "years (25-84)"),
                FormField::select::<Sex>(FieldId::Sex, "Sex"),
                FormField::number(
                    FieldId::BloodPressure,
                    "Systolic BP",
                    "mmHg (80-200), optional",
                ),
                FormField::number(
                    FieldId::Cholesterol,
                    "Total Cholesterol",
                    "mmol/L (2-10), optional",
                ),
                FormField::number(FieldId::Bmi, "BMI", "kg/m² (15-50), optional"),
                FormField::flag(FieldId::Smoking, "Current Smoker"),
                FormField::flag(FieldId::Diabetes, "Diabetes"),
                FormField::flag(FieldId::AtrialFibrillation, "Atrial Fibrillation"),
                FormField::flag(FieldId::RheumatoidArthritis, "Rheumatoid Arthritis"),
                FormField::flag(FieldId::ChronicKidneyDisease, "Chronic Kidney Disease"),
                FormField::flag(FieldId::FamilyHistory, "Family History of CVD"),
                FormField::flag(FieldId::MentalHealth, "Mental Health Issues"),
                FormField::flag(FieldId::Migraine, "Migraine History"),
                FormField::select::<PhysicalActivity>(
                    FieldId::PhysicalActivity,
                    "Physical Activity",
                ),
                FormField::select::<DietQuality>(FieldId::DietQuality, "Diet Quality"),
                FormField::select::<AlcoholConsumption>(FieldId::Alcohol, "Alcohol"),
                FormField::select::<SleepDuration>(FieldId::Sleep, "Sleep Duration"),
            ],
            selected_field: 0,
            error_message: None,
        }
    }
}

impl FormState {
    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    fn current(&mut self) -> &mut FormField {
        &mut self.fields[self.selected_field]
    }

    /// Add a character to the current numeric field
    pub fn input_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }
        if let FieldValue::Number(text) = &mut self.current().value {
            text.push(c);
            self.error_message = None;
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        if let FieldValue::Number(text) = &mut self.current().value {
            text.pop();
        }
    }

    /// Reset the current field to its empty state
    pub fn clear_field(&mut self) {
        reset(&mut self.current().value);
    }

    /// Space: flip a checkbox or advance a select box.
    pub fn toggle(&mut self) {
        self.cycle(true);
    }

    /// Left/Right: step a select box (wrapping) or flip a checkbox.
    pub fn cycle(&mut self, forward: bool) {
        match &mut self.current().value {
            FieldValue::Flag(on) => *on = !*on,
            FieldValue::Select { selected, options } => {
                let len = options.len();
                *selected = if forward {
                    (*selected + 1) % len
                } else {
                    (*selected + len - 1) % len
                };
            }
            FieldValue::Number(_) => return,
        }
        self.error_message = None;
    }

    /// Wipe all field buffers from memory and reset values.
    ///
    /// Called right after a successful submission so typed health values
    /// do not linger in UI state.
    pub fn clear_sensitive(&mut self) {
        for field in &mut self.fields {
            reset(&mut field.value);
        }
        self.error_message = None;
        self.selected_field = 0;
    }

    /// Parse and validate the form into an [`AssessmentInput`].
    ///
    /// # Errors
    /// Returns a user-facing message naming the offending field(s).
    pub fn to_input(&self) -> Result<AssessmentInput, String> {
        let age_text = self.text(FieldId::Age).trim();
        if age_text.is_empty() {
            return Err("Age: Required".to_string());
        }
        let age: u32 = age_text
            .parse()
            .map_err(|_| "Age: Enter a whole number of years".to_string())?;

        let mut input = AssessmentInput::new(age, self.choice::<Sex>(FieldId::Sex)?);

        input.blood_pressure_mm_hg = self.measurement(FieldId::BloodPressure)?;
        input.cholesterol_mmol_l = self.measurement(FieldId::Cholesterol)?;
        input.bmi = self.measurement(FieldId::Bmi)?;

        input.smoking = self.flag(FieldId::Smoking);
        input.diabetes = self.flag(FieldId::Diabetes);
        input.atrial_fibrillation = self.flag(FieldId::AtrialFibrillation);
        input.rheumatoid_arthritis = self.flag(FieldId::RheumatoidArthritis);
        input.chronic_kidney_disease = self.flag(FieldId::ChronicKidneyDisease);
        input.family_history = self.flag(FieldId::FamilyHistory);
        input.mental_health_issues = self.flag(FieldId::MentalHealth);
        input.migraine_history = self.flag(FieldId::Migraine);

        input.physical_activity = self.choice(FieldId::PhysicalActivity)?;
        input.diet_quality = self.choice(FieldId::DietQuality)?;
        input.alcohol_consumption = self.choice(FieldId::Alcohol)?;
        input.sleep_duration = self.choice(FieldId::Sleep)?;

        input.validate().map_err(|errors| {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        })?;

        Ok(input)
    }

    /// Load sample data for testing (middle-aged smoker with raised vitals)
    pub fn load_sample_data(&mut self) {
        for field in &mut self.fields {
            match (&mut field.value, field.id) {
                (FieldValue::Number(text), id) => {
                    *text = match id {
                        FieldId::Age => "58",
                        FieldId::BloodPressure => "150",
                        FieldId::Cholesterol => "6.2",
                        FieldId::Bmi => "31.5",
                        _ => "",
                    }
                    .to_string();
                }
                (FieldValue::Flag(on), id) => {
                    *on = matches!(id, FieldId::Smoking | FieldId::FamilyHistory);
                }
                (FieldValue::Select { selected, options }, id) => {
                    let wanted = match id {
                        FieldId::Sex => Sex::Male.label(),
                        FieldId::PhysicalActivity => PhysicalActivity::Sedentary.label(),
                        FieldId::DietQuality => DietQuality::Unhealthy.label(),
                        FieldId::Alcohol => AlcoholConsumption::Occasionally.label(),
                        FieldId::Sleep => SleepDuration::LessThan6h.label(),
                        _ => continue,
                    };
                    *selected = options.iter().position(|o| *o == wanted).unwrap_or(0);
                }
            }
        }
        self.error_message = None;
    }

    fn value(&self, id: FieldId) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.id == id).map(|f| &f.value)
    }

    fn label(&self, id: FieldId) -> &'static str {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .map_or("Field", |f| f.label)
    }

    fn text(&self, id: FieldId) -> &str {
        match self.value(id) {
            Some(FieldValue::Number(text)) => text,
            _ => "",
        }
    }

    fn flag(&self, id: FieldId) -> bool {
        matches!(self.value(id), Some(FieldValue::Flag(true)))
    }

    fn measurement(&self, id: FieldId) -> Result<Option<f64>, String> {
        let text = self.text(id).trim();
        if text.is_empty() {
            return Ok(None);
        }
        text.parse()
            .map(Some)
            .map_err(|_| format!("{}: Invalid number", self.label(id)))
    }

    fn choice<C: Choice + Debug>(&self, id: FieldId) -> Result<C, String> {
        match self.value(id) {
            Some(FieldValue::Select { selected, options }) => match options.get(*selected) {
                Some(label) => C::parse_label(label).map_err(|e| e.to_string()),
                None => Ok(C::OPTIONS[0]),
            },
            _ => Ok(C::OPTIONS[0]),
        }
    }
}

fn reset(value: &mut FieldValue) {
    match value {
        FieldValue::Number(text) => text.zeroize(),
        FieldValue::Flag(on) => *on = false,
        FieldValue::Select { selected, .. } => *selected = 0,
    }
}

/// Render the assessment form
pub fn render_form(f: &mut Frame, area: Rect, state: &FormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        "Heart Health Assessment",
        "Enter what you know; blank measurements are left out",
    );
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &FormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;

    render_field_column(
        f,
        columns[0],
        " Health Profile ",
        &state.fields[..mid],
        0,
        state.selected_field,
    );
    render_field_column(
        f,
        columns[1],
        " Conditions & Lifestyle ",
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    title: &'static str,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let has_focus = (offset..offset + fields.len()).contains(&selected);
    let block = Block::default()
        .title(Span::styled(title, HeartTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(if has_focus {
            HeartTheme::border_focused()
        } else {
            HeartTheme::border()
        });

    let lines: Vec<Line> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| field_line(field, offset + i == selected))
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(field: &FormField, is_selected: bool) -> Line<'static> {
    let marker = if is_selected {
        Span::styled(" ▸ ", HeartTheme::focused())
    } else {
        Span::raw("   ")
    };
    let label_style = if is_selected {
        HeartTheme::focused()
    } else {
        HeartTheme::text_secondary()
    };

    let mut spans = vec![
        marker,
        Span::styled(format!("{:<24}", field.label), label_style),
    ];

    match &field.value {
        FieldValue::Number(text) if text.is_empty() => {
            spans.push(Span::styled(field.hint, HeartTheme::text_muted()));
        }
        FieldValue::Number(text) => {
            spans.push(Span::styled(text.clone(), HeartTheme::text()));
        }
        FieldValue::Flag(on) => {
            let (mark, style) = if *on {
                ("[x] Yes", HeartTheme::danger())
            } else {
                ("[ ] No", HeartTheme::text())
            };
            spans.push(Span::styled(mark, style));
        }
        FieldValue::Select { selected, options } => {
            let label = options.get(*selected).copied().unwrap_or_default();
            if is_selected {
                spans.push(Span::styled("◀ ", HeartTheme::cursor()));
                spans.push(Span::styled(label, HeartTheme::text()));
                spans.push(Span::styled(" ▶", HeartTheme::cursor()));
            } else {
                spans.push(Span::styled(label, HeartTheme::text()));
            }
        }
    }

    if is_selected {
        match field.value {
            FieldValue::Number(_) => spans.push(Span::styled("▌", HeartTheme::cursor())),
            _ => spans.push(Span::styled(
                format!("  {}", field.hint),
                HeartTheme::text_muted(),
            )),
        }
    }

    Line::from(spans)
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &FormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", HeartTheme::danger()),
            Span::styled(err.clone(), HeartTheme::danger()),
        ])
    } else {
        key_hints(&[
            ("↑↓", "Navigate"),
            ("Space/←→", "Change"),
            ("Enter", "Calculate"),
            ("S", "Sample Data"),
            ("Del", "Clear"),
            ("Esc", "Cancel"),
        ])
    };

    render_footer(f, area, content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ui::buffer_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn select(state: &mut FormState, id: FieldId) {
        state.selected_field = state
            .fields
            .iter()
            .position(|f| f.id == id)
            .expect("field exists");
    }

    fn type_text(state: &mut FormState, id: FieldId, text: &str) {
        select(state, id);
        state.clear_field();
        for c in text.chars() {
            state.input_char(c);
        }
    }

    #[test]
    fn test_form_has_one_row_per_input_attribute() {
        assert_eq!(FormState::default().fields.len(), 17);
    }

    #[test]
    fn test_sample_data_converts() {
        let mut state = FormState::default();
        state.load_sample_data();

        let input = state.to_input().expect("sample data is valid");
        assert_eq!(input.age, 58);
        assert_eq!(input.sex, Sex::Male);
        assert_eq!(input.blood_pressure_mm_hg, Some(150.0));
        assert_eq!(input.cholesterol_mmol_l, Some(6.2));
        assert_eq!(input.bmi, Some(31.5));
        assert!(input.smoking);
        assert!(input.family_history);
        assert!(!input.diabetes);
        assert_eq!(input.physical_activity, PhysicalActivity::Sedentary);
        assert_eq!(input.diet_quality, DietQuality::Unhealthy);
        assert_eq!(input.alcohol_consumption, AlcoholConsumption::Occasionally);
        assert_eq!(input.sleep_duration, SleepDuration::LessThan6h);
    }

    #[test]
    fn test_blank_measurements_are_absent() {
        let mut state = FormState::default();
        type_text(&mut state, FieldId::Age, "45");

        let input = state.to_input().expect("age alone is enough");
        assert_eq!(input, AssessmentInput::new(45, Sex::Male));
    }

    #[test]
    fn test_missing_age_is_rejected() {
        let state = FormState::default();
        assert_eq!(state.to_input().unwrap_err(), "Age: Required");
    }

    #[test]
    fn test_out_of_range_values_are_reported() {
        let mut state = FormState::default();
        type_text(&mut state, FieldId::Age, "90");
        type_text(&mut state, FieldId::BloodPressure, "250");

        let err = state.to_input().unwrap_err();
        assert!(err.contains("Age 90"), "{err}");
        assert!(err.contains("Blood pressure 250"), "{err}");
    }

    #[test]
    fn test_malformed_number_names_field() {
        let mut state = FormState::default();
        type_text(&mut state, FieldId::Age, "50");
        type_text(&mut state, FieldId::Bmi, "2..5");

        assert_eq!(state.to_input().unwrap_err(), "BMI: Invalid number");
    }

    #[test]
    fn test_input_char_only_accepts_numbers_in_numeric_fields() {
        let mut state = FormState::default();
        state.input_char('a');
        state.input_char('4');
        state.input_char('-');
        assert_eq!(state.fields[0].value, FieldValue::Number("4".to_string()));

        select(&mut state, FieldId::Smoking);
        state.input_char('1');
        assert_eq!(state.fields[state.selected_field].value, FieldValue::Flag(false));
    }

    #[test]
    fn test_toggle_and_cycle() {
        let mut state = FormState::default();

        select(&mut state, FieldId::Diabetes);
        state.toggle();
        assert!(state.flag(FieldId::Diabetes));
        state.cycle(false);
        assert!(!state.flag(FieldId::Diabetes));

        select(&mut state, FieldId::Sleep);
        state.cycle(false);
        assert_eq!(
            state.choice::<SleepDuration>(FieldId::Sleep),
            Ok(SleepDuration::MoreThan8h)
        );
        state.cycle(true);
        assert_eq!(
            state.choice::<SleepDuration>(FieldId::Sleep),
            Ok(SleepDuration::NotSpecified)
        );
    }

    #[test]
    fn test_clear_sensitive_wipes_everything() {
        let mut state = FormState::default();
        state.load_sample_data();
        state.selected_field = 5;
        state.error_message = Some("x".to_string());

        state.clear_sensitive();

        assert_eq!(state.selected_field, 0);
        assert!(state.error_message.is_none());
        for field in &state.fields {
            match &field.value {
                FieldValue::Number(text) => assert!(text.is_empty()),
                FieldValue::Flag(on) => assert!(!on),
                FieldValue::Select { selected, .. } => assert_eq!(*selected, 0),
            }
        }
    }

    #[test]
    fn test_render_shows_fields_and_error() {
        let mut state = FormState::default();
        state.error_message = Some("Age: Required".to_string());

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| render_form(f, f.area(), &state))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Systolic BP"));
        assert!(text.contains("Sleep Duration"));
        assert!(text.contains("Age: Required"));
    }
}
