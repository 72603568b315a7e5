//! Plain-text renderings of an assessment: the downloadable health report
//! and the doctor-visit discussion guide.

use std::fmt::Write as _;

use crate::domain::{Assessment, RiskFactor};

/// Questions suggested for the next appointment.
pub const DOCTOR_QUESTIONS: [&str; 5] = [
    "Would I benefit from medication to lower my risk?",
    "How often should I have my blood pressure/cholesterol checked?",
    "What lifestyle changes would be most beneficial for my specific situation?",
    "Are there any specialized tests I should consider?",
    "How does my family history affect my risk?",
];

/// Advice shown to everyone regardless of their risk factors, grouped by
/// panel heading.
pub const GENERAL_ADVICE: [(&str, [&str; 4]); 4] = [
    (
        "Regular Monitoring",
        [
            "Check blood pressure at least once a year",
            "Have cholesterol tested every 4-6 years",
            "Regular diabetes screening",
            "Annual physical examination",
        ],
    ),
    (
        "Mental Well-being",
        [
            "Practice stress management techniques",
            "Seek support for mental health concerns",
            "Maintain social connections",
            "Get adequate sleep",
        ],
    ),
    (
        "Heart-Healthy Lifestyle",
        [
            "Balanced diet rich in fruits, vegetables, and whole grains",
            "Regular physical activity (150+ minutes per week)",
            "Maintain healthy weight",
            "Avoid tobacco and excessive alcohol",
        ],
    ),
    (
        "Medical Considerations",
        [
            "Take medications as prescribed",
            "Discuss aspirin therapy with your doctor if appropriate",
            "Know your family history",
            "Understand symptoms of heart disease and when to seek help",
        ],
    ),
];

const NONE_IDENTIFIED: &str = "None identified";

fn top_factor_labels(assessment: &Assessment) -> Vec<&'static str> {
    assessment
        .result
        .top_factors()
        .into_iter()
        .map(RiskFactor::label)
        .collect()
}

/// Render the Markdown "Heart Health Report".
#[must_use]
pub fn render_markdown(assessment: &Assessment) -> String {
    let top = top_factor_labels(assessment);
    let top = if top.is_empty() {
        NONE_IDENTIFIED.to_string()
    } else {
        top.join(", ")
    };

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "# Heart Health Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Risk Assessment");
    let _ = writeln!(
        out,
        "- 10-Year Risk: {:.2}% ({})",
        assessment.result.percentage,
        assessment.category()
    );
    let _ = writeln!(out, "- Top Risk Factors: {top}");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Recommendations");
    for rec in &assessment.recommendations {
        let _ = writeln!(out, "- {}: {}", rec.title, rec.impact_statement);
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Generated on {}",
        assessment.assessed_at.format("%Y-%m-%d")
    );
    out
}

/// Render the discussion guide for a healthcare provider visit.
#[must_use]
pub fn render_discussion_guide(assessment: &Assessment) -> String {
    let top = top_factor_labels(assessment);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "1. My calculated 10-year cardiovascular risk is {:.2}% ({} risk)",
        assessment.result.percentage,
        assessment.category().label().to_lowercase()
    );
    let _ = writeln!(out, "2. My most significant risk factors are:");
    if top.is_empty() {
        let _ = writeln!(out, "    - {NONE_IDENTIFIED}");
    }
    for label in top {
        let _ = writeln!(out, "    - {label}");
    }
    let _ = writeln!(out, "3. Questions to ask my doctor:");
    for question in DOCTOR_QUESTIONS {
        let _ = writeln!(out, "    - {question}");
    }
    out
}
