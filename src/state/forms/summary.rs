//! Snapshot of a successfully submitted application

use super::field::FieldId;
use super::ApplicationValues;
use chrono::{DateTime, Local};

/// Values captured at the last successful submit
#[derive(Debug, Clone)]
pub struct Summary {
    pub values: ApplicationValues,
    pub submitted_at: DateTime<Local>,
}

impl Summary {
    pub fn new(values: ApplicationValues) -> Self {
        Self {
            values,
            submitted_at: Local::now(),
        }
    }

    /// Label/value rows, limited to the fields relevant to the chosen position
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        self.values
            .visible_fields()
            .into_iter()
            .map(|field| (field.summary_label(), self.display_value(field)))
            .collect()
    }

    fn display_value(&self, field: FieldId) -> String {
        match field {
            FieldId::Position => match self.values.position {
                Some(position) => position.label().to_string(),
                None => String::new(),
            },
            FieldId::AdditionalSkills => self
                .values
                .additional_skills
                .iter()
                .map(|s| s.label())
                .collect::<Vec<_>>()
                .join(", "),
            text => self.values.text(text).unwrap_or_default().to_string(),
        }
    }

    /// Plain-text rendering used for the clipboard
    pub fn to_text(&self) -> String {
        let mut out = String::from("Form Summary\n");
        for (label, value) in self.rows() {
            out.push_str(&format!("{label}: {value}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::{Position, Skill};
    use pretty_assertions::assert_eq;

    fn values(position: Option<Position>) -> ApplicationValues {
        ApplicationValues {
            full_name: "Grace Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            phone_number: "5550100".to_string(),
            position,
            relevant_experience: "12".to_string(),
            portfolio_url: "https://grace.dev".to_string(),
            management_experience: "Ran the COBOL committee".to_string(),
            additional_skills: vec![Skill::Python, Skill::JavaScript],
            preferred_interview_time: "2026-11-03T09:00".to_string(),
        }
    }

    fn owned(rows: Vec<(&'static str, String)>) -> Vec<(String, String)> {
        rows.into_iter().map(|(l, v)| (l.to_string(), v)).collect()
    }

    fn expected(rows: &[(&str, &str)]) -> Vec<(String, String)> {
        rows.iter()
            .map(|(l, v)| (l.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_developer_summary() {
        let summary = Summary::new(values(Some(Position::Developer)));
        assert_eq!(
            owned(summary.rows()),
            expected(&[
                ("Full Name", "Grace Hopper"),
                ("Email", "grace@navy.mil"),
                ("Phone Number", "5550100"),
                ("Applying for Position", "Developer"),
                ("Relevant Experience", "12"),
                ("Additional Skills", "Python, JavaScript"),
                ("Preferred Interview Time", "2026-11-03T09:00"),
            ])
        );
    }

    #[test]
    fn test_designer_summary() {
        let summary = Summary::new(values(Some(Position::Designer)));
        assert_eq!(
            owned(summary.rows()),
            expected(&[
                ("Full Name", "Grace Hopper"),
                ("Email", "grace@navy.mil"),
                ("Phone Number", "5550100"),
                ("Applying for Position", "Designer"),
                ("Relevant Experience", "12"),
                ("Portfolio URL", "https://grace.dev"),
                ("Additional Skills", "Python, JavaScript"),
                ("Preferred Interview Time", "2026-11-03T09:00"),
            ])
        );
    }

    #[test]
    fn test_manager_summary() {
        let summary = Summary::new(values(Some(Position::Manager)));
        assert_eq!(
            owned(summary.rows()),
            expected(&[
                ("Full Name", "Grace Hopper"),
                ("Email", "grace@navy.mil"),
                ("Phone Number", "5550100"),
                ("Applying for Position", "Manager"),
                ("Management Experience", "Ran the COBOL committee"),
                ("Additional Skills", "Python, JavaScript"),
                ("Preferred Interview Time", "2026-11-03T09:00"),
            ])
        );
    }

    #[test]
    fn test_no_position_shows_blank_position() {
        let summary = Summary::new(values(None));
        let rows = summary.rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[3], ("Applying for Position", String::new()));
    }

    #[test]
    fn test_to_text() {
        let summary = Summary::new(values(Some(Position::Manager)));
        let text = summary.to_text();
        assert!(text.starts_with("Form Summary\n"));
        assert!(text.contains("Management Experience: Ran the COBOL committee\n"));
        assert!(!text.contains("Portfolio URL"));
    }
}
