//! Submit-time validation of the application form
//!
//! Every rule runs on every submit and owns exactly one field, so a failing
//! rule never hides the result of another.

use super::field::{FieldId, Position};
use super::ApplicationValues;
use chrono::NaiveDateTime;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid phone regex"));

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid url regex"));

/// Accepted layouts for the interview time, `T`-separated first
const INTERVIEW_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// A message shown under a field after a failed submit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Full Name is required")]
    FullNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email address is invalid")]
    EmailInvalid,
    #[error("Phone Number is required")]
    PhoneNumberRequired,
    #[error("Phone Number must be a valid number")]
    PhoneNumberInvalid,
    #[error("Relevant Experience is required")]
    RelevantExperienceRequired,
    #[error("Relevant Experience must be a number greater than 0")]
    RelevantExperienceInvalid,
    #[error("Portfolio URL is required")]
    PortfolioUrlRequired,
    #[error("Portfolio URL must be a valid URL")]
    PortfolioUrlInvalid,
    #[error("Management Experience is required")]
    ManagementExperienceRequired,
    #[error("At least one skill must be selected")]
    SkillsRequired,
    #[error("Preferred Interview Time is required")]
    InterviewTimeRequired,
    #[error("Preferred Interview Time must be a valid date and time")]
    InterviewTimeInvalid,
}

/// Field → message, rebuilt from scratch on each submit attempt
pub type ErrorMap = BTreeMap<FieldId, FieldError>;

/// Run every rule against the values and collect the failures
pub fn validate(values: &ApplicationValues) -> ErrorMap {
    let checks = [
        (FieldId::FullName, check_full_name(values)),
        (FieldId::Email, check_email(values)),
        (FieldId::PhoneNumber, check_phone_number(values)),
        (FieldId::RelevantExperience, check_relevant_experience(values)),
        (FieldId::PortfolioUrl, check_portfolio_url(values)),
        (
            FieldId::ManagementExperience,
            check_management_experience(values),
        ),
        (FieldId::AdditionalSkills, check_skills(values)),
        (
            FieldId::PreferredInterviewTime,
            check_interview_time(values),
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(field, result)| result.map(|err| (field, err)))
        .collect()
}

fn check_full_name(values: &ApplicationValues) -> Option<FieldError> {
    values
        .full_name
        .is_empty()
        .then_some(FieldError::FullNameRequired)
}

fn check_email(values: &ApplicationValues) -> Option<FieldError> {
    if values.email.is_empty() {
        Some(FieldError::EmailRequired)
    } else if !EMAIL_PATTERN.is_match(&values.email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    }
}

fn check_phone_number(values: &ApplicationValues) -> Option<FieldError> {
    if values.phone_number.is_empty() {
        Some(FieldError::PhoneNumberRequired)
    } else if !PHONE_PATTERN.is_match(&values.phone_number) {
        Some(FieldError::PhoneNumberInvalid)
    } else {
        None
    }
}

fn check_relevant_experience(values: &ApplicationValues) -> Option<FieldError> {
    if !matches!(
        values.position,
        Some(Position::Developer) | Some(Position::Designer)
    ) {
        return None;
    }
    if values.relevant_experience.is_empty() {
        return Some(FieldError::RelevantExperienceRequired);
    }
    match parse_years(&values.relevant_experience) {
        Some(years) if years > 0.0 => None,
        _ => Some(FieldError::RelevantExperienceInvalid),
    }
}

fn check_portfolio_url(values: &ApplicationValues) -> Option<FieldError> {
    if values.position != Some(Position::Designer) {
        return None;
    }
    if values.portfolio_url.is_empty() {
        Some(FieldError::PortfolioUrlRequired)
    } else if !URL_PATTERN.is_match(&values.portfolio_url) {
        Some(FieldError::PortfolioUrlInvalid)
    } else {
        None
    }
}

fn check_management_experience(values: &ApplicationValues) -> Option<FieldError> {
    (values.position == Some(Position::Manager) && values.management_experience.is_empty())
        .then_some(FieldError::ManagementExperienceRequired)
}

fn check_skills(values: &ApplicationValues) -> Option<FieldError> {
    values
        .additional_skills
        .is_empty()
        .then_some(FieldError::SkillsRequired)
}

fn check_interview_time(values: &ApplicationValues) -> Option<FieldError> {
    if values.preferred_interview_time.is_empty() {
        Some(FieldError::InterviewTimeRequired)
    } else if parse_interview_time(&values.preferred_interview_time).is_none() {
        Some(FieldError::InterviewTimeInvalid)
    } else {
        None
    }
}

/// Parse a years-of-experience value; rejects NaN and infinities
fn parse_years(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|years| years.is_finite())
}

/// Parse a `YYYY-MM-DDTHH:MM` date-time as entered in the interview field
pub fn parse_interview_time(value: &str) -> Option<NaiveDateTime> {
    INTERVIEW_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok())
}
