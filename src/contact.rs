//! Contact form validation and submission lifecycle.

use serde::Serialize;
use std::fmt;

pub const FIELD_ERROR_BORDER_BOTTOM: &str = "#ff6b6b";
pub const FIELD_ERROR_SHADOW: &str = "0 2px 8px rgba(255, 107, 107, 0.3)";
pub const LABEL_LIFT_TRANSFORM: &str = "translateY(-20px) scale(0.8)";
pub const LABEL_LIFT_COLOR: &str = "var(--primary-100)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub required: bool,
}

impl FormField {
    pub fn new(name: impl Into<String>, value: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Missing,
}

/// Status of every required field, in form order. Optional fields are not
/// reported.
pub fn validate(fields: &[FormField]) -> Vec<(usize, FieldStatus)> {
    fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.required)
        .map(|(index, field)| {
            let status = if field.is_blank() {
                FieldStatus::Missing
            } else {
                FieldStatus::Valid
            };
            (index, status)
        })
        .collect()
}

/// Inline `(property, value)` pairs for a reported field. A valid field
/// clears exactly the properties an error sets.
pub fn field_styles(status: FieldStatus) -> [(&'static str, &'static str); 2] {
    match status {
        FieldStatus::Missing => [
            ("border-bottom-color", FIELD_ERROR_BORDER_BOTTOM),
            ("box-shadow", FIELD_ERROR_SHADOW),
        ],
        FieldStatus::Valid => [("border-bottom-color", ""), ("box-shadow", "")],
    }
}

pub fn is_valid(report: &[(usize, FieldStatus)]) -> bool {
    report.iter().all(|(_, status)| *status == FieldStatus::Valid)
}

/// JSON body posted when the form names a real endpoint.
#[derive(Debug, Serialize)]
pub struct ContactMessage<'a> {
    pub fields: Vec<(&'a str, &'a str)>,
}

impl<'a> ContactMessage<'a> {
    pub fn from_fields(fields: &'a [FormField]) -> Self {
        Self {
            fields: fields
                .iter()
                .filter(|field| !field.name.is_empty())
                .map(|field| (field.name.as_str(), field.value.trim()))
                .collect(),
        }
    }
}

/// Where a validated form goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transport {
    /// Fixed delay, always succeeds.
    Simulated,
    /// POST the message as JSON.
    Endpoint(String),
}

impl Transport {
    pub fn from_attribute(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim).filter(|value| !value.is_empty()) {
            Some(url) => Self::Endpoint(url.to_string()),
            None => Self::Simulated,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Network(String),
    Rejected(u16),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(message) => write!(f, "could not reach the server: {message}"),
            Self::Rejected(status) => write!(f, "the server rejected the message (HTTP {status})"),
        }
    }
}

impl std::error::Error for SubmitError {}

const SUBMIT_FAILURE_MESSAGE: &str = "There was an error sending your message. Please try again.";

impl SubmitError {
    /// What the visitor is told; the detail only goes to the log.
    pub fn alert_message(&self) -> &'static str {
        SUBMIT_FAILURE_MESSAGE
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Sending,
    Sent,
    Failed(SubmitError),
}

/// Submit-button lifecycle. A second submit while one is in flight is refused.
#[derive(Debug)]
pub struct Submission {
    phase: SubmissionPhase,
}

impl Default for Submission {
    fn default() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
        }
    }
}

impl Submission {
    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// The button shows the spinner and stays disabled while sending.
    pub fn is_loading(&self) -> bool {
        self.phase == SubmissionPhase::Sending
    }

    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.phase = SubmissionPhase::Sending;
        true
    }

    pub fn finish(&mut self, outcome: Result<(), SubmitError>) {
        self.phase = match outcome {
            Ok(()) => SubmissionPhase::Sent,
            Err(err) => SubmissionPhase::Failed(err),
        };
    }
}
