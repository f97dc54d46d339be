//! Submission payloads and their outcomes
//!
//! Requests are built from the form state synchronously. Any problem found
//! here is returned as a [`FormError`] and the async boundary is never
//! reached.

use crate::error::FormError;
use crate::state::{AudienceMode, FieldId, LoginForm, RegisterForm};
use chrono::NaiveDate;
use serde::Serialize;

pub const LOGIN_SUCCESS: &str = "Login successful! Redirecting to dashboard...";
pub const LOGIN_FAILURE: &str = "Please enter valid credentials.";
pub const PATIENT_REGISTERED: &str =
    "Registration successful! You can now log in to your account.";
pub const PRACTITIONER_REGISTERED: &str = "Registration submitted! Your account will be reviewed and approved within 24-48 hours. You will receive an email notification once approved.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

/// Credentials entered on the login tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginRequest {
    pub fn from_form(form: &LoginForm) -> Result<Self, FormError> {
        let email = form.email.as_text().trim();
        let password = form.password.as_text();
        if email.is_empty() || password.is_empty() {
            return Err(FormError::CredentialsMissing);
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
            remember: form.remember.as_flag(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PractitionerDetails {
    pub specialization: String,
    pub license_number: String,
    pub experience: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDetails {
    pub date_of_birth: NaiveDate,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

/// Audience-specific part of a registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AudienceDetails {
    Practitioner(PractitionerDetails),
    Patient(PatientDetails),
}

/// Everything entered on the registration tab for the active audience
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub user_type: AudienceMode,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(flatten)]
    pub details: AudienceDetails,
}

impl RegistrationRequest {
    /// Check the form and collect the active audience's fields.
    ///
    /// Order: required fields, then password confirmation, then field parsing.
    pub fn from_form(form: &RegisterForm) -> Result<Self, FormError> {
        if let Some(field) = form.first_missing_required() {
            return Err(FormError::required(field));
        }
        if !form.passwords_match() {
            return Err(FormError::validation(
                FieldId::ConfirmPassword,
                PASSWORDS_DO_NOT_MATCH,
            ));
        }

        let details = match form.mode() {
            AudienceMode::Practitioner => {
                let experience = form.experience.as_text().parse::<u32>().map_err(|_| {
                    FormError::validation(
                        FieldId::Experience,
                        "Years of experience must be a whole number.",
                    )
                })?;
                AudienceDetails::Practitioner(PractitionerDetails {
                    specialization: form.specialization.as_text().to_string(),
                    license_number: form.license_number.as_text().trim().to_string(),
                    experience,
                })
            }
            AudienceMode::Patient => {
                let date_of_birth =
                    NaiveDate::parse_from_str(form.date_of_birth.as_text().trim(), "%Y-%m-%d")
                        .map_err(|_| {
                            FormError::validation(
                                FieldId::DateOfBirth,
                                "Date of birth must be a valid date (YYYY-MM-DD).",
                            )
                        })?;
                let emergency_contact = Some(form.emergency_contact.as_text().trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);
                AudienceDetails::Patient(PatientDetails {
                    date_of_birth,
                    gender: form.gender.as_text().to_string(),
                    emergency_contact,
                })
            }
        };

        Ok(Self {
            user_type: form.mode(),
            first_name: form.first_name.as_text().trim().to_string(),
            last_name: form.last_name.as_text().trim().to_string(),
            email: form.email.as_text().trim().to_string(),
            phone: form.phone.as_text().trim().to_string(),
            password: form.password.as_text().to_string(),
            details,
        })
    }
}

/// What the submission boundary receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionRequest {
    Login(LoginRequest),
    Registration(RegistrationRequest),
}

impl SubmissionRequest {
    pub fn kind(&self) -> SubmissionKind {
        match self {
            Self::Login(_) => SubmissionKind::Login,
            Self::Registration(_) => SubmissionKind::Registration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Login,
    Registration,
}

impl SubmissionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Signing in...",
            Self::Registration => "Creating account...",
        }
    }
}

/// What the UI does once the success message is dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextAction {
    /// Switch to the login tab with the email filled in
    ShowLogin { prefill_email: String },
    /// Just close the message
    Close,
    /// Leave the form for the given destination
    Navigate { destination: String },
}

/// Terminal result of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { message: String, next: NextAction },
    Failure { message: String },
}

impl Outcome {
    pub fn login_success(destination: impl Into<String>) -> Self {
        Self::Success {
            message: LOGIN_SUCCESS.to_string(),
            next: NextAction::Navigate {
                destination: destination.into(),
            },
        }
    }

    pub fn registration_success(request: &RegistrationRequest) -> Self {
        match request.user_type {
            AudienceMode::Patient => Self::Success {
                message: PATIENT_REGISTERED.to_string(),
                next: NextAction::ShowLogin {
                    prefill_email: request.email.clone(),
                },
            },
            AudienceMode::Practitioner => Self::Success {
                message: PRACTITIONER_REGISTERED.to_string(),
                next: NextAction::Close,
            },
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }
}
