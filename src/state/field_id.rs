//! Identifiers for every input on the login and registration forms

use super::AudienceMode;

/// A single input on one of the two forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    // Login form
    LoginEmail,
    LoginPassword,
    Remember,

    // Registration form, shared
    UserType,
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,

    // Registration form, practitioner only
    Specialization,
    LicenseNumber,
    Experience,

    // Registration form, patient only
    DateOfBirth,
    Gender,
    EmergencyContact,
}

impl FieldId {
    /// Fields that only exist for practitioners
    pub const PRACTITIONER_FIELDS: [FieldId; 3] = [
        FieldId::Specialization,
        FieldId::LicenseNumber,
        FieldId::Experience,
    ];

    /// Fields that only exist for patients and must be filled in
    pub const PATIENT_FIELDS: [FieldId; 2] = [FieldId::DateOfBirth, FieldId::Gender];

    /// Stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoginEmail => "login_email",
            Self::LoginPassword => "login_password",
            Self::Remember => "remember",
            Self::UserType => "user_type",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
            Self::Specialization => "specialization",
            Self::LicenseNumber => "license_number",
            Self::Experience => "experience",
            Self::DateOfBirth => "date_of_birth",
            Self::Gender => "gender",
            Self::EmergencyContact => "emergency_contact",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoginEmail | Self::Email => "Email",
            Self::LoginPassword | Self::Password => "Password",
            Self::Remember => "Remember me",
            Self::UserType => "I am a",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Phone => "Phone",
            Self::ConfirmPassword => "Confirm Password",
            Self::Specialization => "Specialization",
            Self::LicenseNumber => "License Number",
            Self::Experience => "Years of Experience",
            Self::DateOfBirth => "Date of Birth (YYYY-MM-DD)",
            Self::Gender => "Gender",
            Self::EmergencyContact => "Emergency Contact (optional)",
        }
    }

    /// Short name for messages, without the input hints carried by `label`
    pub fn name(&self) -> &'static str {
        match self {
            Self::DateOfBirth => "Date of Birth",
            Self::EmergencyContact => "Emergency Contact",
            _ => self.label(),
        }
    }

    /// The audience this field belongs to, `None` when it is shown to everyone
    pub fn audience(&self) -> Option<AudienceMode> {
        match self {
            Self::Specialization | Self::LicenseNumber | Self::Experience => {
                Some(AudienceMode::Practitioner)
            }
            Self::DateOfBirth | Self::Gender | Self::EmergencyContact => {
                Some(AudienceMode::Patient)
            }
            _ => None,
        }
    }

    /// Whether the field is shown under the given mode
    pub fn is_visible_in(&self, mode: AudienceMode) -> bool {
        !matches!(self.audience(), Some(audience) if audience != mode)
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
