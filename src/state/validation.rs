//! Field format checks
//!
//! Every check is a pure function of its arguments. The UI decides when to
//! run them: email, phone and password on blur, the confirmation on every
//! keystroke once it has been touched.

use regex::Regex;

/// Hint shown under the password field after a failed strength check
pub const PASSWORD_REQUIREMENTS: &str =
    "Password must contain at least 8 characters, 1 uppercase, 1 lowercase, and 1 number";

/// Kind of format check to run against a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Phone,
    Password,
    PasswordConfirmation,
}

/// Run a single format check.
///
/// `context` is only read for [`FieldKind::PasswordConfirmation`], where it
/// carries the primary password. A missing context compares against "".
pub fn validate_field(kind: FieldKind, value: &str, context: Option<&str>) -> bool {
    match kind {
        FieldKind::Email => valid_email(value),
        FieldKind::Phone => valid_phone(value),
        FieldKind::Password => valid_password(value),
        FieldKind::PasswordConfirmation => value == context.unwrap_or_default(),
    }
}

fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").is_ok_and(|re| re.is_match(email))
}

fn valid_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    Regex::new(r"^\+?[1-9][0-9]{0,15}$").is_ok_and(|re| re.is_match(&compact))
}

fn valid_password(password: &str) -> bool {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    has_lower
        && has_upper
        && has_digit
        && Regex::new(r"^[a-zA-Z0-9@$!%*?&]{8,}$").is_ok_and(|re| re.is_match(password))
}

/// Display status of a field after its last check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldCheck {
    /// Nothing entered yet, or never checked
    #[default]
    Unchecked,
    Valid,
    /// `show_requirements` asks the UI to surface the password hint
    Invalid { show_requirements: bool },
}

impl FieldCheck {
    /// Status after the field loses focus. Empty values stay unchecked.
    pub fn on_blur(kind: FieldKind, value: &str, context: Option<&str>) -> Self {
        if value.is_empty() {
            return Self::Unchecked;
        }
        Self::from_result(kind, validate_field(kind, value, context))
    }

    /// Status after a keystroke. Empty values are checked too.
    pub fn on_input(kind: FieldKind, value: &str, context: Option<&str>) -> Self {
        Self::from_result(kind, validate_field(kind, value, context))
    }

    fn from_result(kind: FieldKind, passed: bool) -> Self {
        if passed {
            Self::Valid
        } else {
            Self::Invalid {
                show_requirements: kind == FieldKind::Password,
            }
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    /// Whether the password requirements hint should be visible
    pub fn shows_requirements(&self) -> bool {
        matches!(
            self,
            Self::Invalid {
                show_requirements: true
            }
        )
    }
}
