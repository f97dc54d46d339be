//! Form-level errors surfaced to the user

use crate::state::FieldId;

/// Recoverable problems that stop a submission before it starts.
///
/// The `Display` text is what the error toast shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{reason}")]
    ValidationFailed { field: FieldId, reason: String },

    #[error("Please enter valid credentials.")]
    CredentialsMissing,
}

impl FormError {
    pub fn validation(field: FieldId, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field,
            reason: reason.into(),
        }
    }

    /// A required field was left empty
    pub fn required(field: FieldId) -> Self {
        Self::validation(field, format!("{} is required.", field.name()))
    }

    /// The field to focus so the user can correct the problem
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Self::ValidationFailed { field, .. } => Some(*field),
            Self::CredentialsMissing => None,
        }
    }
}
