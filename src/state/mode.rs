//! Audience selection and the field requirements it implies

use super::{validate_field, FieldId, FieldKind};
use serde::{Deserialize, Serialize};

/// Which persona the registration form is filled in for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceMode {
    #[default]
    Patient,
    Practitioner,
}

impl AudienceMode {
    #[cfg(test)]
    pub const ALL: [AudienceMode; 2] = [AudienceMode::Patient, AudienceMode::Practitioner];

    pub fn toggle(&self) -> Self {
        match self {
            Self::Patient => Self::Practitioner,
            Self::Practitioner => Self::Patient,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Patient => "Patient",
            Self::Practitioner => "Practitioner",
        }
    }
}

/// Required flag for every mode-specific field.
///
/// Only ever produced by [`FieldRequirement::for_mode`], so it can never
/// disagree with the mode it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRequirement {
    entries: Vec<(FieldId, bool)>,
}

impl FieldRequirement {
    pub fn for_mode(mode: AudienceMode) -> Self {
        let practitioner = mode == AudienceMode::Practitioner;
        let entries = FieldId::PRACTITIONER_FIELDS
            .iter()
            .map(|field| (*field, practitioner))
            .chain(
                FieldId::PATIENT_FIELDS
                    .iter()
                    .map(|field| (*field, !practitioner)),
            )
            .collect();
        Self { entries }
    }

    /// Required flag for a field; fields outside the mapping are never required here
    pub fn is_required(&self, field: FieldId) -> bool {
        self.entries
            .iter()
            .find(|(id, _)| *id == field)
            .is_some_and(|(_, required)| *required)
    }

    /// Look up by string identifier
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(id, _)| id.as_str() == name)
            .map(|(_, required)| *required)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, bool)> + '_ {
        self.entries.iter().copied()
    }

    /// Fields that are required under the mode this was derived from
    pub fn required_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.iter()
            .filter_map(|(field, required)| required.then_some(field))
    }
}

/// Single source of truth for the active audience
#[derive(Debug, Clone, Default)]
pub struct FormModeController {
    mode: AudienceMode,
}

impl FormModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AudienceMode {
        self.mode
    }

    /// Switch audience and return the requirements the UI should apply
    pub fn set_mode(&mut self, mode: AudienceMode) -> FieldRequirement {
        self.mode = mode;
        FieldRequirement::for_mode(mode)
    }

    /// Requirements for the current audience
    pub fn requirements(&self) -> FieldRequirement {
        FieldRequirement::for_mode(self.mode)
    }

    /// Whether the practitioner review notice should be shown
    pub fn shows_review_notice(&self) -> bool {
        self.mode == AudienceMode::Practitioner
    }

    pub fn validate_field(&self, kind: FieldKind, value: &str, context: Option<&str>) -> bool {
        validate_field(kind, value, context)
    }
}
