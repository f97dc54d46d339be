//! Form field value objects

use crate::state::{FieldCheck, FieldId, FieldKind};

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// One of a fixed set of options, `None` until the user picks one
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
    /// Render the value as bullets
    pub is_secret: bool,
    /// Only digits are accepted
    pub is_numeric: bool,
    /// Format check run when the field loses focus
    pub validation: Option<FieldKind>,
    /// Result of the last check
    pub check: FieldCheck,
    pub visible: bool,
    pub required: bool,
}

impl FormField {
    fn new(id: FieldId, value: FieldValue) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value,
            is_secret: false,
            is_numeric: false,
            validation: None,
            check: FieldCheck::Unchecked,
            visible: true,
            required: false,
        }
    }

    /// Create a new text field
    pub fn text(id: FieldId) -> Self {
        Self::new(id, FieldValue::Text(String::new()))
    }

    /// Create a new masked text field
    pub fn secret(id: FieldId) -> Self {
        Self {
            is_secret: true,
            ..Self::text(id)
        }
    }

    /// Create a new choice field with nothing selected
    pub fn choice(id: FieldId, options: &'static [&'static str]) -> Self {
        Self::new(
            id,
            FieldValue::Choice {
                options,
                selected: None,
            },
        )
    }

    /// Create a new on/off field
    pub fn flag(id: FieldId) -> Self {
        Self::new(id, FieldValue::Flag(false))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn numeric(mut self) -> Self {
        self.is_numeric = true;
        self
    }

    pub fn validated_as(mut self, kind: FieldKind) -> Self {
        self.validation = Some(kind);
        self
    }

    /// Get the text value (returns the selected option for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { .. } => self.selected_option().unwrap_or(""),
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the selected option of a choice field
    pub fn selected_option(&self) -> Option<&'static str> {
        match &self.value {
            FieldValue::Choice { options, selected } => selected.and_then(|i| options.get(i)).copied(),
            _ => None,
        }
    }

    /// Get the flag value (false for non-flag fields)
    pub fn as_flag(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    /// True when a required field would block submission
    pub fn is_blank(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Choice { selected, .. } => selected.is_none(),
            FieldValue::Flag(_) => false,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Select an option by its label, ignoring unknown labels
    pub fn select(&mut self, label: &str) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if let Some(index) = options.iter().position(|o| *o == label) {
                *selected = Some(index);
            }
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            if self.is_numeric && !c.is_ascii_digit() {
                return;
            }
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Move a choice field to the next option (wraps around)
    pub fn next_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(selected.map_or(0, |i| (i + 1) % options.len()));
        }
    }

    /// Move a choice field to the previous option (wraps around)
    pub fn prev_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                None | Some(0) => options.len() - 1,
                Some(i) => i - 1,
            });
        }
    }

    /// Flip a flag field
    pub fn toggle(&mut self) {
        if let FieldValue::Flag(on) = &mut self.value {
            *on = !*on;
        }
    }

    /// Clear the field value and its check status
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
            FieldValue::Flag(on) => *on = false,
        }
        self.check = FieldCheck::Unchecked;
    }

    /// Run the blur-time check, if the field has one
    pub fn blur(&mut self) {
        if let Some(kind) = self.validation {
            if kind != FieldKind::PasswordConfirmation {
                self.check = FieldCheck::on_blur(kind, self.as_text(), None);
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) if self.is_secret => "•".repeat(s.chars().count()),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { .. } => match self.selected_option() {
                Some(option) => format!("‹ {option} ›"),
                None => "‹ select ›".to_string(),
            },
            FieldValue::Flag(true) => "[x]".to_string(),
            FieldValue::Flag(false) => "[ ]".to_string(),
        }
    }
}
