//! Form state management and form structs

use super::field::FormField;
use crate::state::{
    AudienceMode, FieldCheck, FieldId, FieldKind, FieldRequirement, FormModeController,
};

/// Options offered for the practitioner specialization
pub const SPECIALIZATIONS: &[&str] = &[
    "General Practice",
    "Cardiology",
    "Dermatology",
    "Neurology",
    "Pediatrics",
    "Psychiatry",
    "Orthopedics",
    "Other",
];

/// Options offered for the patient gender
pub const GENDERS: &[&str] = &["Female", "Male", "Other", "Prefer not to say"];

const USER_TYPES: &[&str] = &["Patient", "Practitioner"];

/// Trait for common form operations
pub trait Form {
    /// Visible fields in tab order
    fn focus_order(&self) -> Vec<FieldId>;
    fn active_field(&self) -> FieldId;
    fn set_active_field(&mut self, id: FieldId);
    fn field(&self, id: FieldId) -> Option<&FormField>;
    fn field_mut(&mut self, id: FieldId) -> Option<&mut FormField>;

    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let id = self.active_field();
        self.field_mut(id)
    }

    /// Run the blur-time check on the field that is losing focus
    fn blur_active(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.blur();
        }
    }

    fn next_field(&mut self) {
        self.move_focus(1);
    }

    fn prev_field(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, step: isize) {
        let order = self.focus_order();
        if order.is_empty() {
            return;
        }
        self.blur_active();
        let current = self.active_field();
        let index = order.iter().position(|f| *f == current).unwrap_or(0) as isize;
        let next = (index + step).rem_euclid(order.len() as isize) as usize;
        self.set_active_field(order[next]);
    }

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
    }

    fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
    }

    /// Left/right on a choice field
    fn cycle_option(&mut self, forward: bool) {
        if let Some(field) = self.get_active_field_mut() {
            if forward {
                field.next_option();
            } else {
                field.prev_option();
            }
        }
    }

    /// Space on a flag field
    fn toggle_active(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.toggle();
        }
    }
}

// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub remember: FormField,
    pub active_field: FieldId,
}

impl LoginForm {
    const ORDER: [FieldId; 3] = [FieldId::LoginEmail, FieldId::LoginPassword, FieldId::Remember];

    pub fn new() -> Self {
        Self {
            email: FormField::text(FieldId::LoginEmail)
                .required()
                .validated_as(FieldKind::Email),
            password: FormField::secret(FieldId::LoginPassword).required(),
            remember: FormField::flag(FieldId::Remember),
            active_field: FieldId::LoginEmail,
        }
    }

    /// Fill in the email after a patient registers and focus the password
    pub fn prefill_email(&mut self, email: &str) {
        self.email.set_text(email.to_string());
        self.email.blur();
        self.active_field = FieldId::LoginPassword;
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn focus_order(&self) -> Vec<FieldId> {
        Self::ORDER.to_vec()
    }
    fn active_field(&self) -> FieldId {
        self.active_field
    }
    fn set_active_field(&mut self, id: FieldId) {
        if Self::ORDER.contains(&id) {
            self.active_field = id;
        }
    }
    fn field(&self, id: FieldId) -> Option<&FormField> {
        match id {
            FieldId::LoginEmail => Some(&self.email),
            FieldId::LoginPassword => Some(&self.password),
            FieldId::Remember => Some(&self.remember),
            _ => None,
        }
    }
    fn field_mut(&mut self, id: FieldId) -> Option<&mut FormField> {
        match id {
            FieldId::LoginEmail => Some(&mut self.email),
            FieldId::LoginPassword => Some(&mut self.password),
            FieldId::Remember => Some(&mut self.remember),
            _ => None,
        }
    }
}

// Registration Form
#[derive(Debug, Clone)]
pub struct RegisterForm {
    controller: FormModeController,
    pub user_type: FormField,
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub specialization: FormField,
    pub license_number: FormField,
    pub experience: FormField,
    pub date_of_birth: FormField,
    pub gender: FormField,
    pub emergency_contact: FormField,
    pub active_field: FieldId,
    /// Set once the confirmation field has received input
    pub confirm_touched: bool,
}

impl RegisterForm {
    const ORDER: [FieldId; 13] = [
        FieldId::UserType,
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Specialization,
        FieldId::LicenseNumber,
        FieldId::Experience,
        FieldId::DateOfBirth,
        FieldId::Gender,
        FieldId::EmergencyContact,
    ];

    pub fn new() -> Self {
        let mut user_type = FormField::choice(FieldId::UserType, USER_TYPES);
        user_type.select(AudienceMode::default().label());

        let mut form = Self {
            controller: FormModeController::new(),
            user_type,
            first_name: FormField::text(FieldId::FirstName).required(),
            last_name: FormField::text(FieldId::LastName).required(),
            email: FormField::text(FieldId::Email)
                .required()
                .validated_as(FieldKind::Email),
            phone: FormField::text(FieldId::Phone)
                .required()
                .validated_as(FieldKind::Phone),
            password: FormField::secret(FieldId::Password)
                .required()
                .validated_as(FieldKind::Password),
            confirm_password: FormField::secret(FieldId::ConfirmPassword)
                .required()
                .validated_as(FieldKind::PasswordConfirmation),
            specialization: FormField::choice(FieldId::Specialization, SPECIALIZATIONS),
            license_number: FormField::text(FieldId::LicenseNumber),
            experience: FormField::text(FieldId::Experience).numeric(),
            date_of_birth: FormField::text(FieldId::DateOfBirth),
            gender: FormField::choice(FieldId::Gender, GENDERS),
            emergency_contact: FormField::text(FieldId::EmergencyContact),
            active_field: FieldId::UserType,
            confirm_touched: false,
        };
        let requirements = form.controller.requirements();
        form.apply_requirements(&requirements);
        form
    }

    pub fn mode(&self) -> AudienceMode {
        self.controller.mode()
    }

    pub fn controller(&self) -> &FormModeController {
        &self.controller
    }

    /// Switch audience and apply the resulting requirements to the fields
    pub fn set_mode(&mut self, mode: AudienceMode) -> FieldRequirement {
        let requirements = self.controller.set_mode(mode);
        self.user_type.select(mode.label());
        self.apply_requirements(&requirements);
        requirements
    }

    /// Show the active audience's fields and hide the rest
    fn apply_requirements(&mut self, requirements: &FieldRequirement) {
        let mode = self.controller.mode();
        for id in Self::ORDER {
            if id.audience().is_none() {
                continue;
            }
            if let Some(field) = self.field_mut(id) {
                field.visible = id.is_visible_in(mode);
                field.required = requirements.is_required(id);
            }
        }
        if !self.active_field.is_visible_in(mode) {
            self.active_field = FieldId::UserType;
        }
        let required: Vec<&str> = requirements
            .required_fields()
            .map(|id| id.as_str())
            .collect();
        tracing::debug!(
            mode = mode.label(),
            required = %required.join(","),
            "Applied field requirements"
        );
    }

    /// Recompute the confirmation status against the primary password
    fn recheck_confirmation(&mut self) {
        self.confirm_password.check = FieldCheck::on_input(
            FieldKind::PasswordConfirmation,
            self.confirm_password.as_text(),
            Some(self.password.as_text()),
        );
    }

    /// React to a value change on the active field
    fn after_edit(&mut self) {
        match self.active_field {
            FieldId::ConfirmPassword => {
                self.confirm_touched = true;
                self.recheck_confirmation();
            }
            FieldId::Password if !self.confirm_password.as_text().is_empty() => {
                self.recheck_confirmation();
            }
            _ => {}
        }
    }

    pub fn passwords_match(&self) -> bool {
        self.controller.validate_field(
            FieldKind::PasswordConfirmation,
            self.confirm_password.as_text(),
            Some(self.password.as_text()),
        )
    }

    /// First visible required field that is still empty
    pub fn first_missing_required(&self) -> Option<FieldId> {
        self.focus_order().into_iter().find(|id| {
            self.field(*id)
                .is_some_and(|field| field.required && field.is_blank())
        })
    }

    /// Back to a blank patient form
    pub fn reset(&mut self) {
        for id in Self::ORDER {
            if id == FieldId::UserType {
                continue;
            }
            if let Some(field) = self.field_mut(id) {
                field.clear();
            }
        }
        self.confirm_touched = false;
        self.set_mode(AudienceMode::Patient);
        self.active_field = FieldId::UserType;
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn focus_order(&self) -> Vec<FieldId> {
        let mode = self.controller.mode();
        Self::ORDER
            .into_iter()
            .filter(|id| id.is_visible_in(mode))
            .collect()
    }
    fn active_field(&self) -> FieldId {
        self.active_field
    }
    fn set_active_field(&mut self, id: FieldId) {
        if self.focus_order().contains(&id) {
            self.active_field = id;
        }
    }
    fn field(&self, id: FieldId) -> Option<&FormField> {
        match id {
            FieldId::UserType => Some(&self.user_type),
            FieldId::FirstName => Some(&self.first_name),
            FieldId::LastName => Some(&self.last_name),
            FieldId::Email => Some(&self.email),
            FieldId::Phone => Some(&self.phone),
            FieldId::Password => Some(&self.password),
            FieldId::ConfirmPassword => Some(&self.confirm_password),
            FieldId::Specialization => Some(&self.specialization),
            FieldId::LicenseNumber => Some(&self.license_number),
            FieldId::Experience => Some(&self.experience),
            FieldId::DateOfBirth => Some(&self.date_of_birth),
            FieldId::Gender => Some(&self.gender),
            FieldId::EmergencyContact => Some(&self.emergency_contact),
            _ => None,
        }
    }
    fn field_mut(&mut self, id: FieldId) -> Option<&mut FormField> {
        match id {
            FieldId::UserType => Some(&mut self.user_type),
            FieldId::FirstName => Some(&mut self.first_name),
            FieldId::LastName => Some(&mut self.last_name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Phone => Some(&mut self.phone),
            FieldId::Password => Some(&mut self.password),
            FieldId::ConfirmPassword => Some(&mut self.confirm_password),
            FieldId::Specialization => Some(&mut self.specialization),
            FieldId::LicenseNumber => Some(&mut self.license_number),
            FieldId::Experience => Some(&mut self.experience),
            FieldId::DateOfBirth => Some(&mut self.date_of_birth),
            FieldId::Gender => Some(&mut self.gender),
            FieldId::EmergencyContact => Some(&mut self.emergency_contact),
            _ => None,
        }
    }

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
        self.after_edit();
    }

    fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
        self.after_edit();
    }

    fn cycle_option(&mut self, forward: bool) {
        if self.active_field == FieldId::UserType {
            // Two audiences, so either direction flips
            let mode = self.controller.mode().toggle();
            self.set_mode(mode);
            return;
        }
        if let Some(field) = self.get_active_field_mut() {
            if forward {
                field.next_option();
            } else {
                field.prev_option();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut impl Form, text: &str) {
        for c in text.chars() {
            form.input_char(c);
        }
    }

    mod login_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = LoginForm::new();
            assert_eq!(form.active_field, FieldId::LoginEmail);
            assert_eq!(form.email.as_text(), "");
            assert!(!form.remember.as_flag());
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = LoginForm::new();
            for _ in 0..3 {
                form.next_field();
            }
            assert_eq!(form.active_field, FieldId::LoginEmail);
        }

        #[test]
        fn test_prev_field_wraps_to_last() {
            let mut form = LoginForm::new();
            form.prev_field();
            assert_eq!(form.active_field, FieldId::Remember);
        }

        #[test]
        fn test_leaving_email_validates_it() {
            let mut form = LoginForm::new();
            type_into(&mut form, "a@b");
            form.next_field();
            assert!(form.email.check.is_invalid());
        }

        #[test]
        fn test_leaving_empty_email_shows_nothing() {
            let mut form = LoginForm::new();
            form.next_field();
            assert_eq!(form.email.check, FieldCheck::Unchecked);
        }

        #[test]
        fn test_prefill_email_moves_to_password() {
            let mut form = LoginForm::new();
            form.prefill_email("jane@clinic.org");
            assert_eq!(form.email.as_text(), "jane@clinic.org");
            assert_eq!(form.email.check, FieldCheck::Valid);
            assert_eq!(form.active_field, FieldId::LoginPassword);
        }

        #[test]
        fn test_toggle_remember() {
            let mut form = LoginForm::new();
            form.set_active_field(FieldId::Remember);
            form.toggle_active();
            assert!(form.remember.as_flag());
        }

        #[test]
        fn test_set_active_field_ignores_foreign_fields() {
            let mut form = LoginForm::new();
            form.set_active_field(FieldId::Gender);
            assert_eq!(form.active_field, FieldId::LoginEmail);
        }
    }

    mod register_form {
        use super::*;

        #[test]
        fn test_new_is_patient_mode() {
            let form = RegisterForm::new();
            assert_eq!(form.mode(), AudienceMode::Patient);
            assert_eq!(form.user_type.as_text(), "Patient");
            assert!(form.date_of_birth.visible && form.date_of_birth.required);
            assert!(form.gender.visible && form.gender.required);
            assert!(form.emergency_contact.visible && !form.emergency_contact.required);
            assert!(!form.specialization.visible && !form.specialization.required);
        }

        #[test]
        fn test_set_mode_applies_requirements() {
            let mut form = RegisterForm::new();
            form.set_mode(AudienceMode::Practitioner);
            for id in FieldId::PRACTITIONER_FIELDS {
                let field = form.field(id).unwrap();
                assert!(field.visible && field.required, "{id} should be shown");
            }
            for id in FieldId::PATIENT_FIELDS {
                let field = form.field(id).unwrap();
                assert!(!field.visible && !field.required, "{id} should be hidden");
            }
            assert!(!form.emergency_contact.visible);
            assert_eq!(form.user_type.as_text(), "Practitioner");
        }

        #[test]
        fn test_focus_order_skips_hidden_fields() {
            let mut form = RegisterForm::new();
            assert!(!form.focus_order().contains(&FieldId::LicenseNumber));
            form.set_mode(AudienceMode::Practitioner);
            let order = form.focus_order();
            assert!(order.contains(&FieldId::LicenseNumber));
            assert!(!order.contains(&FieldId::Gender));
            assert_eq!(order.len(), 10);
        }

        #[test]
        fn test_cycle_on_user_type_switches_mode() {
            let mut form = RegisterForm::new();
            form.cycle_option(true);
            assert_eq!(form.mode(), AudienceMode::Practitioner);
            form.cycle_option(false);
            assert_eq!(form.mode(), AudienceMode::Patient);
        }

        #[test]
        fn test_active_hidden_field_falls_back_to_user_type() {
            let mut form = RegisterForm::new();
            form.set_active_field(FieldId::Gender);
            form.set_mode(AudienceMode::Practitioner);
            assert_eq!(form.active_field, FieldId::UserType);
        }

        #[test]
        fn test_confirmation_checked_on_every_keystroke() {
            let mut form = RegisterForm::new();
            form.password.set_text("Abcdef12".to_string());
            form.set_active_field(FieldId::ConfirmPassword);

            type_into(&mut form, "Abc");
            assert!(form.confirm_touched);
            assert!(form.confirm_password.check.is_invalid());

            type_into(&mut form, "def12");
            assert_eq!(form.confirm_password.check, FieldCheck::Valid);

            form.backspace();
            assert!(form.confirm_password.check.is_invalid());
        }

        #[test]
        fn test_password_edit_rechecks_nonempty_confirmation() {
            let mut form = RegisterForm::new();
            form.set_active_field(FieldId::Password);
            type_into(&mut form, "Abcdef12");
            assert_eq!(form.confirm_password.check, FieldCheck::Unchecked);

            form.confirm_password.set_text("Abcdef12".to_string());
            form.input_char('!');
            assert!(form.confirm_password.check.is_invalid());
        }

        #[test]
        fn test_leaving_weak_password_requests_hint() {
            let mut form = RegisterForm::new();
            form.set_active_field(FieldId::Password);
            type_into(&mut form, "weak");
            form.next_field();
            assert!(form.password.check.shows_requirements());
            assert_eq!(form.active_field, FieldId::ConfirmPassword);
        }

        #[test]
        fn test_first_missing_required_follows_tab_order() {
            let mut form = RegisterForm::new();
            assert_eq!(form.first_missing_required(), Some(FieldId::FirstName));
            form.first_name.set_text("Jane".to_string());
            form.last_name.set_text("Doe".to_string());
            form.email.set_text("jane@clinic.org".to_string());
            form.phone.set_text("+14155551234".to_string());
            form.password.set_text("Abcdef12".to_string());
            form.confirm_password.set_text("Abcdef12".to_string());
            assert_eq!(form.first_missing_required(), Some(FieldId::DateOfBirth));
            form.date_of_birth.set_text("1990-04-01".to_string());
            form.gender.select("Female");
            assert_eq!(form.first_missing_required(), None);
        }

        #[test]
        fn test_hidden_fields_never_block() {
            let mut form = RegisterForm::new();
            form.set_mode(AudienceMode::Practitioner);
            form.set_mode(AudienceMode::Patient);
            form.first_name.set_text("Jane".to_string());
            form.last_name.set_text("Doe".to_string());
            form.email.set_text("jane@clinic.org".to_string());
            form.phone.set_text("12".to_string());
            form.password.set_text("Abcdef12".to_string());
            form.confirm_password.set_text("Abcdef12".to_string());
            form.date_of_birth.set_text("1990-04-01".to_string());
            form.gender.select("Male");
            assert_eq!(form.first_missing_required(), None);
        }

        #[test]
        fn test_passwords_match() {
            let mut form = RegisterForm::new();
            assert!(form.passwords_match());
            form.password.set_text("Abcdef12".to_string());
            assert!(!form.passwords_match());
            form.confirm_password.set_text("Abcdef12".to_string());
            assert!(form.passwords_match());
        }

        #[test]
        fn test_reset_returns_to_blank_patient_form() {
            let mut form = RegisterForm::new();
            form.set_mode(AudienceMode::Practitioner);
            form.first_name.set_text("Greg".to_string());
            form.reset();
            assert_eq!(form.mode(), AudienceMode::Patient);
            assert_eq!(form.first_name.as_text(), "");
            assert_eq!(form.active_field, FieldId::UserType);
        }

        #[test]
        fn test_reset_clears_values_and_checks() {
            let mut form = RegisterForm::new();
            form.set_mode(AudienceMode::Practitioner);
            form.specialization.select("Cardiology");
            form.email.set_text("not-an-email".to_string());
            form.email.blur();
            form.set_active_field(FieldId::ConfirmPassword);
            type_into(&mut form, "x");
            assert!(form.confirm_touched);

            form.reset();

            assert_eq!(form.specialization.selected_option(), None);
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.email.check, FieldCheck::Unchecked);
            assert_eq!(form.confirm_password.check, FieldCheck::Unchecked);
            assert!(!form.confirm_touched);
            assert_eq!(form.user_type.selected_option(), Some("Patient"));
            assert!(form.date_of_birth.visible);
            assert!(!form.specialization.visible);
            assert!(!form.specialization.required);
        }

        #[test]
        fn test_experience_accepts_digits_only() {
            let mut form = RegisterForm::new();
            form.set_mode(AudienceMode::Practitioner);
            form.set_active_field(FieldId::Experience);
            type_into(&mut form, "1a5");
            assert_eq!(form.experience.as_text(), "15");
        }
    }
}
