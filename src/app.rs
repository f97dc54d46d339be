//! Application state and core logic

use crate::auth::{
    AuthServiceTrait, LoginRequest, Outcome, RegistrationRequest, SimulatedAuthService,
    SubmissionKind, SubmissionRequest,
};
use crate::config::AuthConfig;
use crate::error::FormError;
use crate::state::{AppState, AuthTab, FieldId, FieldValue, Form, SuccessModal, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Result of a background submission, sent back to the UI loop
#[derive(Debug)]
pub struct SubmissionEvent {
    pub kind: SubmissionKind,
    pub result: Result<Outcome>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: AuthConfig,
    /// Whatever accepts logins and registrations
    service: Arc<dyn AuthServiceTrait>,
    events_tx: UnboundedSender<SubmissionEvent>,
    events_rx: UnboundedReceiver<SubmissionEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App backed by the simulated service
    pub fn new(config: AuthConfig) -> Self {
        let service = Arc::new(SimulatedAuthService::from_config(&config));
        Self::with_service(config, service)
    }

    pub fn with_service(config: AuthConfig, service: Arc<dyn AuthServiceTrait>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            config,
            service,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping: apply finished submissions and expire the toast
    pub fn tick(&mut self) {
        self.poll_submissions();
        self.state.expire_notification();
    }

    /// Drain every submission result that has arrived since the last frame
    pub fn poll_submissions(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_submission(event);
        }
    }

    fn apply_submission(&mut self, event: SubmissionEvent) {
        self.state.finish_submission();
        match event.result {
            Ok(Outcome::Success { message, next }) => {
                tracing::info!(kind = ?event.kind, "Submission succeeded");
                if event.kind == SubmissionKind::Registration {
                    self.state.register.reset();
                }
                self.state.success = Some(SuccessModal { message, next });
            }
            Ok(Outcome::Failure { message }) => {
                tracing::info!(kind = ?event.kind, %message, "Submission rejected");
                self.state.pending_login = None;
                self.push_error(message);
            }
            Err(err) => {
                tracing::error!(kind = ?event.kind, "Submission failed: {err:#}");
                self.state.pending_login = None;
                self.push_error(format!("Something went wrong: {err}"));
            }
        }
    }

    /// Show an error toast for the configured duration
    pub fn push_error(&mut self, message: impl Into<String>) {
        let ttl = self.config.notification_ttl();
        self.state.notify_error(message, ttl);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Success modal first (modal)
        if self.state.success.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.close_success();
            }
            return Ok(());
        }

        if self.state.is_submitting() {
            tracing::debug!(code = ?key.code, "Ignoring input while a submission is pending");
            return Ok(());
        }

        if key.code == KeyCode::Esc && self.state.notification.is_some() {
            self.state.notification = None;
            return Ok(());
        }

        match self.state.current_view {
            View::Auth => self.handle_auth_key(key),
            View::Dashboard => self.handle_dashboard_key(key),
        }
    }

    fn handle_auth_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('t') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let tab = self.state.active_tab.toggle();
            self.state.switch_tab(tab);
            return Ok(());
        }

        if key.code == KeyCode::Enter {
            match self.state.active_tab {
                AuthTab::Login => self.submit_login(),
                AuthTab::Register => self.submit_registration(),
            }
            return Ok(());
        }

        match self.state.active_tab {
            AuthTab::Login => edit_form(&mut self.state.login, key),
            AuthTab::Register => edit_form(&mut self.state.register, key),
        }
        Ok(())
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('l') => {
                tracing::info!("Logged out");
                self.state.logout();
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Build the login request and hand it to the service
    pub fn submit_login(&mut self) {
        if self.state.is_submitting() {
            tracing::debug!("Login already in flight");
            return;
        }
        self.state.login.blur_active();
        match LoginRequest::from_form(&self.state.login) {
            Ok(request) => {
                self.state.pending_login = Some((request.email.clone(), request.remember));
                self.dispatch(SubmissionRequest::Login(request));
            }
            Err(err) => {
                let focus = if self.state.login.email.is_blank() {
                    FieldId::LoginEmail
                } else {
                    FieldId::LoginPassword
                };
                self.state.login.set_active_field(focus);
                self.reject(err);
            }
        }
    }

    /// Build the registration request and hand it to the service
    pub fn submit_registration(&mut self) {
        if self.state.is_submitting() {
            tracing::debug!("Registration already in flight");
            return;
        }
        self.state.register.blur_active();
        match RegistrationRequest::from_form(&self.state.register) {
            Ok(request) => self.dispatch(SubmissionRequest::Registration(request)),
            Err(err) => {
                if let Some(field) = err.field() {
                    self.state.register.set_active_field(field);
                }
                self.reject(err);
            }
        }
    }

    fn reject(&mut self, err: FormError) {
        tracing::debug!(field = ?err.field(), "Submission blocked: {err}");
        self.push_error(err.to_string());
    }

    /// Run the request on a background task; the result arrives via `poll_submissions`
    fn dispatch(&mut self, request: SubmissionRequest) {
        let kind = request.kind();
        self.state.begin_submission(kind);

        let service = Arc::clone(&self.service);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = service.submit(request).await;
            if tx.send(SubmissionEvent { kind, result }).is_err() {
                tracing::warn!("Submission finished after the UI shut down");
            }
        });
    }
}

/// Route an editing key to the focused form
fn edit_form(form: &mut impl Form, key: KeyEvent) {
    let on_flag = form
        .field(form.active_field())
        .is_some_and(|field| matches!(field.value, FieldValue::Flag(_)));

    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Left => form.cycle_option(false),
        KeyCode::Right => form.cycle_option(true),
        KeyCode::Char(' ') if on_flag => form.toggle_active(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.input_char(c),
        KeyCode::Backspace => form.backspace(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{
        MockAuthServiceTrait, NextAction, LOGIN_SUCCESS, PASSWORDS_DO_NOT_MATCH,
        PATIENT_REGISTERED,
    };
    use crate::state::{AudienceMode, FieldCheck};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn app_with(mock: MockAuthServiceTrait) -> App {
        App::with_service(AuthConfig::default(), Arc::new(mock))
    }

    /// Registration tab with every patient field filled in
    fn app_with_patient_form(mock: MockAuthServiceTrait) -> App {
        let mut app = app_with(mock);
        app.state.switch_tab(AuthTab::Register);
        let form = &mut app.state.register;
        form.first_name.set_text("Jane".to_string());
        form.last_name.set_text("Doe".to_string());
        form.email.set_text("jane@clinic.org".to_string());
        form.phone.set_text("+14155551234".to_string());
        form.password.set_text("Abcdef12".to_string());
        form.confirm_password.set_text("Abcdef12".to_string());
        form.date_of_birth.set_text("1990-04-01".to_string());
        form.gender.select("Female");
        app
    }

    async fn settle(app: &mut App) {
        let event = app.events_rx.recv().await.expect("submission event");
        app.apply_submission(event);
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_goes_to_active_login_field() {
            let mut app = app_with(MockAuthServiceTrait::new());
            type_text(&mut app, "a@b.co");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "pw");
            assert_eq!(app.state.login.email.as_text(), "a@b.co");
            assert_eq!(app.state.login.password.as_text(), "pw");
        }

        #[test]
        fn test_leaving_invalid_email_marks_it() {
            let mut app = app_with(MockAuthServiceTrait::new());
            type_text(&mut app, "not-an-email");
            press(&mut app, KeyCode::Tab);
            assert!(app.state.login.email.check.is_invalid());
        }

        #[test]
        fn test_space_toggles_remember() {
            let mut app = app_with(MockAuthServiceTrait::new());
            press(&mut app, KeyCode::Up);
            assert_eq!(app.state.login.active_field, FieldId::Remember);
            press(&mut app, KeyCode::Char(' '));
            assert!(app.state.login.remember.as_flag());
        }

        #[test]
        fn test_ctrl_t_switches_tab() {
            let mut app = app_with(MockAuthServiceTrait::new());
            ctrl(&mut app, 't');
            assert_eq!(app.state.active_tab, AuthTab::Register);
            ctrl(&mut app, 't');
            assert_eq!(app.state.active_tab, AuthTab::Login);
        }

        #[test]
        fn test_arrows_on_user_type_switch_mode() {
            let mut app = app_with(MockAuthServiceTrait::new());
            ctrl(&mut app, 't');
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.register.mode(), AudienceMode::Practitioner);
            assert!(app.state.register.specialization.visible);
            assert!(!app.state.register.date_of_birth.visible);
        }

        #[test]
        fn test_confirmation_checked_while_typing() {
            let mut app = app_with(MockAuthServiceTrait::new());
            ctrl(&mut app, 't');
            app.state.register.password.set_text("Abcdef12".to_string());
            app.state.register.active_field = FieldId::ConfirmPassword;
            type_text(&mut app, "Abc");
            assert!(app.state.register.confirm_password.check.is_invalid());
            type_text(&mut app, "def12");
            assert_eq!(app.state.register.confirm_password.check, FieldCheck::Valid);
        }
    }

    mod blocked_submissions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_mismatched_passwords_never_reach_service() {
            let mut mock = MockAuthServiceTrait::new();
            mock.expect_submit().times(0);
            let mut app = app_with_patient_form(mock);
            app.state
                .register
                .confirm_password
                .set_text("Abcdef13".to_string());

            press(&mut app, KeyCode::Enter);

            assert!(!app.state.is_submitting());
            assert_eq!(
                app.state.notification.as_ref().map(|n| n.message.as_str()),
                Some(PASSWORDS_DO_NOT_MATCH)
            );
            assert_eq!(app.state.register.active_field, FieldId::ConfirmPassword);
        }

        #[test]
        fn test_missing_required_field_is_focused() {
            let mut mock = MockAuthServiceTrait::new();
            mock.expect_submit().times(0);
            let mut app = app_with_patient_form(mock);
            app.state.register.phone.clear();

            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.register.active_field, FieldId::Phone);
            assert_eq!(
                app.state.notification.as_ref().map(|n| n.message.as_str()),
                Some("Phone is required.")
            );
        }

        #[test]
        fn test_blank_login_shows_credentials_error() {
            let mut mock = MockAuthServiceTrait::new();
            mock.expect_submit().times(0);
            let mut app = app_with(mock);
            type_text(&mut app, "a@b.co");

            press(&mut app, KeyCode::Enter);

            assert!(!app.state.is_submitting());
            assert_eq!(app.state.login.active_field, FieldId::LoginPassword);
            assert_eq!(
                app.state.notification.as_ref().map(|n| n.message.as_str()),
                Some("Please enter valid credentials.")
            );
        }
    }

    mod submissions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_second_submit_ignored_while_pending() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let mut mock = MockAuthServiceTrait::new();
            mock.expect_submit().returning(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Outcome::failure("nope"))
            });
            let mut app = app_with(mock);
            app.state.login.email.set_text("a@b.co".to_string());
            app.state.login.password.set_text("pw".to_string());

            press(&mut app, KeyCode::Enter);
            assert!(app.state.is_submitting());
            press(&mut app, KeyCode::Enter);
            app.submit_login();

            settle(&mut app).await;
            for _ in 0..5 {
                tokio::task::yield_now().await;
            }
            app.poll_submissions();

            assert_eq!(calls.load(Ordering::SeqCst), 1);
            assert!(!app.state.is_submitting());
        }

        #[tokio::test]
        async fn test_input_ignored_while_pending() {
            let mut mock = MockAuthServiceTrait::new();
            mock.expect_submit()
                .returning(|_| Ok(Outcome::login_success("dashboard")));
            let mut app = app_with(mock);
            app.state.login.email.set_text("a@b.co".to_string());
            app.state.login.password.set_text("pw".to_string());

            press(&mut app, KeyCode::Enter);
            type_text(&mut app, "zzz");
            ctrl(&mut app, 't');

            assert_eq!(app.state.login.email.as_text(), "a@b.co");
            assert_eq!(app.state.active_tab, AuthTab::Login);
            settle(&mut app).await;
        }

        #[tokio::test]
        async fn test_login_success_navigates_on_dismiss() {
            let mut mock = MockAuthServiceTrait::new();
            mock.expect_submit()
                .withf(|request| {
                    matches!(request, SubmissionRequest::Login(login)
                        if login.email == "a@b.co" && login.remember)
                })
                .times(1)
                .returning(|_| Ok(Outcome::login_success("dashboard")));
            let mut app = app_with(mock);
            app.state.login.email.set_text("a@b.co".to_string());
            app.state.login.password.set_text("pw".to_string());
            app.state.login.remember.toggle();

            press(&mut app, KeyCode::Enter);
            settle(&mut app).await;

            let modal = app.state.success.clone().expect("success modal");
            assert_eq!(modal.message, LOGIN_SUCCESS);
            assert_eq!(app.state.current_view, View::Auth);

            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view, View::Dashboard);
            let session = app.state.session.clone().expect("session");
            assert_eq!(session.email, "a@b.co");
            assert!(session.remember);

            press(&mut app, KeyCode::Char('l'));
            assert_eq!(app.state.current_view, View::Auth);
            assert!(app.state.session.is_none());
        }

        #[tokio::test]
        async fn test_patient_registration_prefills_login() {
            let mut mock = MockAuthServiceTrait::new();
            mock.expect_submit().times(1).returning(|request| match request {
                SubmissionRequest::Registration(registration) => {
                    Ok(Outcome::registration_success(&registration))
                }
                SubmissionRequest::Login(_) => Ok(Outcome::failure("unexpected")),
            });
            let mut app = app_with_patient_form(mock);

            press(&mut app, KeyCode::Enter);
            assert_eq!(
                app.state.pending.as_ref().map(|p| p.kind),
                Some(SubmissionKind::Registration)
            );
            settle(&mut app).await;

            assert_eq!(
                app.state.success,
                Some(SuccessModal {
                    message: PATIENT_REGISTERED.to_string(),
                    next: NextAction::ShowLogin {
                        prefill_email: "jane@clinic.org".to_string()
                    },
                })
            );
            // Form is cleared as soon as the registration lands
            assert_eq!(app.state.register.first_name.as_text(), "");

            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.active_tab, AuthTab::Login);
            assert_eq!(app.state.login.email.as_text(), "jane@clinic.org");
            assert_eq!(app.state.login.active_field, FieldId::LoginPassword);
        }

        #[tokio::test]
        async fn test_service_error_becomes_toast() {
            let mut mock = MockAuthServiceTrait::new();
            mock.expect_submit()
                .returning(|_| Err(anyhow::anyhow!("connection refused")));
            let mut app = app_with(mock);
            app.state.login.email.set_text("a@b.co".to_string());
            app.state.login.password.set_text("pw".to_string());

            press(&mut app, KeyCode::Enter);
            settle(&mut app).await;

            assert!(app.state.success.is_none());
            assert!(app.state.pending_login.is_none());
            assert_eq!(
                app.state.notification.as_ref().map(|n| n.message.as_str()),
                Some("Something went wrong: connection refused")
            );
        }
    }

    #[test]
    fn test_dashboard_q_quits() {
        let mut app = app_with(MockAuthServiceTrait::new());
        app.state.current_view = View::Dashboard;
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_esc_dismisses_toast() {
        let mut app = app_with(MockAuthServiceTrait::new());
        app.push_error("oops");
        press(&mut app, KeyCode::Esc);
        assert!(app.state.notification.is_none());
    }
}
