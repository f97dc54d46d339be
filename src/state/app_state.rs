//! Application state definitions

use super::{LoginForm, RegisterForm};
use crate::auth::{NextAction, SubmissionKind};
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Login / registration tabs
    #[default]
    Auth,
    /// Landing page after a successful login
    Dashboard,
}

/// Which form is showing on the auth view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub const ALL: [AuthTab; 2] = [AuthTab::Login, AuthTab::Register];

    pub fn toggle(&self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

/// Transient error toast
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub shown_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    /// Check if the toast has been on screen long enough
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.ttl
    }
}

/// Success message waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessModal {
    pub message: String,
    /// Runs when the modal is closed
    pub next: NextAction,
}

/// A submission that has been handed to the auth service
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub kind: SubmissionKind,
    pub started_at: Instant,
}

/// Signed-in user, kept only for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub remember: bool,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn start(email: impl Into<String>, remember: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            remember,
            started_at: Utc::now(),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub active_tab: AuthTab,

    // Forms
    pub login: LoginForm,
    pub register: RegisterForm,

    // Feedback
    pub pending: Option<PendingSubmission>,
    pub success: Option<SuccessModal>,
    pub notification: Option<Notification>,

    // Session
    pub session: Option<Session>,
    /// Email of the login that is in flight, promoted to a session on success
    pub pending_login: Option<(String, bool)>,
    pub destination: Option<String>,
}

impl AppState {
    /// Switch between login and registration
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.active_tab = tab;
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Mark a submission as started
    pub fn begin_submission(&mut self, kind: SubmissionKind) {
        self.pending = Some(PendingSubmission {
            kind,
            started_at: Instant::now(),
        });
    }

    /// Clear the loading state
    pub fn finish_submission(&mut self) -> Option<PendingSubmission> {
        self.pending.take()
    }

    /// Show an error toast, replacing any current one
    pub fn notify_error(&mut self, message: impl Into<String>, ttl: Duration) {
        self.notification = Some(Notification::new(message, ttl));
    }

    /// Drop the toast once it has expired
    pub fn expire_notification(&mut self) {
        if self
            .notification
            .as_ref()
            .is_some_and(Notification::is_expired)
        {
            self.notification = None;
        }
    }

    /// Close the success modal and carry out its continuation
    pub fn close_success(&mut self) {
        let Some(modal) = self.success.take() else {
            return;
        };
        match modal.next {
            NextAction::ShowLogin { prefill_email } => {
                self.switch_tab(AuthTab::Login);
                self.login.prefill_email(&prefill_email);
            }
            NextAction::Close => {}
            NextAction::Navigate { destination } => {
                if let Some((email, remember)) = self.pending_login.take() {
                    self.session = Some(Session::start(email, remember));
                }
                self.destination = Some(destination);
                self.current_view = View::Dashboard;
            }
        }
    }

    /// End the session and return to a blank login form
    pub fn logout(&mut self) {
        self.session = None;
        self.destination = None;
        self.login = LoginForm::new();
        self.active_tab = AuthTab::Login;
        self.current_view = View::Auth;
    }
}
