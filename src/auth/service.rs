//! Timer-backed stand-in for a real auth backend
//!
//! Waits for a fixed delay and then accepts every request whose cheap
//! preconditions hold. A networked implementation would replace this type
//! behind [`AuthServiceTrait`].

use super::{AuthServiceTrait, Outcome, SubmissionRequest, LOGIN_FAILURE};
use crate::config::AuthConfig;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Simulated auth service
#[derive(Debug, Clone)]
pub struct SimulatedAuthService {
    login_delay: Duration,
    registration_delay: Duration,
    dashboard_destination: String,
}

impl SimulatedAuthService {
    pub fn new(
        login_delay: Duration,
        registration_delay: Duration,
        dashboard_destination: impl Into<String>,
    ) -> Self {
        Self {
            login_delay,
            registration_delay,
            dashboard_destination: dashboard_destination.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.login_delay(),
            config.registration_delay(),
            config.dashboard_destination(),
        )
    }
}

#[async_trait]
impl AuthServiceTrait for SimulatedAuthService {
    async fn submit(&self, request: SubmissionRequest) -> Result<Outcome> {
        match request {
            SubmissionRequest::Login(login) => {
                tokio::time::sleep(self.login_delay).await;
                if login.email.is_empty() || login.password.is_empty() {
                    return Ok(Outcome::failure(LOGIN_FAILURE));
                }
                tracing::info!(email = %login.email, remember = login.remember, "Login accepted");
                Ok(Outcome::login_success(&self.dashboard_destination))
            }
            SubmissionRequest::Registration(registration) => {
                tokio::time::sleep(self.registration_delay).await;
                tracing::info!(
                    email = %registration.email,
                    user_type = registration.user_type.label(),
                    "Registration accepted"
                );
                Ok(Outcome::registration_success(&registration))
            }
        }
    }
}
