//! Trait abstraction for the auth service to enable mocking in tests

use super::{Outcome, SubmissionRequest};
use anyhow::Result;
use async_trait::async_trait;

/// Accepts a login or registration and eventually resolves it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthServiceTrait: Send + Sync {
    /// Submit a request. `Err` means the service could not be reached at all.
    async fn submit(&self, request: SubmissionRequest) -> Result<Outcome>;
}
