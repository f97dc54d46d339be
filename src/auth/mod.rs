//! Submission boundary between the form and whatever accepts it

mod service;
mod submission;
mod traits;

pub use service::SimulatedAuthService;
pub use submission::*;
pub use traits::AuthServiceTrait;

#[cfg(test)]
pub use traits::MockAuthServiceTrait;
