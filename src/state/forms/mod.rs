//! Form domain layer
//!
//! Login and registration forms, their fields, and focus handling.

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, LoginForm, RegisterForm};
