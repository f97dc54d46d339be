//! Application state module

mod app_state;
mod field_id;
mod forms;
mod mode;
mod validation;

pub use app_state::*;
pub use field_id::FieldId;
pub use forms::*;
pub use mode::{AudienceMode, FieldRequirement, FormModeController};
pub use validation::{validate_field, FieldCheck, FieldKind, PASSWORD_REQUIREMENTS};
