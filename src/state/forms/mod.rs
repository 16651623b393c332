//! Form domain layer
//!
//! Values, focus, validation and the post-submit summary of the
//! application form. Nothing here touches the terminal.

mod field;
mod form_state;
mod summary;
mod validation;

pub use field::{
    position_option_label, FieldId, FieldKind, Position, Skill,
    POSITION_OPTIONS,
};
pub use form_state::{ApplicationForm, ApplicationValues, FocusItem, ACTION_BUTTON_COUNT};
pub use summary::Summary;
pub use validation::{parse_interview_time, validate, ErrorMap, FieldError};
