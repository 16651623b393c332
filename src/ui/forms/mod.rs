//! Form rendering module
//!
//! - `field_renderer`: text, select and checkbox renderers
//! - `application_form`: the job application form and its action panel

mod application_form;
mod field_renderer;

pub use application_form::{
    button_areas, draw as draw_application_form, field_areas, split,
};
pub use field_renderer::{position_option_at, skill_at};
