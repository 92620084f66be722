mod template;
mod validation;

pub use template::render_template;
pub use validation::{validate_payload, ValidationError};
