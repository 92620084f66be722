mod error;
mod health;
mod notes;
mod transcribe;

pub use error::{failure_response, handle_panic, not_found_handler, ErrorEnvelope};
pub use health::health_handler;
pub use notes::{
    action_items_handler, final_notes_handler, points_of_emphasis_handler,
    transcript_notes_handler,
};
pub use transcribe::transcribe_handler;
