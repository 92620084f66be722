mod message;
mod message_role;
pub mod prompts;
mod stage;

pub use message::ChatMessage;
pub use message_role::MessageRole;
pub use stage::PipelineStage;
