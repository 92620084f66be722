mod chat_client;
mod transcription_engine;

pub use chat_client::{ChatClient, ChatClientError, ChatEventStream};
pub use transcription_engine::{Transcription, TranscriptionEngine, TranscriptionError};
