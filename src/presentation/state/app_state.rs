use std::sync::Arc;

use crate::application::ports::{ChatClient, TranscriptionEngine};

/// Per-process shared state: the two inference gateway clients.
///
/// Nothing here is mutable; every request is handled independently.
pub struct AppState<C, T>
where
    C: ChatClient,
    T: TranscriptionEngine,
{
    pub chat_client: Arc<C>,
    pub transcription_engine: Arc<T>,
}

impl<C, T> Clone for AppState<C, T>
where
    C: ChatClient,
    T: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            chat_client: Arc::clone(&self.chat_client),
            transcription_engine: Arc::clone(&self.transcription_engine),
        }
    }
}
