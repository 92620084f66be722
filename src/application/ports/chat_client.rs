use std::collections::HashMap;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

/// Raw byte stream of a streaming chat completion, in the upstream model's
/// own event-stream framing. The gateway never inspects its contents.
pub type ChatEventStream = Pin<Box<dyn Stream<Item = Result<Bytes, ChatClientError>> + Send>>;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Renders `user_template` with `values`, sends a system + user
    /// conversation to the chat model, and returns its streamed output.
    async fn converse(
        &self,
        system_prompt: &str,
        user_template: &str,
        values: &HashMap<String, String>,
    ) -> Result<ChatEventStream, ChatClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
