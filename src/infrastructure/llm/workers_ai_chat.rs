use std::collections::HashMap;

use async_trait::async_trait;
use futures::stream::StreamExt;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{ChatClient, ChatClientError, ChatEventStream};
use crate::application::services::render_template;
use crate::domain::ChatMessage;
use crate::infrastructure::observability::preview_text;
use crate::presentation::config::{GenerationSettings, InferenceSettings};

/// Streaming chat client for a Workers AI style inference endpoint.
///
/// The upstream response body is handed back verbatim; SSE framing is left to
/// the model provider and piped straight through to the caller.
pub struct WorkersAiChatClient {
    client: Client,
    base_url: String,
    api_token: String,
    model: String,
    generation: GenerationSettings,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    messages: Vec<ChatMessage>,
    stream: bool,
    max_tokens: usize,
    temperature: f32,
    top_p: f32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

impl WorkersAiChatClient {
    pub fn new(settings: &InferenceSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_token: settings.api_token.clone(),
            model: settings.chat_model.clone(),
            generation: settings.generation.clone(),
        }
    }

    fn build_request(&self, system_prompt: &str, user_prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
            stream: true,
            max_tokens: self.generation.max_tokens,
            temperature: self.generation.temperature,
            top_p: self.generation.top_p,
            frequency_penalty: self.generation.frequency_penalty,
            presence_penalty: self.generation.presence_penalty,
        }
    }
}

#[async_trait]
impl ChatClient for WorkersAiChatClient {
    async fn converse(
        &self,
        system_prompt: &str,
        user_template: &str,
        values: &HashMap<String, String>,
    ) -> Result<ChatEventStream, ChatClientError> {
        let user_prompt = render_template(user_template, values);
        tracing::debug!(
            model = %self.model,
            prompt = %preview_text(&user_prompt),
            "Requesting streaming chat completion"
        );

        let request_body = self.build_request(system_prompt, &user_prompt);
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, self.model))
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ChatClientError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| ChatClientError::ApiRequestFailed(e.to_string())));

        Ok(Box::pin(stream))
    }
}
