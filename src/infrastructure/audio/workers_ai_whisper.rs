use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use serde::Serialize;

use crate::application::ports::{Transcription, TranscriptionEngine, TranscriptionError};
use crate::presentation::config::InferenceSettings;

/// Speech-to-text engine backed by a Workers AI whisper deployment.
pub struct WorkersAiWhisperEngine {
    client: reqwest::Client,
    endpoint: String,
    api_token: String,
}

#[derive(Serialize)]
struct WhisperRequest {
    audio: String,
    task: &'static str,
    vad_filter: &'static str,
    language: &'static str,
}

impl WorkersAiWhisperEngine {
    pub fn new(settings: &InferenceSettings) -> Self {
        let endpoint = format!(
            "{}/{}",
            settings.base_url.trim_end_matches('/'),
            settings.whisper_model,
        );
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_token: settings.api_token.clone(),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for WorkersAiWhisperEngine {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<Transcription, TranscriptionError> {
        let request_body = WhisperRequest {
            audio: BASE64_STANDARD.encode(audio_data),
            task: "transcribe",
            vad_filter: "true",
            language: "en",
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            bytes = audio_data.len(),
            "Sending audio to whisper model"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let result: Transcription = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

        tracing::info!(chars = result.text.len(), "Transcription completed");

        Ok(result)
    }
}
