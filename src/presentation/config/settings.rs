use serde::Deserialize;

const DEFAULT_CHAT_MODEL: &str = "@cf/meta/llama-3.3-70b-instruct-fp8-fast";
const DEFAULT_WHISPER_MODEL: &str = "@cf/openai/whisper-large-v3-turbo";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub inference: InferenceSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InferenceSettings {
    pub base_url: String,
    pub api_token: String,
    pub chat_model: String,
    pub whisper_model: String,
    #[serde(default)]
    pub generation: GenerationSettings,
}

/// Fixed sampling parameters for the chat model. Constructed once at startup
/// and never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub max_tokens: usize,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.6,
            top_p: 0.9,
            frequency_penalty: 0.3,
            presence_penalty: 0.3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}

impl Settings {
    /// Builds settings from the process environment.
    ///
    /// `WORKERS_AI_API_TOKEN` is required, plus either `WORKERS_AI_BASE_URL`
    /// or `WORKERS_AI_ACCOUNT_ID` (from which the Workers AI REST base URL is
    /// derived). Everything else has a default.
    pub fn from_env() -> Result<Self, SettingsError> {
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| SettingsError::InvalidVar("SERVER_PORT", raw))?,
            Err(_) => 3000,
        };

        let api_token = std::env::var("WORKERS_AI_API_TOKEN")
            .map_err(|_| SettingsError::MissingVar("WORKERS_AI_API_TOKEN"))?;

        let base_url = match std::env::var("WORKERS_AI_BASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let account_id = std::env::var("WORKERS_AI_ACCOUNT_ID")
                    .map_err(|_| SettingsError::MissingVar("WORKERS_AI_ACCOUNT_ID"))?;
                format!(
                    "https://api.cloudflare.com/client/v4/accounts/{}/ai/run",
                    account_id
                )
            }
        };

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            inference: InferenceSettings {
                base_url,
                api_token,
                chat_model: std::env::var("CHAT_MODEL")
                    .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
                whisper_model: std::env::var("WHISPER_MODEL")
                    .unwrap_or_else(|_| DEFAULT_WHISPER_MODEL.to_string()),
                generation: GenerationSettings::default(),
            },
            logging: LoggingSettings {
                level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        })
    }
}
