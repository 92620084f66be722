use crate::presentation::config::LoggingSettings;

/// Configuration for tracing initialization, derived from the logging
/// section of the settings tree.
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        Self {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            level: settings.level.clone(),
            json_format: settings.enable_json,
        }
    }

    /// Default filter directive used when `RUST_LOG` is not set: the crate
    /// and its HTTP layer log at the configured level, everything else at
    /// info.
    pub fn filter_directive(&self) -> String {
        format!(
            "info,notegate={level},tower_http={level}",
            level = self.level
        )
    }
}
