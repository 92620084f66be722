mod settings;

pub use settings::{
    GenerationSettings, InferenceSettings, LoggingSettings, ServerSettings, Settings,
    SettingsError,
};
