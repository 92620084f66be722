pub mod config;
mod cors;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{GenerationSettings, InferenceSettings, LoggingSettings, ServerSettings, Settings};
pub use cors::{cors_middleware, CORS_HEADERS};
pub use router::create_router;
pub use state::AppState;
