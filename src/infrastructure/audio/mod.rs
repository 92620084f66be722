mod workers_ai_whisper;

pub use workers_ai_whisper::WorkersAiWhisperEngine;
