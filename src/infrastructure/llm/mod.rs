mod workers_ai_chat;

pub use workers_ai_chat::WorkersAiChatClient;
